use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{VAULT_SEED, VESTING_STATE_SEED};
use crate::engine::{self, TokenVault};
use crate::error::VestingError;
use crate::state::{VestingSchedule, VestingState};

pub fn engine_balance(ctx: Context<EngineBalance>) -> Result<u64> {
    let ledger = TokenVault::read_only(&ctx.accounts.vault);
    engine::engine_balance(&ctx.accounts.vesting_state, &ledger)
}

pub fn schedule_count(ctx: Context<ReadSchedules>) -> Result<u64> {
    Ok(ctx.accounts.vesting_state.schedule_count())
}

pub fn get_schedule(ctx: Context<ReadSchedules>, index: u64) -> Result<VestingSchedule> {
    ctx.accounts.vesting_state.schedule(index).cloned()
}

#[derive(Accounts)]
pub struct EngineBalance<'info> {
    #[account(seeds = [VESTING_STATE_SEED], bump = vesting_state.bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        seeds = [VAULT_SEED, vesting_state.key().as_ref()],
        bump = vesting_state.vault_bump,
        constraint = vault.key() == vesting_state.vault @ VestingError::InvalidTokenAccount,
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[derive(Accounts)]
pub struct ReadSchedules<'info> {
    #[account(seeds = [VESTING_STATE_SEED], bump = vesting_state.bump)]
    pub vesting_state: Account<'info, VestingState>,
}
