use anchor_lang::prelude::*;

use crate::constants::VESTING_STATE_SEED;
use crate::engine;
use crate::state::VestingState;

/// Emits what a claim on `index` would release now; returns that amount.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, index: u64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let q = engine::quote(&ctx.accounts.vesting_state, index, now)?;

    emit!(VestingQuote {
        index,
        beneficiary: q.beneficiary,
        days_elapsed: q.days_elapsed,
        releasable: q.releasable,
        tokens_claimed: q.tokens_claimed,
        next_claim_at: q.next_claim_at,
    });

    Ok(q.releasable)
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [VESTING_STATE_SEED], bump = vesting_state.bump)]
    pub vesting_state: Account<'info, VestingState>,
}

#[event]
pub struct VestingQuote {
    pub index: u64,
    pub beneficiary: Pubkey,
    pub days_elapsed: u64,
    pub releasable: u64,
    pub tokens_claimed: u64,
    pub next_claim_at: i64,
}
