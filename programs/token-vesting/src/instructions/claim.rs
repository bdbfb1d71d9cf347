use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{VAULT_SEED, VESTING_STATE_SEED};
use crate::engine::{self, ClaimReceipt, SignerAuthority, TokenVault};
use crate::error::VestingError;
use crate::state::VestingState;

pub fn claim(ctx: Context<Claim>, index: u64) -> Result<ClaimReceipt> {
    let now = Clock::get()?.unix_timestamp;

    // Capture AccountInfos/keys before taking mutable borrows.
    let vesting_state_ai = ctx.accounts.vesting_state.to_account_info();
    let token_program_ai = ctx.accounts.token_program.to_account_info();
    let access = SignerAuthority::new(ctx.accounts.owner.key());
    let bump = ctx.accounts.vesting_state.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[VESTING_STATE_SEED, &[bump]]];

    let accounts = &mut *ctx.accounts;
    let mut ledger = TokenVault::new(
        &accounts.vault,
        &accounts.beneficiary_token_account,
        vesting_state_ai,
        token_program_ai,
        signer_seeds,
    );
    let receipt = engine::claim(
        &mut accounts.vesting_state,
        &access,
        &mut ledger,
        index,
        now,
    )?;

    emit!(TokensClaimed {
        index,
        beneficiary: receipt.beneficiary,
        amount: receipt.amount,
        tokens_claimed: receipt.tokens_claimed,
        last_claim: receipt.last_claim,
    });
    msg!(
        "Schedule {}: released {} to {} (total {})",
        index,
        receipt.amount,
        receipt.beneficiary,
        receipt.tokens_claimed
    );

    Ok(receipt)
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [VESTING_STATE_SEED], bump = vesting_state.bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vesting_state.key().as_ref()],
        bump = vesting_state.vault_bump,
        constraint = vault.key() == vesting_state.vault @ VestingError::InvalidTokenAccount,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Destination; must be owned by the schedule's beneficiary.
    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub index: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub tokens_claimed: u64,
    pub last_claim: i64,
}
