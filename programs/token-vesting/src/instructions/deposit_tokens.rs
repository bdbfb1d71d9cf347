use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{VAULT_SEED, VESTING_STATE_SEED};
use crate::error::VestingError;
use crate::state::VestingState;

/// Credits the vault from any depositor's token account of the vesting mint.
pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let st = &ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.depositor_token_account.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.depositor_token_account.owner,
        ctx.accounts.depositor.key(),
        VestingError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(TokensDeposited {
        depositor: ctx.accounts.depositor.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });
    msg!(
        "Deposited {} into vault. Balance: {}",
        amount,
        ctx.accounts.vault.amount
    );

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [VESTING_STATE_SEED], bump = vesting_state.bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vesting_state.key().as_ref()],
        bump = vesting_state.vault_bump,
        constraint = vault.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub depositor: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
