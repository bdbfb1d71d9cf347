use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::VestingState;

/// External token ledger the engine pays out of.
#[cfg_attr(test, mockall::automock)]
pub trait Ledger {
    /// Balance currently held by `holder`.
    fn balance_of(&self, holder: &Pubkey) -> Result<u64>;

    /// Moves `amount` from the engine's holding to `to`. All-or-nothing.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Balance held by the engine's vault.
pub fn engine_balance(state: &VestingState, ledger: &impl Ledger) -> Result<u64> {
    ledger.balance_of(&state.vault)
}

/// PDA-signed payout route out of the vault.
struct Payout<'a, 'info> {
    recipient: &'a Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

/// [`Ledger`] over an SPL Token vault account owned by the vesting state PDA.
pub struct TokenVault<'a, 'info> {
    vault: &'a Account<'info, TokenAccount>,
    payout: Option<Payout<'a, 'info>>,
}

impl<'a, 'info> TokenVault<'a, 'info> {
    /// Balance queries only; any transfer is rejected.
    pub fn read_only(vault: &'a Account<'info, TokenAccount>) -> Self {
        Self { vault, payout: None }
    }

    /// Vault able to pay `recipient`, signing as `authority` with `signer_seeds`.
    pub fn new(
        vault: &'a Account<'info, TokenAccount>,
        recipient: &'a Account<'info, TokenAccount>,
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Self {
        Self {
            vault,
            payout: Some(Payout {
                recipient,
                authority,
                token_program,
                signer_seeds,
            }),
        }
    }
}

impl Ledger for TokenVault<'_, '_> {
    fn balance_of(&self, holder: &Pubkey) -> Result<u64> {
        vault_balance(holder, &self.vault.key(), self.vault.amount)
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        let payout = payout_route(self.payout.as_ref())?;
        check_payout(
            to,
            &payout.recipient.owner,
            &payout.recipient.mint,
            &self.vault.mint,
            self.vault.amount,
            amount,
        )?;

        token::transfer(
            CpiContext::new_with_signer(
                payout.token_program.clone(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: payout.recipient.to_account_info(),
                    authority: payout.authority.clone(),
                },
                payout.signer_seeds,
            ),
            amount,
        )
        .map_err(|err| {
            msg!("Vault transfer of {} to {} rejected: {}", amount, to, err);
            error!(VestingError::LedgerTransferFailed)
        })
    }
}

fn vault_balance(holder: &Pubkey, vault: &Pubkey, vault_amount: u64) -> Result<u64> {
    require_keys_eq!(*holder, *vault, VestingError::InvalidTokenAccount);
    Ok(vault_amount)
}

fn payout_route<'p, 'a, 'info>(
    payout: Option<&'p Payout<'a, 'info>>,
) -> Result<&'p Payout<'a, 'info>> {
    payout.ok_or_else(|| {
        msg!("Vault opened read-only; transfers disabled");
        error!(VestingError::LedgerTransferFailed)
    })
}

/// Destination token account must belong to `to` and hold the vault mint;
/// the vault must cover `amount`.
fn check_payout(
    to: &Pubkey,
    recipient_owner: &Pubkey,
    recipient_mint: &Pubkey,
    vault_mint: &Pubkey,
    vault_amount: u64,
    amount: u64,
) -> Result<()> {
    if recipient_owner != to {
        msg!("Destination owned by {}, expected {}", recipient_owner, to);
        return err!(VestingError::LedgerTransferFailed);
    }
    if recipient_mint != vault_mint {
        msg!("Destination mint {} differs from vault mint {}", recipient_mint, vault_mint);
        return err!(VestingError::LedgerTransferFailed);
    }
    if vault_amount < amount {
        msg!("Vault holds {}, transfer needs {}", vault_amount, amount);
        return err!(VestingError::LedgerTransferFailed);
    }
    Ok(())
}
