use anchor_lang::prelude::*;

use crate::constants::VESTING_STATE_SEED;
use crate::engine::{self, SignerAuthority};
use crate::state::VestingState;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let access = SignerAuthority::new(ctx.accounts.owner.key());
    let st = &mut ctx.accounts.vesting_state;
    let previous_owner = engine::transfer_ownership(st, &access, new_owner)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    msg!("Ownership transferred from {} to {}", previous_owner, new_owner);
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [VESTING_STATE_SEED], bump = vesting_state.bump)]
    pub vesting_state: Account<'info, VestingState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
