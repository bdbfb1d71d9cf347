use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingState;

/// Capability check run before any mutating engine operation.
pub trait AccessControl {
    /// Succeeds only when the caller holds the privileged role for `owner`.
    fn ensure_privileged(&self, owner: &Pubkey) -> Result<()>;
}

/// Owner policy: the transaction signer must be the stored owner.
#[derive(Clone, Copy, Debug)]
pub struct SignerAuthority {
    signer: Pubkey,
}

impl SignerAuthority {
    pub fn new(signer: Pubkey) -> Self {
        Self { signer }
    }
}

impl AccessControl for SignerAuthority {
    fn ensure_privileged(&self, owner: &Pubkey) -> Result<()> {
        require_keys_eq!(self.signer, *owner, VestingError::Unauthorized);
        Ok(())
    }
}

/// Hands the owner role to `new_owner`, returning the previous owner.
pub fn transfer_ownership(
    state: &mut VestingState,
    access: &impl AccessControl,
    new_owner: Pubkey,
) -> Result<Pubkey> {
    access.ensure_privileged(&state.owner)?;
    require!(new_owner != Pubkey::default(), VestingError::InvalidPubkey);
    Ok(std::mem::replace(&mut state.owner, new_owner))
}
