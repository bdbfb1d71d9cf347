//! Test doubles shared by the engine tests.

use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::constants::SECONDS_PER_DAY;
use crate::engine::{AccessControl, Ledger, SignerAuthority};
use crate::error::VestingError;
use crate::state::VestingState;

pub const T0: i64 = 1_767_225_600; // 2026-01-01 00:00:00 UTC
pub const DAY: i64 = SECONDS_PER_DAY;
pub const OWNER: u8 = 1;
pub const VAULT: u8 = 9;

pub fn key(tag: u8) -> Pubkey {
    Pubkey::new_from_array([tag; 32])
}

pub fn owner() -> SignerAuthority {
    SignerAuthority::new(key(OWNER))
}

pub fn state_owned_by(owner: Pubkey) -> VestingState {
    VestingState {
        owner,
        mint: key(2),
        vault: key(VAULT),
        bump: 255,
        vault_bump: 254,
        schedules: Vec::new(),
    }
}

/// Policy refusing every caller.
pub struct DenyAll;

impl AccessControl for DenyAll {
    fn ensure_privileged(&self, _owner: &Pubkey) -> Result<()> {
        err!(VestingError::Unauthorized)
    }
}

/// Balance book keyed by holder; the engine pays out of `holder`.
pub struct InMemoryLedger {
    holder: Pubkey,
    balances: HashMap<Pubkey, u64>,
    pub transfers: Vec<(Pubkey, u64)>,
}

impl InMemoryLedger {
    pub fn new(holder: Pubkey) -> Self {
        Self {
            holder,
            balances: HashMap::new(),
            transfers: Vec::new(),
        }
    }

    /// Inbound funding performed by an outside party.
    pub fn credit(&mut self, to: Pubkey, amount: u64) {
        *self.balances.entry(to).or_default() += amount;
    }
}

impl Ledger for InMemoryLedger {
    fn balance_of(&self, holder: &Pubkey) -> Result<u64> {
        Ok(self.balances.get(holder).copied().unwrap_or_default())
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        let available = self.balance_of(&self.holder)?;
        require!(available >= amount, VestingError::LedgerTransferFailed);
        self.balances.insert(self.holder, available - amount);
        self.credit(*to, amount);
        self.transfers.push((*to, amount));
        Ok(())
    }
}
