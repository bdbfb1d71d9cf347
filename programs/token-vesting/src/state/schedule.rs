use anchor_lang::prelude::*;

use crate::constants::MAX_TITLE_LEN;
use crate::error::VestingError;

/// One beneficiary allocation released linearly over time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    /// Human-readable label (<= MAX_TITLE_LEN bytes).
    pub title: String,
    /// Wallet receiving released tokens.
    pub beneficiary: Pubkey,
    /// Total allocation in base units (> 0).
    pub amount: u64,
    /// Vesting period length in seconds (> 0).
    pub duration: u64,
    /// Creation timestamp (Unix seconds, UTC).
    pub start_time: i64,
    /// Timestamp of the latest successful claim, `start_time` until the first.
    pub last_claim: i64,
    /// Cumulative amount released so far (<= amount).
    pub tokens_claimed: u64,
}

impl VestingSchedule {
    pub const SIZE: usize =
        4 + MAX_TITLE_LEN + // title
        32 + // beneficiary
        8 +  // amount
        8 +  // duration
        8 +  // start_time
        8 +  // last_claim
        8;   // tokens_claimed

    /// Validates creation parameters and builds a fresh schedule starting at `now_ts`.
    pub fn new(
        title: String,
        beneficiary: Pubkey,
        amount: u64,
        duration: u64,
        now_ts: i64,
    ) -> Result<Self> {
        require!(title.len() <= MAX_TITLE_LEN, VestingError::TitleTooLong);
        require!(beneficiary != Pubkey::default(), VestingError::InvalidPubkey);
        require!(amount > 0, VestingError::InvalidAmount);
        require!(duration > 0, VestingError::DivisionByZeroDuration);

        Ok(Self {
            title,
            beneficiary,
            amount,
            duration,
            start_time: now_ts,
            last_claim: now_ts,
            tokens_claimed: 0,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.tokens_claimed >= self.amount
    }

    /// Allocation not yet released.
    pub fn remaining(&self) -> u64 {
        self.amount.saturating_sub(self.tokens_claimed)
    }

    /// Commits a successful claim of `released` tokens at `now_ts`.
    pub fn record_claim(&mut self, now_ts: i64, released: u64) -> Result<()> {
        require!(released <= self.remaining(), VestingError::MathOverflow);
        self.tokens_claimed = self
            .tokens_claimed
            .checked_add(released)
            .ok_or(VestingError::MathOverflow)?;
        self.last_claim = self.last_claim.max(now_ts);
        Ok(())
    }
}
