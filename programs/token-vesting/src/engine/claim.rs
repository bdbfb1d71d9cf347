use anchor_lang::prelude::*;

use crate::engine::{AccessControl, Ledger};
use crate::error::VestingError;
use crate::state::{VestingSchedule, VestingState};
use crate::utils::{release, time};

/// Outcome of a successful claim.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub index: u64,
    pub beneficiary: Pubkey,
    /// Amount moved to the beneficiary by this claim.
    pub amount: u64,
    pub tokens_claimed: u64,
    pub last_claim: i64,
}

/// Read-only projection of what a claim at `now` would do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimQuote {
    pub index: u64,
    pub beneficiary: Pubkey,
    pub days_elapsed: u64,
    pub releasable: u64,
    pub tokens_claimed: u64,
    pub next_claim_at: i64,
}

/// Releases the vested amount of schedule `index` to its beneficiary.
///
/// Preconditions are checked in order: caller privilege, non-empty vault,
/// valid index, schedule not completed, one full day since the last claim.
/// The payout is `rate * days_since_start` capped at the unreleased
/// allocation, so `tokens_claimed` never exceeds `amount`. The schedule is
/// only updated after the ledger accepted the transfer.
pub fn claim(
    state: &mut VestingState,
    access: &impl AccessControl,
    ledger: &mut impl Ledger,
    index: u64,
    now_ts: i64,
) -> Result<ClaimReceipt> {
    access.ensure_privileged(&state.owner)?;
    require!(
        ledger.balance_of(&state.vault)? > 0,
        VestingError::NoTokensAvailable
    );

    let schedule = state.schedule(index)?;
    require!(!schedule.is_completed(), VestingError::VestingAlreadyCompleted);
    require!(
        time::claim_window_open(now_ts, schedule.last_claim)?,
        VestingError::ClaimTooSoon
    );

    let amount = payout_amount(schedule, now_ts)?;
    let beneficiary = schedule.beneficiary;

    ledger.transfer(&beneficiary, amount)?;

    let schedule = state.schedule_mut(index)?;
    schedule.record_claim(now_ts, amount)?;

    Ok(ClaimReceipt {
        index,
        beneficiary,
        amount,
        tokens_claimed: schedule.tokens_claimed,
        last_claim: schedule.last_claim,
    })
}

/// Releasable amount capped at the unreleased allocation. A `rate * days`
/// product past u64 already exceeds any allocation, so it pays out the rest.
fn payout_amount(schedule: &VestingSchedule, now_ts: i64) -> Result<u64> {
    match release::releasable_amount(schedule, now_ts) {
        Ok(releasable) => Ok(releasable.min(schedule.remaining())),
        Err(VestingError::MathOverflow) => Ok(schedule.remaining()),
        Err(err) => Err(err.into()),
    }
}

pub fn quote(state: &VestingState, index: u64, now_ts: i64) -> Result<ClaimQuote> {
    let schedule = state.schedule(index)?;
    let releasable = payout_amount(schedule, now_ts)?;

    Ok(ClaimQuote {
        index,
        beneficiary: schedule.beneficiary,
        days_elapsed: time::days_elapsed(now_ts, schedule.start_time)?,
        releasable,
        tokens_claimed: schedule.tokens_claimed,
        next_claim_at: time::next_claim_at(schedule.last_claim)?,
    })
}
