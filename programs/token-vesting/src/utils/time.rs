//! Whole-day arithmetic over Unix timestamps (UTC seconds).
//! - days_elapsed = floor((now - start) / 86400), zero before start
//! - a claim window opens CLAIM_INTERVAL seconds after the previous claim (inclusive)

use crate::constants::{CLAIM_INTERVAL, SECONDS_PER_DAY};
use crate::error::VestingError;

/// Whole days elapsed between `start_ts` and `now_ts`.
pub fn days_elapsed(now_ts: i64, start_ts: i64) -> Result<u64, VestingError> {
    if now_ts <= start_ts {
        return Ok(0);
    }
    let secs = now_ts
        .checked_sub(start_ts)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(secs / SECONDS_PER_DAY).map_err(|_| VestingError::MathOverflow)
}

/// Earliest timestamp at which the next claim is admitted.
pub fn next_claim_at(last_claim_ts: i64) -> Result<i64, VestingError> {
    last_claim_ts
        .checked_add(CLAIM_INTERVAL)
        .ok_or(VestingError::MathOverflow)
}

/// True once at least one full claim interval has passed since `last_claim_ts`.
pub fn claim_window_open(now_ts: i64, last_claim_ts: i64) -> Result<bool, VestingError> {
    Ok(now_ts >= next_claim_at(last_claim_ts)?)
}
