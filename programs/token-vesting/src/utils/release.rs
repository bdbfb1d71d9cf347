//! Linear release calculator.
//!
//! The daily rate is derived in two floor divisions, in this order:
//! `(amount / duration) / 365`. The result is not capped against what the
//! schedule has already released; the claim processor does that.

use crate::constants::DAYS_PER_YEAR;
use crate::error::VestingError;
use crate::state::VestingSchedule;
use crate::utils::time;

/// Tokens released per whole day elapsed.
pub fn daily_rate(amount: u64, duration: u64) -> Result<u64, VestingError> {
    let per_duration = amount
        .checked_div(duration)
        .ok_or(VestingError::DivisionByZeroDuration)?;
    Ok(per_duration / DAYS_PER_YEAR)
}

/// Amount `schedule` may release at `now_ts`: `rate * days_since_start`.
pub fn releasable_amount(schedule: &VestingSchedule, now_ts: i64) -> Result<u64, VestingError> {
    let rate = daily_rate(schedule.amount, schedule.duration)?;
    let days = time::days_elapsed(now_ts, schedule.start_time)?;
    rate.checked_mul(days).ok_or(VestingError::MathOverflow)
}
