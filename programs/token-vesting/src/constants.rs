//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Divisor turning the per-duration total into the daily release rate.
pub const DAYS_PER_YEAR: u64 = 365;

/// Minimum spacing between two successful claims on one schedule.
pub const CLAIM_INTERVAL: i64 = SECONDS_PER_DAY;

/// Max schedule title length in bytes; bounds the per-schedule account space.
pub const MAX_TITLE_LEN: usize = 64;

/// Seed of the single vesting state PDA (also the vault authority).
pub const VESTING_STATE_SEED: &[u8] = b"vesting_state";

/// Seed of the token vault PDA, combined with the vesting state key.
pub const VAULT_SEED: &[u8] = b"vault";
