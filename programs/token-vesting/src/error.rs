use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Schedule input sequences have different lengths")]
    InputLengthMismatch,

    #[msg("Unauthorized: owner signature required")]
    Unauthorized,

    #[msg("Vault holds no tokens")]
    NoTokensAvailable,

    #[msg("Schedule index out of range")]
    InvalidIndex,

    #[msg("Schedule has released its full amount")]
    VestingAlreadyCompleted,

    #[msg("Claim attempted less than one day after the previous claim")]
    ClaimTooSoon,

    #[msg("Token transfer out of the vault failed")]
    LedgerTransferFailed,

    #[msg("Schedule duration must be greater than zero")]
    DivisionByZeroDuration,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Schedule title too long")]
    TitleTooLong,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
