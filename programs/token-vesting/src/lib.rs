//! Token vesting program.
//!
//! Holds fixed token allocations in a PDA-owned vault and releases them to
//! beneficiaries linearly: each schedule earns `(amount / duration) / 365`
//! tokens per whole day since creation, claimable by the owner at most once
//! per day per schedule. The accounting lives in [`engine`]; the handlers in
//! [`instructions`] only bind accounts, the clock and the SPL Token program
//! to it.

use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

use engine::ClaimReceipt;
use state::VestingSchedule;

declare_id!("61EiRiRNSU4ZEhnn8JpC6L9VRHz6oKvD9YzSP6bNZNWp");

#[program]
pub mod token_vesting {
    use super::*;

    /// Creates the vesting state and vault, seeding the store from four
    /// equal-length sequences. The signer becomes the owner.
    pub fn initialize(
        ctx: Context<Initialize>,
        titles: Vec<String>,
        beneficiaries: Vec<Pubkey>,
        amounts: Vec<u64>,
        durations: Vec<u64>,
    ) -> Result<()> {
        instructions::initialize(ctx, titles, beneficiaries, amounts, durations)
    }

    /// Appends a schedule starting now. Owner only. Returns its index.
    pub fn add_schedule(
        ctx: Context<AddSchedule>,
        title: String,
        beneficiary: Pubkey,
        amount: u64,
        duration: u64,
    ) -> Result<u64> {
        instructions::add_schedule(ctx, title, beneficiary, amount, duration)
    }

    /// Releases the vested amount of schedule `index`. Owner only, once per day.
    pub fn claim(ctx: Context<Claim>, index: u64) -> Result<ClaimReceipt> {
        instructions::claim(ctx, index)
    }

    /// Funds the vault. Open to any holder of the vesting mint.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens(ctx, amount)
    }

    /// Hands the owner role to `new_owner`. Owner only.
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    /// Tokens currently held by the vault.
    pub fn engine_balance(ctx: Context<EngineBalance>) -> Result<u64> {
        instructions::engine_balance(ctx)
    }

    /// Number of schedules in the store.
    pub fn schedule_count(ctx: Context<ReadSchedules>) -> Result<u64> {
        instructions::schedule_count(ctx)
    }

    /// Schedule stored at `index`.
    pub fn get_schedule(ctx: Context<ReadSchedules>, index: u64) -> Result<VestingSchedule> {
        instructions::get_schedule(ctx, index)
    }

    /// Emits what a claim on `index` would release now, without claiming.
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, index: u64) -> Result<u64> {
        instructions::emit_vesting_quote(ctx, index)
    }
}
