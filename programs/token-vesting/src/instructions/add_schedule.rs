use anchor_lang::prelude::*;

use crate::constants::VESTING_STATE_SEED;
use crate::engine::{self, SignerAuthority};
use crate::state::VestingState;

pub fn add_schedule(
    ctx: Context<AddSchedule>,
    title: String,
    beneficiary: Pubkey,
    amount: u64,
    duration: u64,
) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let access = SignerAuthority::new(ctx.accounts.owner.key());

    let st = &mut ctx.accounts.vesting_state;
    let index = engine::add_schedule(st, &access, title, beneficiary, amount, duration, now)?;

    emit!(ScheduleCreated {
        index,
        beneficiary,
        amount,
        duration,
        start_time: now,
    });
    msg!("Schedule {} added for {} ({} over {}s)", index, beneficiary, amount, duration);

    Ok(index)
}

/// Grows the state account by exactly one schedule record.
#[derive(Accounts)]
pub struct AddSchedule<'info> {
    #[account(
        mut,
        seeds = [VESTING_STATE_SEED],
        bump = vesting_state.bump,
        realloc = VestingState::space(vesting_state.schedules.len() + 1),
        realloc::payer = owner,
        realloc::zero = false,
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ScheduleCreated {
    pub index: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub duration: u64,
    pub start_time: i64,
}
