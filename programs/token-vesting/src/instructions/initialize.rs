use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{VAULT_SEED, VESTING_STATE_SEED};
use crate::engine;
use crate::instructions::ScheduleCreated;
use crate::state::VestingState;

pub fn initialize(
    ctx: Context<Initialize>,
    titles: Vec<String>,
    beneficiaries: Vec<Pubkey>,
    amounts: Vec<u64>,
    durations: Vec<u64>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let schedules = engine::build_schedules(titles, beneficiaries, amounts, durations, now)?;

    let st = &mut ctx.accounts.vesting_state;
    st.owner = ctx.accounts.owner.key();
    st.mint = ctx.accounts.mint.key();
    st.vault = ctx.accounts.vault.key();
    st.bump = ctx.bumps.vesting_state;
    st.vault_bump = ctx.bumps.vault;
    st.schedules = schedules;

    for (index, s) in st.schedules.iter().enumerate() {
        emit!(ScheduleCreated {
            index: index as u64,
            beneficiary: s.beneficiary,
            amount: s.amount,
            duration: s.duration,
            start_time: s.start_time,
        });
    }

    emit!(VestingInitialized {
        owner: st.owner,
        mint: st.mint,
        vault: st.vault,
        schedule_count: st.schedule_count(),
    });
    msg!(
        "Vesting initialized with {} schedule(s), vault {}",
        st.schedule_count(),
        st.vault
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(titles: Vec<String>)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = VestingState::space(titles.len()),
        seeds = [VESTING_STATE_SEED],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = vesting_state,
        seeds = [VAULT_SEED, vesting_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub schedule_count: u64,
}
