use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingSchedule;

/// Vesting state PDA: configuration plus the append-only schedule store.
///
/// A schedule's position in `schedules` is its permanent identifier; entries
/// are only ever appended and mutated in place.
#[account]
pub struct VestingState {
    /// Owner authority gating schedule creation and claims.
    pub owner: Pubkey,
    /// Token mint of the vested asset.
    pub mint: Pubkey,
    /// Vault token account holding the engine's balance.
    pub vault: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
    pub schedules: Vec<VestingSchedule>,
}

impl VestingState {
    pub const BASE_SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // vault
        1 +  // bump
        1 +  // vault_bump
        4;   // schedules vec header

    /// Account space (discriminator included) for `count` schedules.
    pub const fn space(count: usize) -> usize {
        8 + Self::BASE_SIZE + count * VestingSchedule::SIZE
    }

    pub fn schedule_count(&self) -> u64 {
        self.schedules.len() as u64
    }

    pub fn schedule(&self, index: u64) -> Result<&VestingSchedule> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.schedules.get(i))
            .ok_or_else(|| error!(VestingError::InvalidIndex))
    }

    pub fn schedule_mut(&mut self, index: u64) -> Result<&mut VestingSchedule> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.schedules.get_mut(i))
            .ok_or_else(|| error!(VestingError::InvalidIndex))
    }

    /// Appends `schedule` and returns its index (the previous count).
    pub fn push(&mut self, schedule: VestingSchedule) -> u64 {
        let index = self.schedule_count();
        self.schedules.push(schedule);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const T0: i64 = 1_767_225_600;

    fn empty_state() -> VestingState {
        VestingState {
            owner: Pubkey::new_from_array([1; 32]),
            mint: Pubkey::new_from_array([2; 32]),
            vault: Pubkey::new_from_array([9; 32]),
            bump: 255,
            vault_bump: 254,
            schedules: Vec::new(),
        }
    }

    fn schedule(tag: u8) -> VestingSchedule {
        VestingSchedule::new(
            format!("s{tag}"),
            Pubkey::new_from_array([tag; 32]),
            1_000,
            100,
            T0,
        )
        .unwrap()
    }

    #[test]
    fn push_returns_previous_count() {
        let mut st = empty_state();
        assert_eq!(st.push(schedule(10)), 0);
        assert_eq!(st.push(schedule(11)), 1);
        assert_eq!(st.push(schedule(12)), 2);
        assert_eq!(st.schedule_count(), 3);
    }

    #[test]
    fn indices_stay_stable_after_appends() {
        let mut st = empty_state();
        st.push(schedule(10));
        st.push(schedule(11));
        let first = st.schedule(0).unwrap().clone();
        for tag in 12..20 {
            st.push(schedule(tag));
        }
        assert_eq!(st.schedule(0).unwrap(), &first);
        assert_eq!(st.schedule(1).unwrap().beneficiary, Pubkey::new_from_array([11; 32]));
    }

    #[test]
    fn out_of_range_index_rejected() {
        let mut st = empty_state();
        assert_eq!(st.schedule(0).unwrap_err(), Error::from(VestingError::InvalidIndex));
        st.push(schedule(10));
        assert_eq!(st.schedule(1).unwrap_err(), Error::from(VestingError::InvalidIndex));
        assert_eq!(
            st.schedule_mut(u64::MAX).unwrap_err(),
            Error::from(VestingError::InvalidIndex)
        );
    }

    #[test]
    fn space_grows_by_one_record_per_schedule() {
        assert_eq!(
            VestingState::space(3) - VestingState::space(2),
            VestingSchedule::SIZE
        );
        let mut st = empty_state();
        st.push(VestingSchedule::new(
            "x".repeat(crate::constants::MAX_TITLE_LEN),
            Pubkey::new_from_array([4; 32]),
            u64::MAX,
            u64::MAX,
            i64::MAX,
        )
        .unwrap());
        let mut encoded = Vec::new();
        AnchorSerialize::serialize(&st, &mut encoded).unwrap();
        assert!(8 + encoded.len() <= VestingState::space(1));
    }
}
