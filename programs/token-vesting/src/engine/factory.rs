use anchor_lang::prelude::*;

use crate::engine::AccessControl;
use crate::error::VestingError;
use crate::state::{VestingSchedule, VestingState};

/// Appends a new schedule starting at `now_ts` and returns its index.
pub fn add_schedule(
    state: &mut VestingState,
    access: &impl AccessControl,
    title: String,
    beneficiary: Pubkey,
    amount: u64,
    duration: u64,
    now_ts: i64,
) -> Result<u64> {
    access.ensure_privileged(&state.owner)?;
    let schedule = VestingSchedule::new(title, beneficiary, amount, duration, now_ts)?;
    Ok(state.push(schedule))
}

/// Builds the initial schedule set from four parallel sequences, in order.
/// Fails as a whole: either every tuple yields a schedule or none is returned.
pub fn build_schedules(
    titles: Vec<String>,
    beneficiaries: Vec<Pubkey>,
    amounts: Vec<u64>,
    durations: Vec<u64>,
    now_ts: i64,
) -> Result<Vec<VestingSchedule>> {
    let count = titles.len();
    require!(
        beneficiaries.len() == count && amounts.len() == count && durations.len() == count,
        VestingError::InputLengthMismatch
    );

    titles
        .into_iter()
        .zip(beneficiaries)
        .zip(amounts)
        .zip(durations)
        .map(|(((title, beneficiary), amount), duration)| {
            VestingSchedule::new(title, beneficiary, amount, duration, now_ts)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use crate::engine::testing::{key, owner, state_owned_by, DenyAll, OWNER, T0};

    #[test]
    fn add_returns_previous_count_and_keeps_old_indices() {
        let mut st = state_owned_by(key(OWNER));
        let a = add_schedule(&mut st, &owner(), "a".into(), key(20), 36_500, 100, T0).unwrap();
        let b = add_schedule(&mut st, &owner(), "b".into(), key(21), 500, 7, T0 + 5).unwrap();
        assert_eq!((a, b), (0, 1));

        let c = add_schedule(&mut st, &owner(), "c".into(), key(22), 9, 9, T0 + 9).unwrap();
        assert_eq!(c, 2);
        assert_eq!(st.schedule(0).unwrap().beneficiary, key(20));
        assert_eq!(st.schedule(1).unwrap().start_time, T0 + 5);
        assert_eq!(st.schedule(1).unwrap().last_claim, T0 + 5);
    }

    #[test]
    fn unauthorized_add_leaves_store_untouched() {
        let mut st = state_owned_by(key(OWNER));
        let err = add_schedule(&mut st, &DenyAll, "a".into(), key(20), 1, 1, T0).unwrap_err();
        assert_eq!(err, Error::from(VestingError::Unauthorized));
        assert_eq!(st.schedule_count(), 0);
    }

    #[test]
    fn zero_duration_rejected_before_append() {
        let mut st = state_owned_by(key(OWNER));
        let err = add_schedule(&mut st, &owner(), "a".into(), key(20), 1_000, 0, T0).unwrap_err();
        assert_eq!(err, Error::from(VestingError::DivisionByZeroDuration));
        assert_eq!(st.schedule_count(), 0);
    }

    #[test]
    fn build_preserves_sequence_order() {
        let built = build_schedules(
            vec!["seed".into(), "team".into(), "advisors".into()],
            vec![key(20), key(21), key(22)],
            vec![100, 200, 300],
            vec![10, 20, 30],
            T0,
        )
        .unwrap();
        assert_eq!(built.len(), 3);
        assert_eq!(built[1].title, "team");
        assert_eq!(built[2].beneficiary, key(22));
        assert_eq!(built[2].amount, 300);
        assert!(built.iter().all(|s| s.start_time == T0 && s.tokens_claimed == 0));
    }

    #[test]
    fn mismatched_lengths_fail_entirely() {
        let err = build_schedules(
            vec!["a".into(), "b".into(), "c".into()],
            vec![key(20), key(21)],
            vec![1, 2, 3],
            vec![1, 2, 3],
            T0,
        )
        .unwrap_err();
        assert_eq!(err, Error::from(VestingError::InputLengthMismatch));

        let err = build_schedules(vec!["a".into()], vec![key(20)], vec![1], vec![], T0)
            .unwrap_err();
        assert_eq!(err, Error::from(VestingError::InputLengthMismatch));
    }

    #[test]
    fn one_invalid_tuple_fails_the_whole_batch() {
        let err = build_schedules(
            vec!["a".into(), "b".into()],
            vec![key(20), key(21)],
            vec![100, 200],
            vec![10, 0],
            T0,
        )
        .unwrap_err();
        assert_eq!(err, Error::from(VestingError::DivisionByZeroDuration));
    }

    #[test]
    fn empty_sequences_build_an_empty_store() {
        let built = build_schedules(vec![], vec![], vec![], vec![], T0).unwrap();
        assert!(built.is_empty());
    }
}
