//! Contract-based validation for the Tower of Hanoi.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{MoveError, MoveRequest};
use super::invariants::{HanoiInvariants, InvariantSet};
use super::rules::validate_move;
use super::state::GameState;
use super::types::Disk;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// What a satisfied precondition tells the caller.
    type Checked;

    /// What the postcondition needs to remember from the state before the
    /// action.
    type Baseline;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Records the baseline to hand to [`Contract::post`].
    fn baseline(state: &S) -> Self::Baseline;

    /// Checks postconditions after applying the action.
    fn post(before: &Self::Baseline, after: &S) -> Result<(), MoveError>;
}

/// Contract for move actions.
///
/// Preconditions:
/// - Pegs in range, source not empty, pegs differ
/// - Moving disk smaller than the destination's top disk
///
/// Postconditions:
/// - Exactly one more move in the history
/// - Every invariant in [`HanoiInvariants`] holds
pub struct MoveContract;

impl Contract<GameState, MoveRequest> for MoveContract {
    type Checked = Disk;
    type Baseline = usize;

    fn pre(state: &GameState, action: &MoveRequest) -> Result<Disk, MoveError> {
        validate_move(state.towers(), *action)
    }

    fn baseline(state: &GameState) -> usize {
        state.move_count()
    }

    #[instrument(skip_all)]
    fn post(before: &usize, after: &GameState) -> Result<(), MoveError> {
        if after.move_count() != before + 1 {
            warn!(
                before,
                after = after.move_count(),
                "Move count did not advance by one"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move count did not advance by one".to_string(),
            ));
        }

        HanoiInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::Peg;

    #[test]
    fn test_precondition_returns_moving_disk() {
        let state = GameState::new(3);
        assert_eq!(
            MoveContract::pre(&state, &MoveRequest::new(0, 2)),
            Ok(Disk::new(1))
        );
    }

    #[test]
    fn test_precondition_rejects_same_peg() {
        let state = GameState::new(3);
        assert!(matches!(
            MoveContract::pre(&state, &MoveRequest::new(0, 0)),
            Err(MoveError::SamePeg(Peg::Source))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut state = GameState::new(3);
        let before = MoveContract::baseline(&state);
        state.apply_move(Peg::Source, Peg::Destination);
        assert!(MoveContract::post(&before, &state).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut state = GameState::new(3);
        let before = MoveContract::baseline(&state);
        state.apply_move(Peg::Source, Peg::Destination);
        state.towers_mut().peg_mut(Peg::Source).clear();

        assert!(matches!(
            MoveContract::post(&before, &state),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_one_move() {
        let state = GameState::new(3);
        let before = MoveContract::baseline(&state);
        assert!(MoveContract::post(&before, &state).is_err());
    }
}
