//! History consistency invariant: the history accounts for every move.

use super::super::{GameState, Towers};
use super::Invariant;

/// Invariant: the move count equals the history length, moves are numbered
/// `1..=count`, and the latest recorded towers match the live ones.
///
/// With no history the towers must still be in their starting layout.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.len() != state.move_count() {
            return false;
        }

        let numbered = history
            .iter()
            .enumerate()
            .all(|(i, mov)| *mov.number() == i + 1);
        if !numbered {
            return false;
        }

        match history.last() {
            Some(last) => last.towers() == state.towers(),
            None => *state.towers() == Towers::new(state.disk_count()),
        }
    }

    fn description() -> &'static str {
        "Move count matches history and the latest record matches the pegs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::{Disk, Peg};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new(3)));
    }

    #[test]
    fn test_moves_hold() {
        let mut state = GameState::new(3);
        state.apply_move(Peg::Source, Peg::Destination);
        state.apply_move(Peg::Source, Peg::Auxiliary);
        assert!(HistoryConsistentInvariant::holds(&state));
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_count_mismatch_violates() {
        let mut state = GameState::new(3);
        state.apply_move(Peg::Source, Peg::Destination);
        state.set_move_count(2);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_unrecorded_change_violates() {
        let mut state = GameState::new(3);
        state.apply_move(Peg::Source, Peg::Destination);
        // Move a disk behind the history's back.
        let disk = state.towers_mut().peg_mut(Peg::Destination).pop();
        assert_eq!(disk, Some(Disk::new(1)));
        state.towers_mut().peg_mut(Peg::Auxiliary).push(Disk::new(1));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
