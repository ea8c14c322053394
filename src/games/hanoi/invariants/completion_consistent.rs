//! Completion invariant: the flag agrees with the pegs.

use super::super::GameState;
use super::super::rules::is_complete;
use super::Invariant;

/// Invariant: the completion flag is set iff every disk is on the
/// destination peg.
pub struct CompletionConsistentInvariant;

impl Invariant<GameState> for CompletionConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.is_complete() == is_complete(state.towers(), state.disk_count())
    }

    fn description() -> &'static str {
        "Completion flag agrees with the pegs"
    }
}
