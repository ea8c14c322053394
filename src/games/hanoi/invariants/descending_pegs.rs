//! Ordering invariant: no disk rests on a smaller one.

use super::super::GameState;
use super::super::rules::pegs_descending;
use super::Invariant;

/// Invariant: every peg is strictly decreasing from bottom to top.
pub struct DescendingPegsInvariant;

impl Invariant<GameState> for DescendingPegsInvariant {
    fn holds(state: &GameState) -> bool {
        pegs_descending(state.towers())
    }

    fn description() -> &'static str {
        "Disk sizes strictly decrease from bottom to top on every peg"
    }
}
