//! Tower of Hanoi: three pegs, `n` disks, never a larger disk on a smaller one.

mod action;
mod analysis;
mod contracts;
mod difficulty;
mod error;
mod formula;
mod game;
mod invariants;
mod observer;
mod rules;
mod solver;
mod state;
mod types;

pub use action::{ErrorKind, Move, MoveError, MoveRejected, MoveRequest};
pub use analysis::{GameAnalysis, NO_MOVES_EFFICIENCY, format_efficiency};
pub use contracts::{Contract, MoveContract};
pub use difficulty::Difficulty;
pub use error::{DiskCountError, HanoiError, check_disk_count};
pub use formula::{
    FormulaCheck, formula, formula_table, minimum_moves, minimum_moves_recursive, time_estimate,
    validate_formulas,
};
pub use game::{HanoiGame, MoveOutcome, RESET_MESSAGE, Reconfigured, SolveRequest};
pub use invariants::{
    CompletionConsistentInvariant, DescendingPegsInvariant, DiskConservationInvariant,
    HanoiInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
};
pub use observer::{LoggingObserver, StateObserver};
pub use rules::{is_complete, legal_moves, pegs_descending, validate_move};
pub use solver::{PegRoles, SolutionStep, solve};
pub use state::{GameSnapshot, GameState};
pub use types::{Disk, MAX_DISKS, MIN_DISKS, Peg, Towers};
