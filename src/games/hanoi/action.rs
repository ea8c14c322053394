//! First-class action types for the Tower of Hanoi.
//!
//! A request names two peg indices exactly as the caller supplied them; it is
//! only checked against the rules when validated. Applied moves become
//! [`Move`] records in the game history.

use super::types::{Disk, Peg, Towers};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A request to move the top disk of one peg onto another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Index of the peg to take from.
    pub from: usize,
    /// Index of the peg to place onto.
    pub to: usize,
}

impl MoveRequest {
    /// Creates a new move request.
    #[instrument(level = "trace")]
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// An applied move, as recorded in the game history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Move {
    /// One-based sequence number.
    number: usize,
    /// The disk that moved.
    disk: Disk,
    /// Peg the disk left.
    from: Peg,
    /// Peg the disk landed on.
    to: Peg,
    /// The towers immediately after the move.
    towers: Towers,
}

impl Move {
    pub(super) fn new(number: usize, disk: Disk, from: Peg, to: Peg, towers: Towers) -> Self {
        Self {
            number,
            disk,
            from,
            to,
            towers,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{}: disk {} from {} to {}",
            self.number, self.disk, self.from, self.to
        )
    }
}

/// Category of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum ErrorKind {
    /// A peg index or disk count is outside its bounds.
    Range,
    /// The move breaks the emptiness or size-ordering rule.
    RuleViolation,
    /// The move would leave the disk where it is.
    NoOp,
    /// The engine caught itself breaking an invariant.
    Internal,
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A peg index is not 0, 1 or 2.
    #[display("peg out of range: {} -> {} (pegs are 0-2)", from, to)]
    PegOutOfRange {
        /// Requested source index.
        from: usize,
        /// Requested destination index.
        to: usize,
    },

    /// There is nothing to move.
    #[display("source peg empty: {}", _0)]
    SourceEmpty(Peg),

    /// Source and destination are the same peg.
    #[display("cannot move to same peg: {}", _0)]
    SamePeg(Peg),

    /// The moving disk is larger than the disk it would land on.
    #[display("cannot place disk {} on disk {}", disk, onto)]
    LargerOnSmaller {
        /// The disk on top of the source peg.
        disk: Disk,
        /// The disk on top of the destination peg.
        onto: Disk,
    },

    /// An invariant was violated (postcondition failure).
    #[display("invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MoveError::PegOutOfRange { .. } => ErrorKind::Range,
            MoveError::SourceEmpty(_) | MoveError::LargerOnSmaller { .. } => {
                ErrorKind::RuleViolation
            }
            MoveError::SamePeg(_) => ErrorKind::NoOp,
            MoveError::InvariantViolation(_) => ErrorKind::Internal,
        }
    }
}

impl std::error::Error for MoveError {}

/// A move the engine refused. The game state is exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, Getters)]
#[display("{}", reason)]
pub struct MoveRejected {
    /// Why the move was refused.
    #[error(source)]
    reason: MoveError,
    /// Move count, unchanged by the rejection.
    move_count: usize,
}

impl MoveRejected {
    pub(super) fn new(reason: MoveError, move_count: usize) -> Self {
        Self { reason, move_count }
    }

    /// Returns the category of the rejection.
    pub fn kind(&self) -> ErrorKind {
        self.reason.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(MoveError::PegOutOfRange { from: 3, to: 0 }.kind(), ErrorKind::Range);
        assert_eq!(MoveError::SourceEmpty(Peg::Auxiliary).kind(), ErrorKind::RuleViolation);
        assert_eq!(MoveError::SamePeg(Peg::Source).kind(), ErrorKind::NoOp);
        assert_eq!(
            MoveError::LargerOnSmaller {
                disk: Disk::new(2),
                onto: Disk::new(1)
            }
            .kind(),
            ErrorKind::RuleViolation
        );
    }

    #[test]
    fn test_error_messages_name_the_rule() {
        assert!(
            MoveError::PegOutOfRange { from: 0, to: 5 }
                .to_string()
                .starts_with("peg out of range")
        );
        assert_eq!(
            MoveError::SourceEmpty(Peg::Destination).to_string(),
            "source peg empty: peg 2"
        );
        assert!(MoveError::SamePeg(Peg::Source).to_string().contains("cannot move to same peg"));
        assert_eq!(
            MoveError::LargerOnSmaller {
                disk: Disk::new(2),
                onto: Disk::new(1)
            }
            .to_string(),
            "cannot place disk 2 on disk 1"
        );
    }

    #[test]
    fn test_rejection_displays_reason() {
        let rejected = MoveRejected::new(MoveError::SamePeg(Peg::Auxiliary), 4);
        assert_eq!(rejected.to_string(), "cannot move to same peg: peg 3");
        assert_eq!(*rejected.move_count(), 4);
        assert_eq!(rejected.kind(), ErrorKind::NoOp);
    }
}
