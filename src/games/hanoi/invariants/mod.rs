//! First-class invariants for the Tower of Hanoi.
//!
//! Invariants are logical properties that must hold after every operation on a
//! [`GameState`](super::GameState). They are testable independently and are
//! checked as move postconditions by the engine.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod completion_consistent;
pub mod descending_pegs;
pub mod disk_conservation;
pub mod history_consistent;

pub use completion_consistent::CompletionConsistentInvariant;
pub use descending_pegs::DescendingPegsInvariant;
pub use disk_conservation::DiskConservationInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// All Tower of Hanoi invariants as a composable set.
pub type HanoiInvariants = (
    DiskConservationInvariant,
    DescendingPegsInvariant,
    HistoryConsistentInvariant,
    CompletionConsistentInvariant,
);
