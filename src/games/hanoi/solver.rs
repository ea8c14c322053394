//! Optimal solver.
//!
//! Produces the canonical `2^n - 1` move sequence without touching any game.

use super::action::MoveError;
use super::error::DiskCountError;
use super::types::{Disk, MAX_DISKS, Peg};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Which peg plays which part in a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct PegRoles {
    /// Where the disks start.
    source: Peg,
    /// Where the disks must end up.
    destination: Peg,
    /// The spare.
    auxiliary: Peg,
}

impl PegRoles {
    /// Assigns roles to pegs. All three must be different.
    pub fn new(source: Peg, destination: Peg, auxiliary: Peg) -> Result<Self, MoveError> {
        if source == destination || source == auxiliary {
            return Err(MoveError::SamePeg(source));
        }
        if destination == auxiliary {
            return Err(MoveError::SamePeg(destination));
        }
        Ok(Self {
            source,
            destination,
            auxiliary,
        })
    }

    /// Assigns roles from raw peg indices.
    pub fn from_indices(source: usize, destination: usize, auxiliary: usize) -> Result<Self, MoveError> {
        match (
            Peg::from_index(source),
            Peg::from_index(destination),
            Peg::from_index(auxiliary),
        ) {
            (Some(s), Some(d), Some(a)) => Self::new(s, d, a),
            _ => Err(MoveError::PegOutOfRange {
                from: source,
                to: destination,
            }),
        }
    }
}

impl Default for PegRoles {
    fn default() -> Self {
        Self {
            source: Peg::Source,
            destination: Peg::Destination,
            auxiliary: Peg::Auxiliary,
        }
    }
}

/// One move of a solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SolutionStep {
    /// The disk to move.
    disk: Disk,
    /// Peg to take it from.
    from: Peg,
    /// Peg to put it on.
    to: Peg,
    /// e.g. `Move disk 1 from peg 1 to peg 2`.
    description: String,
}

impl SolutionStep {
    fn new(disk: Disk, from: Peg, to: Peg) -> Self {
        Self {
            disk,
            from,
            to,
            description: format!("Move disk {disk} from {from} to {to}"),
        }
    }
}

/// Solves `disk_count` disks for the given roles.
///
/// Returns exactly `2^disk_count - 1` steps; zero disks need no steps.
///
/// # Errors
///
/// Returns [`DiskCountError`] if `disk_count` is above [`MAX_DISKS`].
#[instrument]
pub fn solve(disk_count: u8, roles: PegRoles) -> Result<Vec<SolutionStep>, DiskCountError> {
    if disk_count > MAX_DISKS {
        warn!(disk_count, "Rejected solver disk count");
        return Err(DiskCountError {
            requested: disk_count,
        });
    }
    Ok(solve_unchecked(disk_count, roles))
}

/// Solves a disk count the caller has already range-checked.
pub(super) fn solve_unchecked(disk_count: u8, roles: PegRoles) -> Vec<SolutionStep> {
    let capacity = 1usize
        .checked_shl(u32::from(disk_count))
        .unwrap_or(0)
        .saturating_sub(1);
    let mut steps = Vec::with_capacity(capacity);
    solve_into(disk_count, roles.source, roles.destination, roles.auxiliary, &mut steps);
    debug!(steps = steps.len(), "Solution computed");
    steps
}

fn solve_into(n: u8, source: Peg, destination: Peg, auxiliary: Peg, steps: &mut Vec<SolutionStep>) {
    if n == 0 {
        return;
    }
    solve_into(n - 1, source, auxiliary, destination, steps);
    steps.push(SolutionStep::new(Disk::new(n), source, destination));
    solve_into(n - 1, auxiliary, destination, source, steps);
}
