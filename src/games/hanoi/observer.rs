//! State-change notifications.
//!
//! The engine pushes a fresh [`GameSnapshot`] to every registered observer
//! after each operation that changed the game. Observers only ever see copies.

use super::state::GameSnapshot;
use tracing::{debug, info};

/// Receives a snapshot after every change to a game.
pub trait StateObserver {
    /// Called with the latest snapshot.
    fn state_changed(&mut self, snapshot: &GameSnapshot);
}

impl<F> StateObserver for F
where
    F: FnMut(&GameSnapshot),
{
    fn state_changed(&mut self, snapshot: &GameSnapshot) {
        self(snapshot)
    }
}

/// Observer that logs snapshots using tracing.
///
/// Routine changes log at DEBUG; a solved puzzle logs at INFO.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl StateObserver for LoggingObserver {
    fn state_changed(&mut self, snapshot: &GameSnapshot) {
        if *snapshot.complete() {
            info!(
                moves = snapshot.move_count(),
                minimum = snapshot.minimum_moves(),
                efficiency = %snapshot.efficiency(),
                "Puzzle solved"
            );
        } else {
            debug!(
                disks = snapshot.disk_count(),
                moves = snapshot.move_count(),
                towers = ?snapshot.towers().pegs(),
                "Game state changed"
            );
        }
    }
}
