//! Disk conservation invariant: no disk is created, lost or duplicated.

use super::super::{Disk, GameState};
use super::Invariant;

/// Invariant: the pegs hold exactly the disks `1..=n`, each once.
pub struct DiskConservationInvariant;

impl Invariant<GameState> for DiskConservationInvariant {
    fn holds(state: &GameState) -> bool {
        let mut disks: Vec<Disk> = state.towers().pegs().iter().flatten().copied().collect();
        disks.sort();

        disks
            .into_iter()
            .map(Disk::size)
            .eq(1..=state.disk_count())
    }

    fn description() -> &'static str {
        "Pegs hold exactly the disks 1..=n, each once"
    }
}
