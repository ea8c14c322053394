//! Core domain types for the Tower of Hanoi.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Smallest disk count a game may be configured with.
pub const MIN_DISKS: u8 = 1;

/// Largest disk count a game may be configured with (4095 minimum moves).
pub const MAX_DISKS: u8 = 12;

/// A disk, identified by its size. Size 1 is the smallest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Disk(u8);

impl Disk {
    /// Creates a disk of the given size.
    pub fn new(size: u8) -> Self {
        Self(size)
    }

    /// Returns the size of the disk.
    pub fn size(self) -> u8 {
        self.0
    }
}

/// One of the three pegs.
///
/// The discriminants are the conventional peg indices: the game starts with
/// every disk on [`Peg::Source`] and is won when they all sit on
/// [`Peg::Destination`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Peg {
    /// Peg 0, where the disks start.
    Source,
    /// Peg 1, where the disks must end up.
    Destination,
    /// Peg 2, the spare.
    Auxiliary,
}

impl Peg {
    /// Returns the zero-based index of this peg.
    pub fn index(self) -> usize {
        match self {
            Peg::Source => 0,
            Peg::Destination => 1,
            Peg::Auxiliary => 2,
        }
    }

    /// Returns the one-based label used in human-readable messages.
    pub fn label(self) -> usize {
        self.index() + 1
    }

    /// Returns the peg at the given index, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Peg::iter().find(|peg| peg.index() == index)
    }
}

impl TryFrom<usize> for Peg {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Peg::from_index(index).ok_or(index)
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "peg {}", self.label())
    }
}

/// The three pegs and the disks stacked on them, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Towers {
    pegs: [Vec<Disk>; 3],
}

impl Towers {
    /// Creates towers with `disk_count` disks stacked on the source peg,
    /// largest at the bottom.
    pub fn new(disk_count: u8) -> Self {
        let source = (1..=disk_count).rev().map(Disk::new).collect();
        Self {
            pegs: [source, Vec::new(), Vec::new()],
        }
    }

    /// Returns the disks on a peg, bottom to top.
    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    /// Returns the disk on top of a peg, if the peg is not empty.
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.pegs[peg.index()].last().copied()
    }

    /// Returns true if the peg holds no disks.
    pub fn is_empty(&self, peg: Peg) -> bool {
        self.pegs[peg.index()].is_empty()
    }

    /// Total number of disks across all pegs.
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Returns all three pegs in index order.
    pub fn pegs(&self) -> &[Vec<Disk>; 3] {
        &self.pegs
    }

    /// Moves the top disk of `from` onto `to` (unchecked - use the rules
    /// module to validate first).
    pub(super) fn shift(&mut self, from: Peg, to: Peg) -> Option<Disk> {
        let disk = self.pegs[from.index()].pop()?;
        self.pegs[to.index()].push(disk);
        Some(disk)
    }

    #[cfg(test)]
    pub(super) fn from_pegs(pegs: [Vec<Disk>; 3]) -> Self {
        Self { pegs }
    }

    #[cfg(test)]
    pub(super) fn peg_mut(&mut self, peg: Peg) -> &mut Vec<Disk> {
        &mut self.pegs[peg.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_towers_stack_descending_on_source() {
        let towers = Towers::new(4);
        let sizes: Vec<u8> = towers.peg(Peg::Source).iter().map(|d| d.size()).collect();
        assert_eq!(sizes, vec![4, 3, 2, 1]);
        assert!(towers.is_empty(Peg::Destination));
        assert!(towers.is_empty(Peg::Auxiliary));
        assert_eq!(towers.top(Peg::Source), Some(Disk::new(1)));
    }

    #[test]
    fn test_peg_index_round_trip() {
        for peg in Peg::iter() {
            assert_eq!(Peg::try_from(peg.index()), Ok(peg));
        }
        assert_eq!(Peg::try_from(3), Err(3));
    }

    #[test]
    fn test_shift_moves_top_disk() {
        let mut towers = Towers::new(2);
        assert_eq!(towers.shift(Peg::Source, Peg::Auxiliary), Some(Disk::new(1)));
        assert_eq!(towers.top(Peg::Auxiliary), Some(Disk::new(1)));
        assert_eq!(towers.disk_count(), 2);
        assert_eq!(towers.shift(Peg::Destination, Peg::Source), None);
    }
}
