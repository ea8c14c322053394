//! Game state and the read-only snapshot handed to observers.

use super::action::Move;
use super::analysis::format_efficiency;
use super::formula;
use super::types::{Disk, Peg, Towers};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// The pegs and their disks.
    towers: Towers,
    /// Number of disks in play.
    disk_count: u8,
    /// Moves applied so far.
    move_count: usize,
    /// Whether every disk is on the destination peg.
    complete: bool,
    /// `2^disk_count - 1`.
    minimum_moves: u64,
    /// Applied moves, oldest first.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game with every disk on the source peg.
    pub fn new(disk_count: u8) -> Self {
        Self {
            towers: Towers::new(disk_count),
            disk_count,
            move_count: 0,
            complete: false,
            minimum_moves: formula::minimum_moves(u32::from(disk_count)),
            history: Vec::new(),
        }
    }

    /// Returns the towers.
    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    /// Returns the number of disks in play.
    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    /// Returns the number of moves applied.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns whether the puzzle is solved.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns the minimum number of moves for this disk count.
    pub fn minimum_moves(&self) -> u64 {
        self.minimum_moves
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies a move (unchecked - use the rules module to validate first).
    pub(super) fn apply_move(&mut self, from: Peg, to: Peg) -> Option<Disk> {
        let disk = self.towers.shift(from, to)?;
        self.move_count += 1;
        self.history.push(Move::new(
            self.move_count,
            disk,
            from,
            to,
            self.towers.clone(),
        ));
        Some(disk)
    }

    /// Reverts the most recent [`GameState::apply_move`] of `from` to `to`.
    pub(super) fn undo_move(&mut self, from: Peg, to: Peg) {
        self.towers.shift(to, from);
        self.history.pop();
        self.move_count = self.move_count.saturating_sub(1);
    }

    /// Sets the completion flag.
    pub(super) fn set_complete(&mut self, complete: bool) {
        self.complete = complete;
    }

    #[cfg(test)]
    pub(super) fn towers_mut(&mut self) -> &mut Towers {
        &mut self.towers
    }

    #[cfg(test)]
    pub(super) fn set_move_count(&mut self, move_count: usize) {
        self.move_count = move_count;
    }

    /// Takes a snapshot for display.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            towers: self.towers.clone(),
            disk_count: self.disk_count,
            move_count: self.move_count,
            minimum_moves: self.minimum_moves,
            complete: self.complete,
            efficiency: format_efficiency(self.minimum_moves, self.move_count),
            formula: formula::formula(u32::from(self.disk_count)),
        }
    }
}

/// Immutable view of a game, deep-copied from its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    /// The pegs and their disks.
    towers: Towers,
    /// Number of disks in play.
    disk_count: u8,
    /// Moves applied so far.
    move_count: usize,
    /// Fewest moves that solve the game.
    minimum_moves: u64,
    /// Whether the puzzle is solved.
    complete: bool,
    /// Efficiency for display: two decimals, or `"100"` before the first move.
    efficiency: String,
    /// `T(n) = 2^n - 1 = m`.
    formula: String,
}
