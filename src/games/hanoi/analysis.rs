//! Scoring a finished game against the minimum.

use super::formula;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Efficiency shown before any move has been made.
pub const NO_MOVES_EFFICIENCY: &str = "100";

/// `minimum / used * 100`, as shown to players: two decimals, or
/// [`NO_MOVES_EFFICIENCY`] when no moves have been made yet.
pub fn format_efficiency(minimum_moves: u64, moves_used: usize) -> String {
    if moves_used == 0 {
        return NO_MOVES_EFFICIENCY.to_string();
    }
    format!("{:.2}", percent(minimum_moves, moves_used))
}

fn percent(minimum_moves: u64, moves_used: usize) -> f64 {
    minimum_moves as f64 / moves_used as f64 * 100.0
}

/// How well a completed game was played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GameAnalysis {
    /// Moves the player made.
    moves_used: usize,
    /// Fewest moves that could have solved the game.
    minimum_moves: u64,
    /// `minimum_moves / moves_used * 100`, rounded to two decimals.
    efficiency: f64,
    /// Whether the player matched the minimum.
    optimal: bool,
    /// `moves_used - minimum_moves`.
    extra_moves: i64,
    /// `T(n) = 2^n - 1 = m` for the game's disk count.
    formula: String,
}

impl GameAnalysis {
    /// Scores a game of `disk_count` disks finished in `moves_used` moves.
    pub fn new(disk_count: u8, moves_used: usize) -> Self {
        let minimum_moves = formula::minimum_moves(u32::from(disk_count));
        let efficiency = if moves_used == 0 {
            100.0
        } else {
            (percent(minimum_moves, moves_used) * 100.0).round() / 100.0
        };
        Self {
            moves_used,
            minimum_moves,
            efficiency,
            optimal: moves_used as u64 == minimum_moves,
            extra_moves: moves_used as i64 - minimum_moves as i64,
            formula: formula::formula(u32::from(disk_count)),
        }
    }
}

impl std::fmt::Display for GameAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} moves (minimum {}), efficiency {:.2}%",
            self.moves_used, self.minimum_moves, self.efficiency
        )?;
        if self.extra_moves > 0 {
            write!(f, ", {} extra", self.extra_moves)?;
        }
        Ok(())
    }
}
