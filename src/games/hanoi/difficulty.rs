//! Difficulty labels derived from the minimum move count.

use serde::{Deserialize, Serialize};

/// How hard a game is, judged by the number of moves it takes to solve.
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
    strum::Display,
    strum::EnumIter,
)]
pub enum Difficulty {
    /// Up to 31 moves (1-5 disks).
    Easy,
    /// More than 31 moves.
    Intermediate,
    /// More than 127 moves.
    Difficult,
    /// More than 511 moves.
    Expert,
    /// More than 2047 moves.
    Master,
}

impl Difficulty {
    /// Classifies a game by its minimum move count.
    pub fn from_minimum_moves(minimum_moves: u64) -> Self {
        const THRESHOLDS: [(u64, Difficulty); 4] = [
            (31, Difficulty::Intermediate),
            (127, Difficulty::Difficult),
            (511, Difficulty::Expert),
            (2047, Difficulty::Master),
        ];

        THRESHOLDS
            .iter()
            .filter(|(threshold, _)| minimum_moves > *threshold)
            .map(|(_, difficulty)| *difficulty)
            .last()
            .unwrap_or(Difficulty::Easy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::formula::minimum_moves;

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(Difficulty::from_minimum_moves(31), Difficulty::Easy);
        assert_eq!(Difficulty::from_minimum_moves(32), Difficulty::Intermediate);
        assert_eq!(Difficulty::from_minimum_moves(127), Difficulty::Intermediate);
        assert_eq!(Difficulty::from_minimum_moves(128), Difficulty::Difficult);
        assert_eq!(Difficulty::from_minimum_moves(2048), Difficulty::Master);
    }

    #[test]
    fn test_by_disk_count() {
        let labels: Vec<Difficulty> = (1..=12)
            .map(|n| Difficulty::from_minimum_moves(minimum_moves(n)))
            .collect();
        use Difficulty::*;
        assert_eq!(
            labels,
            vec![
                Easy,
                Easy,
                Easy,
                Easy,
                Easy,
                Intermediate,
                Intermediate,
                Difficult,
                Difficult,
                Expert,
                Expert,
                Master
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Difficulty::Master.to_string(), "Master");
    }
}
