//! The Tower of Hanoi game engine.
//!
//! [`HanoiGame`] owns one [`GameState`] and is the only thing that mutates it.
//! Every move goes through [`MoveContract`]: the precondition always, the
//! postcondition when the engine is configured to check invariants. After
//! each change, registered observers receive a fresh snapshot.

use super::action::{MoveError, MoveRejected, MoveRequest};
use super::analysis::GameAnalysis;
use super::contracts::{Contract, MoveContract};
use super::difficulty::Difficulty;
use super::error::{DiskCountError, HanoiError, check_disk_count};
use super::formula;
use super::observer::StateObserver;
use super::rules;
use super::solver::{PegRoles, SolutionStep, solve_unchecked};
use super::state::{GameSnapshot, GameState};
use super::types::Disk;
use crate::config::EngineConfig;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Message returned by [`HanoiGame::reset`].
pub const RESET_MESSAGE: &str = "Game reset";

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct MoveOutcome {
    /// The disk that moved.
    disk: Disk,
    /// e.g. `Disk 1 moved from peg 1 to peg 2`.
    message: String,
    /// Move count after this move.
    move_count: usize,
    /// Whether the puzzle is solved after this move.
    complete: bool,
    /// Present only on the move that solved the puzzle.
    analysis: Option<GameAnalysis>,
}

/// Result of changing the disk count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Reconfigured {
    /// The new disk count.
    disk_count: u8,
    /// Fewest moves that solve the new game.
    minimum_moves: u64,
    /// Difficulty label for the new game.
    difficulty: Difficulty,
    /// `T(n) = 2^n - 1 = m`.
    formula: String,
    /// e.g. `Game reset with 5 disks - Difficulty: Easy`.
    message: String,
}

/// Which solution to compute. Unset fields fall back to the current game's
/// disk count and the default peg roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveRequest {
    disk_count: Option<u8>,
    roles: Option<PegRoles>,
}

impl SolveRequest {
    /// Creates a request that uses every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Solves for this many disks instead of the game's.
    pub fn disk_count(mut self, disk_count: u8) -> Self {
        self.disk_count = Some(disk_count);
        self
    }

    /// Solves between these pegs instead of source to destination.
    pub fn roles(mut self, roles: PegRoles) -> Self {
        self.roles = Some(roles);
        self
    }
}

/// Tower of Hanoi game engine.
pub struct HanoiGame {
    state: GameState,
    check_invariants: bool,
    observers: Vec<Box<dyn StateObserver>>,
}

impl HanoiGame {
    /// Creates a new game with `disk_count` disks on the source peg.
    ///
    /// # Errors
    ///
    /// Returns [`DiskCountError`] unless `disk_count` is in 1..=12.
    #[instrument]
    pub fn new(disk_count: u8) -> Result<Self, DiskCountError> {
        let disk_count = check_disk_count(disk_count)?;
        Ok(Self::build(disk_count, cfg!(debug_assertions)))
    }

    /// Creates a new game from configuration.
    #[instrument(skip(config), fields(disk_count = config.disk_count()))]
    pub fn from_config(config: &EngineConfig) -> Result<Self, HanoiError> {
        let disk_count = check_disk_count(*config.disk_count())?;
        Ok(Self::build(disk_count, *config.check_invariants()))
    }

    /// Creates a new game from a TOML configuration file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, HanoiError> {
        let config = EngineConfig::from_file(path)?;
        Self::from_config(&config)
    }

    fn build(disk_count: u8, check_invariants: bool) -> Self {
        info!(disk_count, check_invariants, "Creating new game");
        Self {
            state: GameState::new(disk_count),
            check_invariants,
            observers: Vec::new(),
        }
    }

    /// Registers an observer. It is called after every change to the game.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns a deep copy of the current state for display.
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Changes the disk count and starts over.
    ///
    /// # Errors
    ///
    /// Returns [`DiskCountError`] unless `disk_count` is in 1..=12; the game
    /// is left exactly as it was.
    #[instrument(skip(self))]
    pub fn set_disk_count(&mut self, disk_count: u8) -> Result<Reconfigured, DiskCountError> {
        let disk_count = check_disk_count(disk_count).inspect_err(|e| {
            warn!(error = %e, "Rejected disk count");
        })?;

        self.state = GameState::new(disk_count);
        let minimum_moves = self.state.minimum_moves();
        let difficulty = Difficulty::from_minimum_moves(minimum_moves);
        info!(disk_count, minimum_moves, %difficulty, "Game reconfigured");
        self.notify();

        Ok(Reconfigured {
            disk_count,
            minimum_moves,
            difficulty,
            formula: formula::formula(u32::from(disk_count)),
            message: format!("Game reset with {disk_count} disks - Difficulty: {difficulty}"),
        })
    }

    /// Starts over with the current disk count.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &'static str {
        self.state = GameState::new(self.state.disk_count());
        debug!(disk_count = self.state.disk_count(), "Game reset");
        self.notify();
        RESET_MESSAGE
    }

    /// Checks a move without applying it.
    pub fn validate(&self, from: usize, to: usize) -> Result<Disk, MoveError> {
        MoveContract::pre(&self.state, &MoveRequest::new(from, to))
    }

    /// Every move that would currently be accepted.
    pub fn legal_moves(&self) -> Vec<MoveRequest> {
        rules::legal_moves(self.state.towers())
    }

    /// Moves the top disk of peg `from` onto peg `to`.
    ///
    /// Moves remain allowed after the puzzle is solved.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected`] with the reason and the unchanged move count
    /// if the move breaks a rule. The game is not modified.
    #[instrument(skip(self), fields(move_count = self.state.move_count()))]
    pub fn apply_move(&mut self, from: usize, to: usize) -> Result<MoveOutcome, MoveRejected> {
        let request = MoveRequest::new(from, to);
        MoveContract::pre(&self.state, &request).map_err(|e| self.reject(e))?;
        let (from, to) = rules::resolve_pegs(request).map_err(|e| self.reject(e))?;

        let before = MoveContract::baseline(&self.state);
        let was_complete = self.state.is_complete();

        let Some(disk) = self.state.apply_move(from, to) else {
            return Err(self.reject(MoveError::SourceEmpty(from)));
        };
        let complete = rules::is_complete(self.state.towers(), self.state.disk_count());
        self.state.set_complete(complete);

        if self.check_invariants {
            if let Err(e) = MoveContract::post(&before, &self.state) {
                self.state.undo_move(from, to);
                self.state.set_complete(was_complete);
                return Err(self.reject(e));
            }
        }

        let move_count = self.state.move_count();
        debug!(%disk, %from, %to, move_count, "Move applied");

        let analysis = (complete && !was_complete)
            .then(|| GameAnalysis::new(self.state.disk_count(), move_count));
        if let Some(analysis) = &analysis {
            info!(%analysis, optimal = analysis.optimal(), "Puzzle solved");
        }

        self.notify();

        Ok(MoveOutcome {
            disk,
            message: format!("Disk {disk} moved from {from} to {to}"),
            move_count,
            complete,
            analysis,
        })
    }

    /// Scores the game, if it is solved.
    pub fn analysis(&self) -> Option<GameAnalysis> {
        self.state
            .is_complete()
            .then(|| GameAnalysis::new(self.state.disk_count(), self.state.move_count()))
    }

    /// The optimal solution for the current game, from a fresh start.
    pub fn solution(&self) -> Vec<SolutionStep> {
        solve_unchecked(self.state.disk_count(), PegRoles::default())
    }

    /// The optimal solution for another disk count or other peg roles.
    ///
    /// # Errors
    ///
    /// Returns [`DiskCountError`] if the requested disk count is out of range.
    pub fn solution_for(&self, request: SolveRequest) -> Result<Vec<SolutionStep>, DiskCountError> {
        let disk_count =
            check_disk_count(request.disk_count.unwrap_or(self.state.disk_count()))?;
        Ok(solve_unchecked(disk_count, request.roles.unwrap_or_default()))
    }

    fn reject(&self, reason: MoveError) -> MoveRejected {
        warn!(%reason, kind = %reason.kind(), "Move rejected");
        MoveRejected::new(reason, self.state.move_count())
    }

    fn notify(&mut self) {
        let snapshot = self.state.snapshot();
        for observer in &mut self.observers {
            observer.state_changed(&snapshot);
        }
    }
}

impl Default for HanoiGame {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self::build(*config.disk_count(), *config.check_invariants())
    }
}

impl std::fmt::Debug for HanoiGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HanoiGame")
            .field("state", &self.state)
            .field("check_invariants", &self.check_invariants)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::{ErrorKind, Peg};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn play(game: &mut HanoiGame, moves: &[(usize, usize)]) {
        for &(from, to) in moves {
            game.apply_move(from, to).expect("move should be legal");
        }
    }

    #[test]
    fn test_first_move_then_blocked() {
        let mut game = HanoiGame::new(3).unwrap();
        let outcome = game.apply_move(0, 1).unwrap();
        assert_eq!(*outcome.disk(), Disk::new(1));
        assert_eq!(outcome.message(), "Disk 1 moved from peg 1 to peg 2");
        assert_eq!(*outcome.move_count(), 1);
        assert!(!*outcome.complete());

        let rejected = game.apply_move(0, 1).unwrap_err();
        assert_eq!(rejected.kind(), ErrorKind::RuleViolation);
        assert_eq!(*rejected.move_count(), 1);
        assert_eq!(rejected.to_string(), "cannot place disk 2 on disk 1");
        assert_eq!(game.state().move_count(), 1);
        assert_eq!(game.state().history().len(), 1);
    }

    #[test]
    fn test_rejections_by_kind() {
        let mut game = HanoiGame::new(3).unwrap();
        assert_eq!(game.apply_move(0, 3).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(game.apply_move(2, 0).unwrap_err().kind(), ErrorKind::RuleViolation);
        assert_eq!(game.apply_move(0, 0).unwrap_err().kind(), ErrorKind::NoOp);
        assert_eq!(game.state(), &GameState::new(3));
    }

    #[test]
    fn test_solved_move_carries_analysis() {
        let mut game = HanoiGame::new(2).unwrap();
        play(&mut game, &[(0, 2), (0, 1)]);
        let outcome = game.apply_move(2, 1).unwrap();
        assert!(*outcome.complete());
        let analysis = outcome.analysis().as_ref().unwrap();
        assert!(*analysis.optimal());
        assert_eq!(game.analysis().as_ref(), Some(analysis));
    }

    #[test]
    fn test_moves_allowed_after_completion() {
        let mut game = HanoiGame::new(1).unwrap();
        assert!(*game.apply_move(0, 1).unwrap().complete());

        let outcome = game.apply_move(1, 2).unwrap();
        assert!(!*outcome.complete());
        assert!(outcome.analysis().is_none());
        assert!(game.analysis().is_none());

        let outcome = game.apply_move(2, 1).unwrap();
        assert!(*outcome.complete());
        assert_eq!(*outcome.analysis().as_ref().unwrap().extra_moves(), 2);
    }

    #[test]
    fn test_set_disk_count() {
        let mut game = HanoiGame::new(3).unwrap();
        play(&mut game, &[(0, 1)]);

        let reconfigured = game.set_disk_count(8).unwrap();
        assert_eq!(*reconfigured.minimum_moves(), 255);
        assert_eq!(*reconfigured.difficulty(), Difficulty::Difficult);
        assert_eq!(reconfigured.message(), "Game reset with 8 disks - Difficulty: Difficult");
        assert_eq!(reconfigured.formula(), "T(8) = 2^8 - 1 = 255");
        assert_eq!(game.state(), &GameState::new(8));
    }

    #[test]
    fn test_set_disk_count_out_of_range_keeps_state() {
        let mut game = HanoiGame::new(4).unwrap();
        play(&mut game, &[(0, 2)]);
        let before = game.state().clone();

        assert_eq!(game.set_disk_count(13), Err(DiskCountError { requested: 13 }));
        assert_eq!(game.set_disk_count(0), Err(DiskCountError { requested: 0 }));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_reset() {
        let mut game = HanoiGame::new(5).unwrap();
        play(&mut game, &[(0, 1), (0, 2), (1, 2)]);
        assert_eq!(game.reset(), RESET_MESSAGE);
        assert_eq!(game.state(), &GameState::new(5));
    }

    #[test]
    fn test_observers_see_each_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut game = HanoiGame::new(3).unwrap();
        let sink = Rc::clone(&seen);
        game.subscribe(move |snapshot: &GameSnapshot| {
            sink.borrow_mut().push(*snapshot.move_count());
        });

        game.apply_move(0, 2).unwrap();
        let _ = game.apply_move(0, 2);
        game.apply_move(0, 1).unwrap();
        game.reset();
        let _ = game.set_disk_count(99);
        game.set_disk_count(4).unwrap();

        // The rejected move and disk count produce no notification.
        assert_eq!(*seen.borrow(), vec![1, 2, 0, 0]);
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let game = HanoiGame::new(3).unwrap();
        assert_eq!(game.validate(0, 1), Ok(Disk::new(1)));
        assert_eq!(game.state().move_count(), 0);
    }

    #[test]
    fn test_solution_for_other_roles() {
        let game = HanoiGame::new(3).unwrap();
        let roles = PegRoles::new(Peg::Source, Peg::Auxiliary, Peg::Destination).unwrap();
        let steps = game
            .solution_for(SolveRequest::new().disk_count(2).roles(roles))
            .unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(*steps[1].to(), Peg::Auxiliary);
        assert_eq!(game.solution().len(), 7);
        assert!(game.solution_for(SolveRequest::new().disk_count(0)).is_err());
    }

    #[test]
    fn test_failed_postcondition_rolls_back() {
        let config = EngineConfig::new(3).with_check_invariants(true);
        let mut game = HanoiGame::from_config(&config).unwrap();
        play(&mut game, &[(0, 2)]);
        // A stray disk breaks conservation without affecting the next move.
        game.state.towers_mut().peg_mut(Peg::Destination).push(Disk::new(9));
        let before = game.state().clone();

        let rejected = game.apply_move(0, 1).unwrap_err();
        assert_eq!(rejected.kind(), ErrorKind::Internal);
        assert_eq!(*rejected.move_count(), 1);
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_unchecked_engine_skips_postcondition() {
        let config = EngineConfig::new(3).with_check_invariants(false);
        let mut game = HanoiGame::from_config(&config).unwrap();
        game.state.towers_mut().peg_mut(Peg::Destination).push(Disk::new(9));
        assert!(game.apply_move(0, 2).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(HanoiGame::new(0).unwrap_err(), DiskCountError { requested: 0 });
        assert!(HanoiGame::new(12).is_ok());
    }
}
