//! Strictly Hanoi library - a type-safe Tower of Hanoi engine
//!
//! The engine owns the peg state, validates and applies moves, records
//! history, detects completion, and computes the minimum move count and the
//! optimal solution. Rendering is left to callers, which observe the game
//! through snapshots.
//!
//! # Architecture
//!
//! - **Rules**: pure move validation and completion checks
//! - **Contracts**: move preconditions and invariant-backed postconditions
//! - **Engine**: [`HanoiGame`], the only owner of mutable game state
//! - **Solver**: the canonical `2^n - 1` move sequence
//! - **Config**: [`EngineConfig`], loadable from TOML
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::HanoiGame;
//!
//! let mut game = HanoiGame::new(3)?;
//! for step in game.solution() {
//!     game.apply_move(step.from().index(), step.to().index())?;
//! }
//! assert!(game.state().is_complete());
//! assert_eq!(game.state().move_count(), 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Game types (Tower of Hanoi)
pub use games::hanoi::*;
