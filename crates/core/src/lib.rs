//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It does no I/O and never reads a clock: time only advances when the host
//! passes elapsed milliseconds to [`GameState::advance_gravity_tick`].
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision checks and line clearing
//! - [`shapes`]: base 4x4 matrices for the seven kinds and matrix rotation
//! - [`piece`]: the falling unit (kind, orientation, position)
//! - [`rng`]: piece sources (seeded uniform, scripted, closures)
//! - [`scoring`]: line / drop points, level and gravity formulas
//! - [`config`]: tunable timing and scoring parameters
//! - [`game_state`]: the session controller
//! - [`snapshot`]: read-only copies of the session for hosts
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind is equally likely on every draw, with one piece of preview
//! - **Simple rotation**: clockwise only, six fixed wall kick offsets tried in order
//! - **Immediate lock**: a piece locks the moment gravity or a hard drop finds it grounded
//! - **Scoring**: 100 / 300 / 500 for 1-3 lines, `800 * (n - 3)` for four or more,
//!   plus 1 point per soft-dropped row and 2 per hard-dropped row
//! - **Levels**: one level per 10 lines, gravity speeds up by 60ms per level down to 100ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Hard drop awards points
//! assert!(game.score() > 0);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use game_state::{GameState, WALL_KICKS};
pub use piece::{Piece, PieceCells};
pub use rng::{KindSource, ScriptedSource, UniformSource};
pub use scoring::{
    calculate_drop_score, calculate_level, calculate_line_score, get_fall_interval_ms,
};
pub use shapes::{base_matrix, rotate_cw};
pub use snapshot::{ActiveSnapshot, GameSnapshot, QueuedSnapshot};
