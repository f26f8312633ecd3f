//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on the terminal or the file system, which makes it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Runs under any front end, or headless
//!
//! # Module Structure
//!
//! - [`board`]: 10x40 settled board, render composite and line clearing
//! - [`game_state`]: The single owner of a running game
//! - [`pieces`]: Spawn patterns, spawn positions and SRS kick tables
//! - [`tetrimino`]: The active piece as a value, with collision, rotation and ghost helpers
//! - [`rng`]: 7-bag random piece generation
//! - [`scoring`]: Line-clear points, levels and gravity
//! - [`snapshot`]: Serializable save-game blob
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every run of seven pieces holds each kind once
//! - **SRS Rotation**: five kick candidates per transition, none for O
//! - **Ghost Piece**: shows where the current piece will land
//! - **Hold**: store one piece for later use (once per piece)
//! - **Scoring**: 100 / 300 / 500 / 800 for 1-4 rows
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! assert!(game.apply_action(GameAction::HardDrop));
//!
//! // Nothing cleared yet
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep. Call
//! [`GameState::tick`](game_state::GameState::tick) every 16ms and
//! [`GameState::add_second`](game_state::GameState::add_second) once per
//! second of play.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetrimino;

pub use blockfall_grid as grid;
pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{clear_full_rows, compose, empty_board};
pub use game_state::{Frame, GameState, Stats, Status};
pub use pieces::{kicks, pattern, spawn_position};
pub use rng::{BagState, SevenBag, SimpleRng};
pub use scoring::{gravity_for_level, level_for_lines, line_score};
pub use snapshot::{RestoreError, Snapshot};
pub use tetrimino::{Blocked, Tetrimino};
