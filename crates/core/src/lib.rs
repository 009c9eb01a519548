//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same RNG seed produces identical games
//! - **Testable**: Randomness is injected, so tests script exact piece sequences
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`pieces`]: Shape catalog (seven binary templates) and 90° matrix rotation
//! - [`tetromino`]: Movable piece with four precomputed rotation states and a color
//! - [`grid`]: Runtime-sized playfield with row fullness checks and line clearing
//! - [`game_state`]: Session state machine: move, rotate, gravity, lock, game over
//! - [`rng`]: Injectable [`RandomSource`] plus a deterministic LCG
//! - [`gravity`]: Clock helper deciding when a gravity step is due
//! - [`snapshot`]: Owned frame data for renderers
//!
//! # Game Rules
//!
//! - **Spawn**: New pieces appear with their bounding box at (`columns / 2 - 2`, 0)
//! - **Rotation**: Clockwise only, no wall kicks; a colliding rotation is undone
//! - **Ceiling**: Cells above row 0 never collide, and are dropped when a piece locks there
//! - **Scoring**: Flat 100 points per lock, however many rows it cleared
//! - **Game over**: The piece promoted after a lock collides at its spawn position
//!
//! # Example
//!
//! ```
//! use tui_tetromino_core::GameState;
//! use tui_tetromino_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // Drop until the first piece locks.
//! while game.pieces_locked() == 0 {
//!     game.step();
//! }
//!
//! assert_eq!(game.score(), 100);
//! ```

pub mod game_state;
pub mod gravity;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod tetromino;

pub use tui_tetromino_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use gravity::Gravity;
pub use grid::Grid;
pub use pieces::{get_shape, rotation_states, template, ShapeMatrix};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use tetromino::Tetromino;
