//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to the terminal
//! as a diff against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the snapshot → framebuffer step pure, so it can be unit-tested
//! - Compensate for terminal glyph aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tetromino_core as core;
pub use tui_tetromino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
