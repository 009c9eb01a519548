//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and tracks held
//! keys so a key that stays down keeps firing once per frame. Repeat is
//! handled here, never in the engine.

pub mod handler;
pub mod map;

pub use tui_tetromino_types as types;

pub use handler::{HeldKey, InputHandler};
pub use map::{handle_key_event, should_quit};
