//! TUI Tetromino (workspace facade crate).
//!
//! The engine, input mapping and terminal renderer live in dedicated crates
//! under `crates/`; this package re-exports them as
//! `tui_tetromino::{core,input,term,types}` and owns the run-time pieces the
//! binary needs: configuration and the optional JSON-lines event log.

pub mod config;
pub mod event_log;

pub use tui_tetromino_core as core;
pub use tui_tetromino_input as input;
pub use tui_tetromino_term as term;
pub use tui_tetromino_types as types;
