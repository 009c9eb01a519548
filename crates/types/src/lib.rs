//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, event logging).
//!
//! # Grid Dimensions
//!
//! The reference playfield is derived from a 400x800 window with 20px blocks:
//!
//! - **Columns**: 20 (indexed 0-19)
//! - **Rows**: 40 (indexed 0-39, row 0 at the top)
//! - **Spawn position**: (`COLUMNS / 2 - 2`, 0) = (8, 0)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 500 | Gravity step interval |
//! | `FRAMES_PER_SECOND` | 10 | Logical frame rate of the driver loop |
//! | `GAME_OVER_DELAY_MS` | 3000 | How long the game-over frame stays up |
//!
//! # Examples
//!
//! ```
//! use tui_tetromino_types::{PaletteColor, ShapeKind, COLUMNS, ROWS};
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(PaletteColor::Cyan.rgb(), (0, 255, 255));
//!
//! assert_eq!(COLUMNS, 20);
//! assert_eq!(ROWS, 40);
//! ```

/// Grid height in cells (40 rows)
pub const ROWS: usize = 40;

/// Grid width in cells (20 columns)
pub const COLUMNS: usize = 20;

/// Spawn column of a new piece's bounding box
pub const SPAWN_X: i32 = (COLUMNS / 2) as i32 - 2;

/// Spawn row of a new piece's bounding box
pub const SPAWN_Y: i32 = 0;

/// Flat score bonus awarded on every lock, independent of lines cleared
pub const LOCK_SCORE: u32 = 100;

/// Default gravity interval in milliseconds
pub const FALL_INTERVAL_MS: u32 = 500;

/// Logical frames per second of the driver loop
pub const FRAMES_PER_SECOND: u32 = 10;

/// How long the game-over frame is shown before the process exits
pub const GAME_OVER_DELAY_MS: u32 = 3000;


/// Colors a locked or falling cell can take
///
/// The palette is fixed; a piece picks one uniformly at random when created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Cyan,
    Blue,
    Magenta,
    Yellow,
    Green,
    Red,
}

impl PaletteColor {
    /// Every palette color, in draw order
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Cyan,
        PaletteColor::Blue,
        PaletteColor::Magenta,
        PaletteColor::Yellow,
        PaletteColor::Green,
        PaletteColor::Red,
    ];

    /// 24-bit RGB value of the color
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PaletteColor::Cyan => (0, 255, 255),
            PaletteColor::Blue => (0, 0, 255),
            PaletteColor::Magenta => (255, 0, 255),
            PaletteColor::Yellow => (255, 255, 0),
            PaletteColor::Green => (0, 255, 0),
            PaletteColor::Red => (255, 0, 0),
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PaletteColor)`: Cell filled with a locked block of that color
///
/// The color doubles as the occupancy flag; there is no separate "filled" bit.
pub type Cell = Option<PaletteColor>;

/// The seven tetromino shapes
///
/// Each shape is defined by a canonical binary matrix in the core shape catalog.
/// Colors are not tied to shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    L,
    J,
    O,
    S,
    Z,
}

impl ShapeKind {
    /// Every shape, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
    ];
}

/// Rotation states of a piece
///
/// - **North**: Canonical template orientation (0°)
/// - **East**: Rotated 90° clockwise
/// - **South**: Rotated 180°
/// - **West**: Rotated 270° clockwise
///
/// The rotation cycle goes: North → East → South → West → North.
/// Only clockwise steps exist; a rejected rotation is undone by stepping
/// forward three more times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tetromino_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Index of the rotation state in `[0, 4)`
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Quitting is not a game action; the input layer handles it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Force one gravity step
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
}

/// Session state machine
///
/// `Running → GameOver` is one-way and only happens when a freshly spawned
/// piece collides at its spawn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

/// Event emitted after a piece locks.
///
/// Consumed by observers such as the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_awarded: u32,
    /// Score after the lock
    pub score: u32,
    /// Whether the replacement piece collided at spawn
    pub game_over: bool,
}
