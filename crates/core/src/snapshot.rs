//! Snapshot module - owned, render-ready copy of a game session.

use crate::pieces::ShapeMatrix;
use crate::tetromino::Tetromino;
use crate::types::{Cell, PaletteColor, Rotation, ShapeKind, COLUMNS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
    pub matrix: ShapeMatrix,
    pub color: PaletteColor,
}

impl From<&Tetromino> for PieceSnapshot {
    fn from(value: &Tetromino) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x,
            y: value.y,
            matrix: *value.matrix(),
            color: value.color(),
        }
    }
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: usize,
    pub columns: usize,
    /// Row-major grid cells (`row * columns + col`)
    pub cells: Vec<Cell>,
    pub current: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells
            .get(row * self.columns + col)
            .copied()
            .flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
            cells: vec![None; ROWS * COLUMNS],
            current: None,
            next: None,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}
