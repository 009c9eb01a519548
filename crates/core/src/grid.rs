//! Grid module - manages the playfield
//!
//! The grid is a `rows x columns` matrix where each cell is either empty or
//! holds a palette color. Uses a flat row-major vector so line clears are
//! plain slice moves.
//! Coordinates are `(row, col)`: row 0 is the top, col 0 the left edge.
//!
//! The grid only answers for in-range coordinates. Callers bounds-check
//! first; an out-of-range access is a programming error and trips a debug
//! assertion.

use crate::types::{Cell, PaletteColor, COLUMNS, ROWS};

/// The playfield - ROWS x COLUMNS by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Flat array of cells, row-major order (row * columns + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid with the reference dimensions
    pub fn new() -> Self {
        Self::with_size(ROWS, COLUMNS)
    }

    /// Create an empty grid with custom dimensions
    ///
    /// Both dimensions must be positive, and the grid must be wide enough to
    /// hold a piece's spawn bounding box (at least 4 columns).
    pub fn with_size(rows: usize, columns: usize) -> Self {
        assert!(rows > 0, "grid needs at least one row");
        assert!(columns >= 4, "grid needs at least four columns, got {}", columns);
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Spawn anchor `(x, y)` for new pieces: top row, centred.
    pub fn spawn_position(&self) -> (i32, i32) {
        ((self.columns / 2) as i32 - 2, 0)
    }

    /// Check whether `(row, col)` lies inside the grid
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.columns
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.rows && col < self.columns,
            "grid access out of range: ({}, {}) on {}x{}",
            row,
            col,
            self.rows,
            self.columns
        );
        row * self.columns + col
    }

    /// Get the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Check if `(row, col)` holds a locked block
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Write a color into `(row, col)`
    ///
    /// Out-of-range writes are rejected (and assert in debug builds).
    pub fn set(&mut self, row: usize, col: usize, color: PaletteColor) {
        let in_range = row < self.rows && col < self.columns;
        debug_assert!(in_range, "grid write out of range: ({}, {})", row, col);
        if !in_range {
            return;
        }
        let idx = self.index(row, col);
        self.cells[idx] = Some(color);
    }

    /// Fill an entire row with one color
    pub fn fill_row(&mut self, row: usize, color: PaletteColor) {
        for col in 0..self.columns {
            self.set(row, col, color);
        }
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.columns]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Remove a row and insert an empty row at the top
    ///
    /// Every row above the removed one shifts down by one; rows below are untouched.
    pub fn clear_row(&mut self, row: usize) {
        let width = self.columns;
        let end = self.index(row, 0);

        // Shift rows [0, row) down by one. copy_within handles the overlap.
        self.cells.copy_within(0..end, width);
        self.cells[..width].fill(None);
    }

    /// Clear every full row and return how many were removed
    ///
    /// Rows are scanned top to bottom. Removing a row only moves the rows
    /// above it, so the rows still to be scanned keep their indices.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for row in 0..self.rows {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
