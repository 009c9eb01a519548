//! Game state module - the session state machine
//!
//! This module ties together the grid, the current and next pieces, the
//! injected RNG and the score. It handles movement, rotation, gravity steps,
//! locking, line clears and the game-over transition.
//!
//! The session is either `Running` or `GameOver`. The only way into
//! `GameOver` is a lock whose replacement piece already collides at the
//! spawn position; once there, every operation is a no-op.

use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::tetromino::Tetromino;
use crate::types::{GameAction, GameStatus, LockEvent, LOCK_SCORE};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    grid: Grid,
    current: Tetromino,
    next: Tetromino,
    rng: R,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    status: GameStatus,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new game on the reference grid with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game on the reference grid with an injected RNG
    pub fn with_rng(rng: R) -> Self {
        Self::with_grid(Grid::new(), rng)
    }

    /// Create a new game on a custom grid; current and next pieces are spawned
    /// from `rng` in that order.
    pub fn with_grid(grid: Grid, mut rng: R) -> Self {
        let (x, y) = grid.spawn_position();
        let current = Tetromino::random(x, y, &mut rng);
        let next = Tetromino::random(x, y, &mut rng);
        Self::from_parts(grid, current, next, rng)
    }

    /// Assemble a running game from explicit parts.
    ///
    /// No placement check is made for `current`.
    pub fn from_parts(grid: Grid, current: Tetromino, next: Tetromino, rng: R) -> Self {
        Self {
            grid,
            current,
            next,
            rng,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            status: GameStatus::Running,
            last_event: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this session (display only; scoring ignores it)
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Check whether `piece`, shifted by `(dx, dy)`, would collide.
    ///
    /// A cell collides when its column is outside the grid, its row is at or
    /// below the bottom, or it lands on a locked block. Rows above the top
    /// (negative) never collide on their own.
    pub fn collides(&self, piece: &Tetromino, dx: i32, dy: i32) -> bool {
        collides_on(&self.grid, piece, dx, dy)
    }

    /// Shift the current piece horizontally. Rejected moves change nothing.
    pub fn move_piece(&mut self, dx: i32) -> bool {
        if self.is_game_over() || self.collides(&self.current, dx, 0) {
            return false;
        }
        self.current.x += dx;
        true
    }

    /// Gravity step: drop the current piece one row, or lock it if it rests.
    ///
    /// Returns `false` only when the game is already over.
    pub fn step(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        if self.collides(&self.current, 0, 1) {
            self.lock_piece();
        } else {
            self.current.y += 1;
        }
        true
    }

    /// Rotate the current piece clockwise without wall kicks.
    ///
    /// If the new orientation collides the piece is stepped forward three more
    /// times, landing back on the original orientation.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        self.current.rotate_next();
        if self.collides(&self.current, 0, 0) {
            for _ in 0..3 {
                self.current.rotate_next();
            }
            return false;
        }
        true
    }

    /// Lock the current piece into the grid, clear full rows and spawn.
    ///
    /// Cells above the top row are dropped. Every lock awards the flat
    /// `LOCK_SCORE`, whether it cleared zero rows or four.
    pub fn lock_piece(&mut self) {
        if self.is_game_over() {
            return;
        }

        let color = self.current.color();
        for (row, col) in self.current.blocks() {
            if self.grid.contains(row, col) {
                self.grid.set(row as usize, col as usize, color);
            }
        }

        let lines_cleared = self.grid.clear_full_rows() as u32;
        self.lines = self.lines.saturating_add(lines_cleared);
        self.score = self.score.saturating_add(LOCK_SCORE);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let (x, y) = self.grid.spawn_position();
        let spawned = Tetromino::random(x, y, &mut self.rng);
        self.current = std::mem::replace(&mut self.next, spawned);

        if self.collides(&self.current, 0, 0) {
            self.status = GameStatus::GameOver;
        }

        self.last_event = Some(LockEvent {
            lines_cleared,
            score_awarded: LOCK_SCORE,
            score: self.score,
            game_over: self.is_game_over(),
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => self.step(),
            GameAction::Rotate => self.rotate(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.columns = self.grid.columns();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.current = Some(PieceSnapshot::from(&self.current));
        out.next = Some(PieceSnapshot::from(&self.next));
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

fn collides_on(grid: &Grid, piece: &Tetromino, dx: i32, dy: i32) -> bool {
    let rows = grid.rows() as i32;
    let columns = grid.columns() as i32;
    piece.blocks_at(dx, dy).iter().any(|&(row, col)| {
        if col < 0 || col >= columns || row >= rows {
            return true;
        }
        row >= 0 && grid.is_occupied(row as usize, col as usize)
    })
}
