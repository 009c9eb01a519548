//! Tetromino module - a movable piece instance
//!
//! A piece carries its bounding-box anchor, all four precomputed rotation
//! states, the active rotation and a palette color chosen at creation.

use arrayvec::ArrayVec;

use crate::pieces::{rotation_states, ShapeMatrix, MAX_SHAPE_SIZE};
use crate::rng::RandomSource;
use crate::types::{PaletteColor, Rotation, ShapeKind};

/// Absolute `(row, col)` grid coordinates of a piece's set cells.
pub type PieceBlocks = ArrayVec<(i32, i32), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    /// Column of the bounding box's top-left corner
    pub x: i32,
    /// Row of the bounding box's top-left corner (may be negative near the ceiling)
    pub y: i32,
    kind: ShapeKind,
    states: [ShapeMatrix; 4],
    rotation: Rotation,
    color: PaletteColor,
}

impl Tetromino {
    /// Create a piece at `(x, y)` with a palette color drawn from `rng`.
    pub fn new<R: RandomSource + ?Sized>(x: i32, y: i32, kind: ShapeKind, rng: &mut R) -> Self {
        let color = PaletteColor::ALL[rng.pick_index(PaletteColor::ALL.len())];
        Self::with_color(x, y, kind, color)
    }

    /// Create a piece with a fixed color.
    pub fn with_color(x: i32, y: i32, kind: ShapeKind, color: PaletteColor) -> Self {
        Self {
            x,
            y,
            kind,
            states: rotation_states(kind),
            rotation: Rotation::North,
            color,
        }
    }

    /// Spawn a random shape with a random color at `(x, y)`.
    ///
    /// The shape is drawn before the color.
    pub fn random<R: RandomSource + ?Sized>(x: i32, y: i32, rng: &mut R) -> Self {
        let kind = ShapeKind::ALL[rng.pick_index(ShapeKind::ALL.len())];
        Self::new(x, y, kind, rng)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn rotation_index(&self) -> usize {
        self.rotation.index()
    }

    /// Matrix of the active rotation.
    pub fn matrix(&self) -> &ShapeMatrix {
        &self.states[self.rotation.index()]
    }

    /// Advance to the next clockwise rotation state.
    ///
    /// No placement check happens here; the caller validates and reverts.
    pub fn rotate_next(&mut self) {
        self.rotation = self.rotation.rotate_cw();
    }

    /// Absolute grid coordinates of the set cells, shifted by `(dx, dy)`.
    pub fn blocks_at(&self, dx: i32, dy: i32) -> PieceBlocks {
        self.matrix()
            .cells()
            .map(|(r, c)| (self.y + r as i32 + dy, self.x + c as i32 + dx))
            .collect()
    }

    /// Absolute grid coordinates of the set cells.
    pub fn blocks(&self) -> PieceBlocks {
        self.blocks_at(0, 0)
    }
}
