//! Pieces module - tetromino shape catalog and matrix rotation
//!
//! Every shape is a small binary occupancy matrix in its canonical
//! orientation. Rotated orientations are derived from the template by
//! successive 90° clockwise rotations; nothing else is stored.

use crate::types::{Rotation, ShapeKind};

/// Largest bounding box side of any template (the I piece is 1x4).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Binary occupancy matrix of a shape in one orientation.
///
/// Storage is a fixed 4x4 array; only the leading `rows x cols` block is
/// meaningful and everything outside it stays `false`, so derived equality
/// compares orientations exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from rows of 0/1 values.
    ///
    /// Rows must be non-empty, rectangular and at most 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        assert!(
            height > 0 && height <= MAX_SHAPE_SIZE && width > 0 && width <= MAX_SHAPE_SIZE,
            "shape matrix must be between 1x1 and 4x4, got {}x{}",
            height,
            width
        );

        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "shape matrix rows must be rectangular");
            for (c, &v) in row.iter().enumerate() {
                bits[r][c] = v != 0;
            }
        }

        Self {
            rows: height as u8,
            cols: width as u8,
            bits,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether cell `(r, c)` is set. Out-of-range coordinates read as unset.
    pub fn get(&self, r: usize, c: usize) -> bool {
        r < self.rows() && c < self.cols() && self.bits[r][c]
    }

    /// Iterate the set cells as `(row, col)` pairs, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows())
            .flat_map(move |r| (0..self.cols()).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.bits[r][c])
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.cells().count()
    }

    /// Rotate 90° clockwise.
    ///
    /// An `R x C` matrix becomes `C x R` with `out[c][R - 1 - r] = in[r][c]`
    /// (reverse the row order, then transpose).
    pub fn rotate_cw(&self) -> Self {
        let r_len = self.rows();
        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, c) in self.cells() {
            bits[c][r_len - 1 - r] = true;
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

const I_TEMPLATE: &[&[u8]] = &[&[1, 1, 1, 1]];
const T_TEMPLATE: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
const L_TEMPLATE: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];
const J_TEMPLATE: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];
const O_TEMPLATE: &[&[u8]] = &[&[1, 1], &[1, 1]];
const S_TEMPLATE: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const Z_TEMPLATE: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];

/// Raw 0/1 rows of a shape's canonical orientation.
pub fn template_rows(kind: ShapeKind) -> &'static [&'static [u8]] {
    match kind {
        ShapeKind::I => I_TEMPLATE,
        ShapeKind::T => T_TEMPLATE,
        ShapeKind::L => L_TEMPLATE,
        ShapeKind::J => J_TEMPLATE,
        ShapeKind::O => O_TEMPLATE,
        ShapeKind::S => S_TEMPLATE,
        ShapeKind::Z => Z_TEMPLATE,
    }
}

/// Canonical (North) matrix of a shape.
pub fn template(kind: ShapeKind) -> ShapeMatrix {
    ShapeMatrix::from_rows(template_rows(kind))
}

/// All four orientations of a shape, indexed by [`Rotation::index`].
///
/// The template is rotated exactly three times; the fourth rotation (back
/// to North) is reached by index wraparound, never computed.
pub fn rotation_states(kind: ShapeKind) -> [ShapeMatrix; 4] {
    let north = template(kind);
    let east = north.rotate_cw();
    let south = east.rotate_cw();
    let west = south.rotate_cw();
    [north, east, south, west]
}

/// Matrix of a shape in a given orientation.
pub fn get_shape(kind: ShapeKind, rotation: Rotation) -> ShapeMatrix {
    rotation_states(kind)[rotation.index()]
}
