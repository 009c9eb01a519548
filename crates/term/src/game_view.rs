//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PaletteColor;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const BLOCK: char = '█';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Lays out the well, the side panel and overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Well cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Top-left corner of the bordered well in framebuffer coordinates.
#[derive(Debug, Clone, Copy)]
struct WellOrigin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered well in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = (snap.columns as u16).saturating_mul(self.cell_w) + 2;
        let h = (snap.rows as u16) + 2;
        (w, h)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only
    /// reallocated when the viewport grows. A viewport smaller than the
    /// bordered well gets a notice with the required size instead.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        if viewport.width < frame_w || viewport.height < frame_h {
            draw_too_small(fb, viewport, frame_w, frame_h);
            return;
        }
        let origin = WellOrigin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), WELL_BG);
        fb.fill_rect(
            origin.x + 1,
            origin.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            bg,
        );
        draw_border(
            fb,
            origin.x,
            origin.y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        for row in 0..snap.rows {
            for col in 0..snap.columns {
                match snap.cell(row, col) {
                    Some(color) => self.draw_block(fb, origin, row as u16, col as u16, color),
                    None => self.draw_empty(fb, origin, row as u16, col as u16),
                }
            }
        }

        if let Some(piece) = &snap.current {
            for (row, col) in piece_cells(piece) {
                // Cells still above the ceiling are not drawn.
                if row < 0 || col < 0 {
                    continue;
                }
                let (row, col) = (row as usize, col as usize);
                if row < snap.rows && col < snap.columns {
                    self.draw_block(fb, origin, row as u16, col as u16, piece.color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        if snap.game_over {
            draw_overlay_text(fb, origin, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, origin: WellOrigin, row: u16, col: u16) -> (u16, u16) {
        let px = origin.x + 1 + col * self.cell_w;
        let py = origin.y + 1 + row;
        (px, py)
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: WellOrigin, row: u16, col: u16, color: PaletteColor) {
        let (px, py) = self.cell_origin(origin, row, col);
        let style = CellStyle::new(Rgb::from(color), WELL_BG).bold();
        fb.fill_rect(px, py, self.cell_w, 1, BLOCK, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, origin: WellOrigin, row: u16, col: u16) {
        let (px, py) = self.cell_origin(origin, row, col);
        let style = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        fb.fill_rect(px, py, self.cell_w, 1, '·', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        origin: WellOrigin,
        frame_w: u16,
    ) {
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = origin.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        match &snap.next {
            Some(next) => {
                let style = CellStyle::new(Rgb::from(next.color), PANEL_BG).bold();
                for (r, c) in next.matrix.cells() {
                    let px = panel_x.saturating_add(c as u16 * self.cell_w);
                    fb.fill_rect(px, y.saturating_add(r as u16), self.cell_w, 1, BLOCK, style);
                }
                y = y.saturating_add(next.matrix.rows() as u16);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
                y = y.saturating_add(1);
            }
        }

        y = y.saturating_add(1);
        if y < viewport.height && panel_w >= 16 {
            let help = value.dim();
            fb.put_str(panel_x, y, "←→ move  ↑ rotate", help);
            fb.put_str(panel_x, y.saturating_add(1), "↓ drop  q quit", help);
        }
    }
}

/// Absolute (row, col) of every filled cell of a piece.
fn piece_cells(piece: &PieceSnapshot) -> impl Iterator<Item = (i32, i32)> + '_ {
    piece
        .matrix
        .cells()
        .map(move |(r, c)| (piece.y + r as i32, piece.x + c as i32))
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Centered two-line notice, e.g. "terminal too small" / "need 42x42".
fn draw_too_small(fb: &mut FrameBuffer, viewport: Viewport, need_w: u16, need_h: u16) {
    const TITLE: &str = "terminal too small";
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let mid_y = viewport.height.saturating_sub(2) / 2;

    let title_w = TITLE.chars().count() as u16;
    fb.put_str(viewport.width.saturating_sub(title_w) / 2, mid_y, TITLE, style);

    // "need " + W + "x" + H, written piecewise so no String is built.
    let need_len = 5 + digits(need_w) + 1 + digits(need_h);
    let mut x = viewport.width.saturating_sub(need_len) / 2;
    let y = mid_y.saturating_add(1);
    fb.put_str(x, y, "need ", style);
    x = x.saturating_add(5);
    fb.put_u32(x, y, need_w as u32, style);
    x = x.saturating_add(digits(need_w));
    fb.put_char(x, y, 'x', style);
    fb.put_u32(x.saturating_add(1), y, need_h as u32, style);
}

fn digits(mut n: u16) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

fn draw_overlay_text(fb: &mut FrameBuffer, origin: WellOrigin, frame_w: u16, frame_h: u16, text: &str) {
    let mid_y = origin.y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = origin.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, mid_y, text, style);
}
