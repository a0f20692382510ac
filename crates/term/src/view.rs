//! PuzzleView: maps a `core::PuzzleSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. It also owns the
//! inverse mapping (terminal position to board cell) used for mouse picks,
//! so drawing and hit-testing always agree on geometry.

use crate::core::{BlockSnapshot, PuzzleSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Pos;

const BOARD_BG: Rgb = Rgb::new(20, 20, 30);
const BLOCK_FG: Rgb = Rgb::new(60, 90, 220);
const BLOCK_EDGE: Rgb = Rgb::new(130, 150, 240);
const SELECTED_FG: Rgb = Rgb::new(150, 200, 255);
const SELECTED_EDGE: Rgb = Rgb::new(235, 245, 255);
const GOAL_FG: Rgb = Rgb::new(200, 170, 60);

const WIN_TEXT: &str = "YOU WIN!";

/// Largest cell size in either axis.
pub const MAX_CELL_SIZE: u16 = 16;

const HELP: [(&str, &str); 5] = [
    ("MOVE", "arrows/hjkl"),
    ("NEXT", "tab"),
    ("PICK", "1-9/click"),
    ("RESET", "r"),
    ("QUIT", "q"),
];

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

/// Screen placement of the bordered board for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Terminal renderer for the sliding-block board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for PuzzleView {
    fn default() -> Self {
        // 2:1 compensates for typical terminal glyph aspect ratio.
        Self::new(6, 3)
    }
}

impl PuzzleView {
    /// Sizes are clamped to `1..=MAX_CELL_SIZE` glyphs per cell.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    fn frame(&self, snap: &PuzzleSnapshot, viewport: Viewport) -> Frame {
        let w = (snap.board_width as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.board_height as u16).saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    /// Board cell under terminal position `(column, row)`, if any.
    pub fn cell_at(
        &self,
        snap: &PuzzleSnapshot,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<Pos> {
        let frame = self.frame(snap, viewport);
        let dx = column.checked_sub(frame.x + 1)?;
        let dy = row.checked_sub(frame.y + 1)?;
        let x = dx / self.cell_w;
        let y = dy / self.cell_h;
        if x >= snap.board_width as u16 || y >= snap.board_height as u16 {
            return None;
        }
        Some(Pos::new(x as i8, y as i8))
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &PuzzleSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(snap, viewport);
        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, border);

        for y in 0..snap.board_height as i8 {
            for x in 0..snap.board_width as i8 {
                let pos = Pos::new(x, y);
                if snap.block_at(pos).is_none() {
                    self.draw_empty_cell(fb, frame, pos, snap);
                }
            }
        }

        for (index, block) in snap.blocks.iter().enumerate() {
            self.draw_block(fb, frame, index, block);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.solved {
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_centered(frame.x, frame.w, frame.y + frame.h / 2, WIN_TEXT, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &PuzzleSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, frame: Frame, pos: Pos) -> (u16, u16) {
        (
            frame.x + 1 + (pos.x as u16) * self.cell_w,
            frame.y + 1 + (pos.y as u16) * self.cell_h,
        )
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, pos: Pos, snap: &PuzzleSnapshot) {
        let (px, py) = self.cell_origin(frame, pos);
        let in_goal = snap.goal_extent().is_some_and(|extent| {
            BlockSnapshot {
                origin: snap.goal,
                extent,
                selected: false,
            }
            .contains(pos)
        });

        if in_goal {
            let style = CellStyle::new(GOAL_FG, BOARD_BG).dim();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '░', style);
        } else {
            let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
            fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, index: usize, block: &BlockSnapshot) {
        if block.origin.x < 0 || block.origin.y < 0 {
            return;
        }
        let (px, py) = self.cell_origin(frame, block.origin);
        let w = (block.extent.w as u16) * self.cell_w;
        let h = (block.extent.h as u16) * self.cell_h;

        let (fill, edge) = if block.selected {
            (SELECTED_FG, SELECTED_EDGE)
        } else {
            (BLOCK_FG, BLOCK_EDGE)
        };
        let body = CellStyle::new(fill, fill);
        let outline = CellStyle::new(edge, fill).bold();

        fb.fill_rect(px, py, w, h, ' ', body);
        fb.draw_box(px, py, w, h, outline);

        // 1-based, matching the digit keys.
        let label = CellStyle::new(Rgb::new(10, 10, 20), fill).bold();
        fb.put_u32(px + w / 2, py + h / 2, (index as u32) + 1, label);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &PuzzleSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 18 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        fb.put_str(panel_x, y, "KLOTSKI", label);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BLOCK", label);
        let slash = fb.put_u32(panel_x + 6, y, (snap.selected as u32) + 1, value);
        fb.put_char(slash, y, '/', value);
        fb.put_u32(slash + 1, y, snap.blocks.len() as u32, value);
        y = y.saturating_add(2);

        for (key, what) in HELP {
            if y >= viewport.height {
                return;
            }
            fb.put_str(panel_x, y, key, label);
            fb.put_str(panel_x + 6, y, what, value);
            y = y.saturating_add(1);
        }

        if snap.solved && y.saturating_add(1) < viewport.height {
            fb.put_str(panel_x, y + 1, "SOLVED", label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;

    #[test]
    fn frame_is_centered() {
        let snap = Puzzle::new().snapshot();
        let view = PuzzleView::new(2, 1);
        // 4*2+2 by 5*1+2 => 10x7
        let frame = view.frame(&snap, Viewport::new(20, 11));
        assert_eq!(frame, Frame { x: 5, y: 2, w: 10, h: 7 });
    }

    #[test]
    fn cell_at_inverts_cell_origin() {
        let snap = Puzzle::new().snapshot();
        let view = PuzzleView::default();
        let vp = Viewport::new(80, 24);
        let frame = view.frame(&snap, vp);
        for y in 0..5 {
            for x in 0..4 {
                let pos = Pos::new(x, y);
                let (px, py) = view.cell_origin(frame, pos);
                assert_eq!(view.cell_at(&snap, vp, px, py), Some(pos));
                assert_eq!(view.cell_at(&snap, vp, px + 5, py + 2), Some(pos));
            }
        }
        // Border and outside.
        assert_eq!(view.cell_at(&snap, vp, frame.x, frame.y + 1), None);
        assert_eq!(view.cell_at(&snap, vp, frame.x + frame.w - 1, frame.y + 1), None);
        assert_eq!(view.cell_at(&snap, vp, 0, 0), None);
    }

    #[test]
    fn cell_size_is_clamped() {
        assert_eq!(PuzzleView::new(0, 0).cell_size(), (1, 1));
        assert_eq!(
            PuzzleView::new(20000, u16::MAX).cell_size(),
            (MAX_CELL_SIZE, MAX_CELL_SIZE)
        );
    }

    #[test]
    fn oversized_view_renders_without_overflow() {
        let snap = Puzzle::new().snapshot();
        let view = PuzzleView::new(20000, 3);
        let vp = Viewport::new(40, 20);
        let fb = view.render(&snap, vp);
        assert_eq!((fb.width(), fb.height()), (40, 20));
        // 4*16+2 = 66 columns, wider than the viewport: the frame pins to x = 0.
        assert_eq!(view.frame(&snap, vp).x, 0);
        // frame.y = (20 - 17) / 2 = 1, so row 2 is the first board row.
        assert_eq!(view.cell_at(&snap, vp, 1 + 16 * 2, 2), Some(Pos::new(2, 0)));
    }
}
