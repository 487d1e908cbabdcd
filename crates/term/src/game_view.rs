//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_preview_shape, Piece, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, SessionState};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Board origin and size in terminal glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for a game session.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    /// (keys, action) pairs listed under the preview
    controls: &'static [(&'static str, &'static str)],
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            controls: &[],
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_controls(mut self, controls: &'static [(&'static str, &'static str)]) -> Self {
        self.controls = controls;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).glyph(' '));

        let board_px_w = snap.width.saturating_mul(self.cell_w);
        let board_px_h = snap.height.saturating_mul(self.cell_h);
        let frame = Frame {
            x: 0,
            y: 0,
            w: board_px_w.saturating_add(2),
            h: board_px_h.saturating_add(2),
        };
        let frame = Frame {
            x: viewport.width.saturating_sub(frame.w + PANEL_WIDTH) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame.h) / 2,
                AnchorY::Top => 0,
            },
            ..frame
        };

        let backdrop = playfield(Rgb::new(80, 80, 90));
        fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, board_px_h, ' ', backdrop);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.draw_border(frame.x, frame.y, frame.w, frame.h, border);

        // Locked cells, with a dot grid on empty ones.
        let dot = playfield(Rgb::new(90, 90, 100)).dim();
        for (y, row) in snap.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(kind) => self.draw_block(fb, frame, x, y, *kind),
                    None => self.fill_board_cell(fb, frame, x, y, '·', dot),
                }
            }
        }

        if let Some(ghost) = snap.ghost {
            let style = playfield(ghost.color()).dim();
            for (x, y) in self.visible_cells(snap, &ghost) {
                self.fill_board_cell(fb, frame, x, y, '░', style);
            }
        }

        for (x, y) in self.visible_cells(snap, &snap.active) {
            self.draw_block(fb, frame, x, y, snap.active.kind);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.state {
            SessionState::Paused => self.draw_overlay(fb, frame, &["PAUSED", "P to resume"]),
            SessionState::GameOver => self.draw_overlay(fb, frame, &["GAME OVER", "R to restart"]),
            SessionState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Cells of `piece` that fall inside the visible board.
    fn visible_cells(
        &self,
        snap: &SessionSnapshot,
        piece: &Piece,
    ) -> impl Iterator<Item = (u16, u16)> {
        let (w, h) = (snap.width as i16, snap.height as i16);
        piece
            .occupied_cells()
            .into_iter()
            .filter(move |&(x, y)| x >= 0 && x < w && y >= 0 && y < h)
            .map(|(x, y)| (x as u16, y as u16))
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        self.fill_board_cell(fb, frame, x, y, '█', playfield(kind.color()).bold());
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = frame.y;
        let counters = [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ];
        for (name, number) in counters {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "TIME", label);
        let secs = (snap.elapsed_ms / 1000).min(u32::MAX as u64) as u32;
        let x = fb.put_u32(panel_x, y + 1, secs / 60, value);
        let x = fb.put_str(x, y + 1, ":", value);
        if secs % 60 < 10 {
            fb.put_char(x, y + 1, '0', value);
            fb.put_u32(x + 1, y + 1, secs % 60, value);
        } else {
            fb.put_u32(x, y + 1, secs % 60, value);
        }
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        for &kind in &snap.next_queue {
            let rows = self.draw_mini_piece(fb, panel_x, y, kind);
            if y.saturating_add(rows) >= viewport.height {
                break;
            }
            y = y.saturating_add(rows + 1);
        }

        if !self.controls.is_empty() {
            y = y.saturating_add(1);
            for (keys, action) in self.controls {
                if y >= viewport.height {
                    break;
                }
                let end = fb.put_str(panel_x, y, keys, hint);
                fb.put_str(end.saturating_add(1), y, action, value);
                y = y.saturating_add(1);
            }
        }
    }

    /// Draw the spawn orientation of `kind` at half scale; returns the rows used.
    fn draw_mini_piece(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) -> u16 {
        let shape = get_preview_shape(kind);
        let top = shape.iter().map(|&(_, dy)| dy).min().unwrap_or(0);
        let bottom = shape.iter().map(|&(_, dy)| dy).max().unwrap_or(0);
        let style = CellStyle::new(kind.color(), PANEL_BG).bold();
        for (dx, dy) in shape {
            let px = x.saturating_add(dx as u16 * 2);
            let py = y.saturating_add((dy - top) as u16);
            fb.put_str(px, py, "██", style);
        }
        (bottom - top + 1) as u16
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = frame.y.saturating_add(frame.h / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_add(i as u16), text, style);
        }
    }
}

/// Width reserved for the side panel when centering the board.
const PANEL_WIDTH: u16 = 20;

fn playfield(fg: Rgb) -> CellStyle {
    CellStyle::new(fg, PLAYFIELD_BG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;

    #[test]
    fn board_fits_in_small_viewport_without_panic() {
        let snap = Session::with_seed(1).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(10, 5));
        assert_eq!((fb.width(), fb.height()), (10, 5));
    }

    #[test]
    fn mini_piece_uses_shape_height() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(10, 4);
        assert_eq!(view.draw_mini_piece(&mut fb, 0, 0, PieceKind::I), 1);
        assert_eq!(fb.row_text(0), "████████  ");
        assert_eq!(view.draw_mini_piece(&mut fb, 0, 1, PieceKind::T), 2);
        assert_eq!(fb.row_text(1), "  ██      ");
    }
}
