//! GameView: maps a core [`Frame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{pattern, Frame, Status};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::grid::Grid;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, GHOST_OFFSET, HIDDEN_ROWS, VISIBLE_ROWS};

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Left panel width in terminal columns, including its gap to the board
const LEFT_PANEL_W: u16 = 12;

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

/// Draws the visible rows of the board, the hold slot, stats and the next
/// queue.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Fill color of a piece, and the lighter outline used for ghosts
fn piece_colors(kind: PieceKind) -> (Rgb, Rgb) {
    match kind {
        PieceKind::I => (Rgb::new(0x20, 0xff, 0xf2), Rgb::new(0x9c, 0xff, 0xf9)),
        PieceKind::J => (Rgb::new(0x4e, 0x5f, 0xff), Rgb::new(0xa5, 0xad, 0xff)),
        PieceKind::L => (Rgb::new(0xfc, 0xbf, 0x24), Rgb::new(0xfe, 0xce, 0x54)),
        PieceKind::O => (Rgb::new(0xf0, 0xfe, 0x53), Rgb::new(0xea, 0xed, 0xc6)),
        PieceKind::S => (Rgb::new(0x4e, 0xff, 0x75), Rgb::new(0x98, 0xfe, 0xaf)),
        PieceKind::T => (Rgb::new(0x9c, 0x4e, 0xff), Rgb::new(0xc9, 0x9e, 0xff)),
        PieceKind::Z => (Rgb::new(0xff, 0x4e, 0x4e), Rgb::new(0xff, 0xa8, 0xa8)),
    }
}

/// Glyph and style for a board value; `None` for empty cells
fn board_glyph(value: u8) -> Option<(char, CellStyle)> {
    if let Some(kind) = PieceKind::from_color(value) {
        let (fill, _) = piece_colors(kind);
        return Some(('█', CellStyle { bold: true, ..CellStyle::plain(fill, FIELD_BG) }));
    }
    let kind = PieceKind::from_color(value.checked_sub(GHOST_OFFSET)?)?;
    let (_, outline) = piece_colors(kind);
    Some(('░', CellStyle { dim: true, ..CellStyle::plain(outline, FIELD_BG) }))
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal columns and rows taken by the bordered field
    pub fn field_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            VISIBLE_ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, frame: &Frame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.field_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::plain(Rgb::new(0xa3, 0xa3, 0xa3), PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::plain(FIELD_BG, FIELD_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        self.draw_board(fb, &frame.board, start_x, start_y);

        if start_x >= LEFT_PANEL_W {
            self.draw_left_panel(fb, frame, start_x - LEFT_PANEL_W, start_y);
        }
        let right_x = start_x.saturating_add(frame_w).saturating_add(2);
        if right_x < viewport.width {
            self.draw_next(fb, frame, right_x, start_y);
        }

        match frame.status {
            Status::Paused => self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED"),
            Status::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            Status::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    /// Rows above `HIDDEN_ROWS` are never drawn
    fn draw_board(&self, fb: &mut FrameBuffer, board: &Grid<u8>, start_x: u16, start_y: u16) {
        let empty = CellStyle { dim: true, ..CellStyle::plain(Rgb::new(90, 90, 100), FIELD_BG) };
        for (r, c, value) in board.iter() {
            if !(HIDDEN_ROWS..BOARD_HEIGHT).contains(&r) || c >= BOARD_WIDTH {
                continue;
            }
            let (ch, style) = value
                .copied()
                .filter(|v| *v != EMPTY)
                .and_then(board_glyph)
                .unwrap_or(('·', empty));
            let px = start_x + 1 + c as u16 * self.cell_w;
            let py = start_y + 1 + (r - HIDDEN_ROWS) as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_left_panel(&self, fb: &mut FrameBuffer, frame: &Frame<'_>, x: u16, start_y: u16) {
        let label = CellStyle { bold: true, ..CellStyle::default() };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(x, y, "HOLD", label);
        y = y.saturating_add(1);
        if let Some(kind) = frame.hold {
            self.draw_mini(fb, kind, x, y, !frame.hold_available);
        } else {
            fb.put_str(x, y, "-", value);
        }
        y = y.saturating_add(3);

        let stats = frame.stats;
        for (name, n) in [
            ("SCORE", stats.score),
            ("LEVEL", stats.level),
            ("LINES", stats.lines_cleared),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(x, y, "TIME", label);
        fb.put_str(x, y.saturating_add(1), &stats.formatted_time(), value);
    }

    fn draw_next(&self, fb: &mut FrameBuffer, frame: &Frame<'_>, x: u16, start_y: u16) {
        let label = CellStyle { bold: true, ..CellStyle::default() };
        fb.put_str(x, start_y, "NEXT", label);
        let mut y = start_y.saturating_add(1);
        for kind in frame.queue.iter() {
            self.draw_mini(fb, *kind, x, y, false);
            y = y.saturating_add(3);
        }
    }

    /// Non-empty rows of the spawn pattern, one board cell per `cell_w` columns
    fn draw_mini(&self, fb: &mut FrameBuffer, kind: PieceKind, x: u16, y: u16, dim: bool) {
        let (fill, _) = piece_colors(kind);
        let style = CellStyle { dim, ..CellStyle::plain(fill, PANEL_BG) };
        let shape = pattern(kind);
        let rows = shape
            .rows()
            .iter()
            .filter(|row| row.iter().any(|v| matches!(v, Some(c) if *c != EMPTY)));
        for (dy, row) in rows.enumerate() {
            for (dx, v) in row.iter().enumerate() {
                if matches!(v, Some(c) if *c != EMPTY) {
                    let px = x.saturating_add(dx as u16 * self.cell_w);
                    fb.fill_rect(px, y.saturating_add(dy as u16), self.cell_w, 1, '█', style);
                }
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG)
        };
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::GameAction;

    fn screen(fb: &FrameBuffer) -> String {
        (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
    }

    #[test]
    fn test_glyphs_for_board_values() {
        assert_eq!(board_glyph(0), None);
        assert_eq!(board_glyph(1).map(|(ch, _)| ch), Some('█'));
        let (ch, style) = board_glyph(8).unwrap();
        assert_eq!(ch, '░');
        assert!(style.dim);
        assert_eq!(board_glyph(15), None);
    }

    #[test]
    fn test_render_draws_panel_labels() {
        let state = GameState::new(3);
        let fb = GameView::default().render(&state.frame(), Viewport::new(60, 30));
        let text = screen(&fb);
        for label in ["HOLD", "SCORE", "LEVEL", "LINES", "TIME", "NEXT", "00:00"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(!text.contains("PAUSED"));
    }

    #[test]
    fn test_render_shows_ghost_and_piece() {
        let state = GameState::new(3);
        let fb = GameView::default().render(&state.frame(), Viewport::new(60, 30));
        let text = screen(&fb);
        assert!(text.contains('░'));
        assert!(text.contains('█'));

        let mut hidden = state.clone();
        hidden.set_ghost(false);
        let text = screen(&GameView::default().render(&hidden.frame(), Viewport::new(60, 30)));
        assert!(!text.contains('░'));
    }

    #[test]
    fn test_only_visible_rows_are_drawn() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        assert_eq!(view.field_size(), (22, 23));

        let mut snap = GameState::new(3).snapshot();
        snap.settled = snap.settled.set(39, 0, 2).set(5, 9, 2);
        let state = GameState::restore(snap).unwrap();
        let fb = view.render(&state.frame(), Viewport::new(22, 23));
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(0, 22).map(|c| c.ch), Some('└'));
        // Row 39 is the last interior row; row 5 is in the hidden buffer
        assert_eq!(fb.get(1, 21).map(|c| c.ch), Some('█'));
        assert_eq!(fb.get(2, 21).map(|c| c.ch), Some('█'));
        let drawn = screen(&fb).matches('█').count();
        assert!(drawn <= 2 + 8, "only the settled cell and the active piece");
    }

    #[test]
    fn test_overlays_follow_status() {
        let mut state = GameState::new(3);
        state.apply_action(GameAction::Pause);
        let text = screen(&GameView::default().render(&state.frame(), Viewport::new(60, 30)));
        assert!(text.contains("PAUSED"));
    }

    #[test]
    fn test_small_viewport_does_not_panic() {
        let state = GameState::new(3);
        let fb = GameView::default().render(&state.frame(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
