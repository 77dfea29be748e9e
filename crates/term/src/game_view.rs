//! GameView: draws a single 2D session and its side panel.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::field::FallingPiece;
use crate::core::{Board, Session2d, SessionState, StatusReport};
use crate::fb::{CellStyle, FrameBuffer, Glyph};
use crate::types::{Color, Point};

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

pub(crate) const WELL_BG: Color = Color::new(30, 30, 40);
pub(crate) const PANEL_LABEL: CellStyle = CellStyle::new(Color::new(220, 220, 220), Color::new(0, 0, 0)).bold();
pub(crate) const PANEL_VALUE: CellStyle = CellStyle::new(Color::new(200, 200, 200), Color::new(0, 0, 0));
pub(crate) const BORDER: CellStyle = CellStyle::new(Color::new(200, 200, 200), Color::new(0, 0, 0));

/// Draws one board (frame, locked cells, ghost, falling piece) at a given
/// cell size. Shared by the single and multi views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPainter {
    /// Board cell width in terminal columns
    pub cell_w: u16,
    /// Board cell height in terminal rows
    pub cell_h: u16,
    pub show_ghost: bool,
}

impl BoardPainter {
    /// Outer size including the one-cell frame.
    pub fn frame_size(&self, board: &Board) -> (u16, u16) {
        (
            board.width() as u16 * self.cell_w + 2,
            board.height() as u16 * self.cell_h + 2,
        )
    }

    /// Draw `session` with the frame's top-left corner at `(x, y)`.
    pub fn draw(&self, fb: &mut FrameBuffer, session: &Session2d, x: u16, y: u16) {
        let board = session.field();
        let (frame_w, frame_h) = self.frame_size(board);

        fb.fill_rect(
            x + 1,
            y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::default().on(WELL_BG),
        );
        fb.draw_box(x, y, frame_w, frame_h, BORDER);

        let empty = CellStyle::new(Color::new(90, 90, 100), WELL_BG).dim();
        for by in 0..board.height() as i16 {
            for bx in 0..board.width() as i16 {
                match board.get(bx, by).flatten() {
                    Some(color) => self.cell(fb, x, y, bx, by, '█', solid(color)),
                    None if self.cell_w > 1 => self.cell(fb, x, y, bx, by, '·', empty),
                    None => {}
                }
            }
        }

        if self.show_ghost {
            if let Some(ghost) = session.ghost() {
                let style = CellStyle::new(Color::new(140, 140, 140), WELL_BG).dim();
                for p in ghost.cells() {
                    self.cell(fb, x, y, p.x, p.y, '░', style);
                }
            }
        }

        if let Some(piece) = session.active() {
            let style = solid(piece.color).bold();
            for p in piece.cells() {
                self.cell(fb, x, y, p.x, p.y, '█', style);
            }
        }

        let overlay = match session.state() {
            SessionState::Idle => Some("ENTER"),
            SessionState::Paused => Some("PAUSED"),
            SessionState::Over => Some("GAME OVER"),
            SessionState::Running => None,
        };
        if let Some(text) = overlay {
            draw_centered(fb, x, y + frame_h / 2, frame_w, text);
        }
    }

    fn cell(&self, fb: &mut FrameBuffer, x: u16, y: u16, bx: i16, by: i16, ch: char, style: CellStyle) {
        // Cells above the top row are not drawn.
        if let Some((px, py)) = board_to_screen(self, x, y, Point::flat(bx, by)) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }
}

/// A lightweight terminal view of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    painter: BoardPainter,
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
            painter: BoardPainter {
                cell_w: cell_w.max(1),
                cell_h: cell_h.max(1),
                show_ghost: true,
            },
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, session: &Session2d, report: &StatusReport, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.painter.frame_size(session.field());
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.painter.draw(fb, session, start_x, start_y);

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        draw_panel(fb, report, panel_x, start_y, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session2d, report: &StatusReport, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, report, viewport, &mut fb);
        fb
    }
}

/// Score, level, lines and the next queue of the first board in `report`.
pub(crate) fn draw_panel(fb: &mut FrameBuffer, report: &StatusReport, x: u16, y: u16, viewport: Viewport) -> u16 {
    if x >= viewport.width || viewport.width - x < 10 {
        return y;
    }

    let mut y = y;
    for (label, value) in [
        ("SCORE", report.score),
        ("LEVEL", report.level),
        ("LINES", report.lines),
    ] {
        fb.put_str(x, y, label, PANEL_LABEL);
        fb.put_u32(x, y + 1, value, PANEL_VALUE);
        y = y.saturating_add(3);
    }

    if let Some(board) = report.boards.first() {
        fb.put_str(x, y, "NEXT", PANEL_LABEL);
        y = y.saturating_add(1);
        for kind in &board.next {
            fb.put_str(x, y, kind, PANEL_VALUE);
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);
    }

    fb.put_str(x, y, "MODE", PANEL_LABEL);
    fb.put_str(x, y + 1, report.mode, PANEL_VALUE);
    y.saturating_add(3)
}

pub(crate) fn draw_centered(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Color::new(255, 255, 255), Color::new(0, 0, 0)).bold();
    fb.put_str(tx, y, text, style);
}

pub(crate) fn solid(color: Color) -> CellStyle {
    CellStyle::new(color, WELL_BG)
}

/// Screen cell of board cell `p` for a painter anchored at `(x, y)`.
pub fn board_to_screen(painter: &BoardPainter, x: u16, y: u16, p: Point) -> Option<(u16, u16)> {
    if p.x < 0 || p.y < 0 {
        return None;
    }
    Some((x + 1 + p.x as u16 * painter.cell_w, y + 1 + p.y as u16 * painter.cell_h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Arcade, PieceQueue, Session};
    use crate::types::{GameMode, PieceKind};

    fn o_session() -> Session2d {
        Session::from_parts(Board::standard(), PieceQueue::with_upcoming(1, &[PieceKind::O]))
    }

    fn report() -> StatusReport {
        Arcade::new(GameMode::Single, 1).report()
    }

    #[test]
    fn active_piece_and_ghost_are_drawn() {
        let view = GameView::default();
        let session = o_session();
        let viewport = Viewport::new(60, 24);
        let fb = view.render(&session, &report(), viewport);

        // Frame is 22x22, centred: x = 19, y = 1.
        let painter = BoardPainter { cell_w: 2, cell_h: 1, show_ghost: true };
        let (ax, ay) = board_to_screen(&painter, 19, 1, Point::flat(4, 0)).unwrap();
        assert_eq!(fb.get(ax, ay).unwrap().ch, '█');

        let (gx, gy) = board_to_screen(&painter, 19, 1, Point::flat(4, 19)).unwrap();
        assert_eq!(fb.get(gx, gy).unwrap().ch, '░');
        assert_eq!(fb.get(gx + 1, gy).unwrap().ch, '░');
    }

    #[test]
    fn idle_overlay_and_panel() {
        let view = GameView::default();
        let fb = view.render(&o_session(), &report(), Viewport::new(60, 24));
        let all: String = (0..24).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");
        assert!(all.contains("ENTER"));
        assert!(all.contains("SCORE"));
        assert!(all.contains("NEXT"));
        assert!(all.contains("single"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&o_session(), &report(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
