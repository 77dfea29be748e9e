//! MultiView: four compact boards side by side.
//!
//! Boards are drawn one column per cell and laid out in a single row when
//! the terminal is wide enough, otherwise in a 2x2 grid. Each board gets a
//! score line underneath taken from the polled status report.

use crate::core::{MultiSession, StatusReport};
use crate::fb::{FrameBuffer, Glyph};
use crate::game_view::{draw_centered, BoardPainter, Viewport, PANEL_LABEL, PANEL_VALUE};

const GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiView {
    painter: BoardPainter,
}

impl Default for MultiView {
    fn default() -> Self {
        Self {
            painter: BoardPainter {
                cell_w: 1,
                cell_h: 1,
                show_ghost: false,
            },
        }
    }
}

impl MultiView {
    /// Columns per row of boards for this viewport.
    fn columns(&self, count: usize, board_w: u16, viewport: Viewport) -> usize {
        let row_w = |n: u16| n * board_w + n.saturating_sub(1) * GAP;
        if count <= 1 || row_w(count as u16) <= viewport.width {
            count.max(1)
        } else {
            count.div_ceil(2)
        }
    }

    pub fn render_into(&self, multi: &MultiSession, report: &StatusReport, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let boards = multi.boards();
        let Some(first) = boards.first() else {
            return;
        };
        let (frame_w, frame_h) = self.painter.frame_size(first.field());
        // Frame plus the score line below it.
        let slot_h = frame_h + 1;

        let cols = self.columns(boards.len(), frame_w, viewport);
        let rows = boards.len().div_ceil(cols) as u16;
        let total_w = cols as u16 * frame_w + (cols as u16 - 1) * GAP;
        let total_h = 1 + rows * slot_h;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(total_h) / 2;

        // Header: aggregate score and boards still in play.
        let mut hx = fb.put_str(start_x, start_y, "TOTAL ", PANEL_LABEL);
        hx = fb.put_u32(hx, start_y, report.score, PANEL_VALUE);
        hx = fb.put_str(hx, start_y, "  ACTIVE ", PANEL_LABEL);
        hx = fb.put_u32(hx, start_y, report.active_boards as u32, PANEL_VALUE);
        hx = fb.put_str(hx, start_y, "/", PANEL_VALUE);
        fb.put_u32(hx, start_y, boards.len() as u32, PANEL_VALUE);

        for (i, session) in boards.iter().enumerate() {
            let col = (i % cols) as u16;
            let row = (i / cols) as u16;
            let x = start_x + col * (frame_w + GAP);
            let y = start_y + 1 + row * slot_h;
            self.painter.draw(fb, session, x, y);

            if let Some(status) = report.boards.get(i) {
                let sx = fb.put_u32(x, y + frame_h, (i + 1) as u32, PANEL_LABEL);
                let sx = fb.put_str(sx, y + frame_h, ":", PANEL_VALUE);
                fb.put_u32(sx, y + frame_h, status.score, PANEL_VALUE);
            }
        }

        if report.game_over {
            draw_centered(fb, start_x, start_y + total_h / 2, total_w, "ALL OVER");
        }
    }

    pub fn render(&self, multi: &MultiSession, report: &StatusReport, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(multi, report, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Arcade;
    use crate::types::GameMode;

    fn multi_arcade() -> (MultiSession, StatusReport) {
        let arcade = Arcade::new(GameMode::Multi, 2);
        let report = arcade.report();
        let multi = match arcade.stage() {
            crate::core::Stage::Multi(m) => m.clone(),
            _ => unreachable!(),
        };
        (multi, report)
    }

    fn text(fb: &FrameBuffer) -> String {
        (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn wide_terminal_uses_one_row() {
        let view = MultiView::default();
        let (multi, report) = multi_arcade();
        let fb = view.render(&multi, &report, Viewport::new(80, 30));
        assert_eq!(view.columns(4, 12, Viewport::new(80, 30)), 4);
        let all = text(&fb);
        assert!(all.contains("TOTAL 0"));
        assert!(all.contains("ACTIVE 4/4"));
        assert!(all.contains("4:0"));
    }

    #[test]
    fn narrow_terminal_uses_grid() {
        let view = MultiView::default();
        assert_eq!(view.columns(4, 12, Viewport::new(40, 50)), 2);
        let (multi, report) = multi_arcade();
        let fb = view.render(&multi, &report, Viewport::new(40, 50));
        assert!(text(&fb).contains("3:0"));
    }
}
