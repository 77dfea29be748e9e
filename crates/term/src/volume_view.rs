//! VolumeView: the 3D well seen through the orbit camera.
//!
//! Every locked voxel and every cell of the falling piece is projected with
//! the camera and painted far to near, so nearer voxels cover farther ones.
//! The well's edges are drawn first as a dotted wireframe.

use crate::core::field::{FallingPiece, Field};
use crate::core::{Camera, Session3d, SessionState, StatusReport, Volume};
use crate::fb::{CellStyle, FrameBuffer, Glyph};
use crate::game_view::{draw_centered, draw_panel, Viewport, PANEL_LABEL, PANEL_VALUE};
use crate::types::Color;

const PANEL_W: u16 = 16;
const WIRE: CellStyle = CellStyle::new(Color::new(90, 90, 110), Color::new(0, 0, 0));

/// One voxel after projection
#[derive(Debug, Clone, Copy, PartialEq)]
struct Splat {
    x: i32,
    y: i32,
    depth: f64,
    color: Color,
    ghost: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeView {
    show_ghost: bool,
}

impl Default for VolumeView {
    fn default() -> Self {
        Self { show_ghost: true }
    }
}

/// Maps volume coordinates to screen cells for one frame.
struct Projector {
    camera: Camera,
    centre: (f64, f64, f64),
    origin: (f64, f64),
    /// Terminal rows per world unit; columns use twice this.
    scale: f64,
}

impl Projector {
    fn new(camera: Camera, volume: &Volume, area_w: u16, area_h: u16) -> Self {
        let (w, h, d) = (volume.width() as f64, volume.height() as f64, volume.depth() as f64);
        let diameter = (w * w + h * h + d * d).sqrt().max(1.0);
        let scale = ((area_h as f64 - 2.0) / diameter)
            .min((area_w as f64 - 2.0) / (2.0 * diameter))
            .max(0.5);
        Self {
            camera,
            centre: (w / 2.0, h / 2.0, d / 2.0),
            origin: (area_w as f64 / 2.0, area_h as f64 / 2.0),
            scale,
        }
    }

    /// Project a point given in volume coordinates.
    fn project(&self, x: f64, y: f64, z: f64) -> (i32, i32, f64) {
        let p = self
            .camera
            .project(x - self.centre.0, y - self.centre.1, z - self.centre.2);
        let sx = self.origin.0 + p.x * self.scale * 2.0;
        let sy = self.origin.1 + p.y * self.scale;
        (sx.round() as i32, sy.round() as i32, p.depth)
    }

    /// Project the centre of cell `(x, y, z)`.
    fn project_cell(&self, x: i16, y: i16, z: i16) -> (i32, i32, f64) {
        self.project(x as f64 + 0.5, y as f64 + 0.5, z as f64 + 0.5)
    }
}

impl VolumeView {
    pub fn render_into(&self, session: &Session3d, camera: &Camera, report: &StatusReport, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let volume = session.field();
        let area_w = viewport.width.saturating_sub(PANEL_W);
        let projector = Projector::new(*camera, volume, area_w, viewport.height);

        draw_wireframe(fb, &projector, volume);

        let mut splats = Vec::new();
        volume.for_each_occupied(|p, color| {
            let (x, y, depth) = projector.project_cell(p.x, p.y, p.z);
            splats.push(Splat { x, y, depth, color, ghost: false });
        });
        if self.show_ghost {
            if let Some(ghost) = session.ghost() {
                for p in ghost.cells() {
                    let (x, y, depth) = projector.project_cell(p.x, p.y, p.z);
                    splats.push(Splat { x, y, depth, color: ghost.color, ghost: true });
                }
            }
        }
        if let Some(piece) = session.active() {
            for p in piece.cells() {
                let (x, y, depth) = projector.project_cell(p.x, p.y, p.z);
                splats.push(Splat { x, y, depth, color: piece.color, ghost: false });
            }
        }

        paint(fb, &mut splats, volume);

        let panel_x = area_w.saturating_add(1);
        let y = draw_panel(fb, report, panel_x, 1, viewport);
        fb.put_str(panel_x, y, "CAMERA", PANEL_LABEL);
        let cx = fb.put_u32(panel_x, y + 1, camera.yaw().to_degrees().round() as u32, PANEL_VALUE);
        let cx = fb.put_str(cx, y + 1, "/", PANEL_VALUE);
        let pitch = camera.pitch().to_degrees().round() as i32;
        if pitch < 0 {
            let cx = fb.put_str(cx, y + 1, "-", PANEL_VALUE);
            fb.put_u32(cx, y + 1, pitch.unsigned_abs(), PANEL_VALUE);
        } else {
            fb.put_u32(cx, y + 1, pitch as u32, PANEL_VALUE);
        }

        let overlay = match session.state() {
            SessionState::Idle => Some("ENTER"),
            SessionState::Paused => Some("PAUSED"),
            SessionState::Over => Some("GAME OVER"),
            SessionState::Running => None,
        };
        if let Some(text) = overlay {
            draw_centered(fb, 0, viewport.height / 2, area_w, text);
        }
    }

    pub fn render(&self, session: &Session3d, camera: &Camera, report: &StatusReport, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, camera, report, viewport, &mut fb);
        fb
    }
}

/// Painter's algorithm: farthest first, each voxel two columns wide and
/// shaded darker with distance.
fn paint(fb: &mut FrameBuffer, splats: &mut [Splat], volume: &Volume) {
    splats.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let (w, h, d) = (volume.width() as f64, volume.height() as f64, volume.depth() as f64);
    let radius = (w * w + h * h + d * d).sqrt() / 2.0;

    for s in splats.iter() {
        // 100 at the nearest possible depth, 50 at the farthest.
        let nearness = ((radius - s.depth) / (2.0 * radius)).clamp(0.0, 1.0);
        let shade = 50 + (nearness * 50.0).round() as u16;
        let style = CellStyle::new(s.color.scaled(shade, 100), Color::new(0, 0, 0));
        let (ch, style) = if s.ghost { ('░', style.dim()) } else { ('█', style) };
        fb.set_signed(s.x, s.y, Glyph::new(ch, style));
        fb.set_signed(s.x + 1, s.y, Glyph::new(ch, style));
    }
}

/// Dotted outline of the well's twelve edges.
fn draw_wireframe(fb: &mut FrameBuffer, projector: &Projector, volume: &Volume) {
    let (w, h, d) = (volume.width() as f64, volume.height() as f64, volume.depth() as f64);
    let corners = [
        (0.0, 0.0, 0.0),
        (w, 0.0, 0.0),
        (w, 0.0, d),
        (0.0, 0.0, d),
        (0.0, h, 0.0),
        (w, h, 0.0),
        (w, h, d),
        (0.0, h, d),
    ];
    let edges = [
        (0, 1), (1, 2), (2, 3), (3, 0),
        (4, 5), (5, 6), (6, 7), (7, 4),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ];
    for (a, b) in edges {
        let (ax, ay, az) = corners[a];
        let (bx, by, bz) = corners[b];
        let steps = 24;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let (x, y, _) = projector.project(ax + (bx - ax) * t, ay + (by - ay) * t, az + (bz - az) * t);
            fb.set_signed(x, y, Glyph::new('·', WIRE));
        }
    }
}
