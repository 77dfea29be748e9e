//! Screen: picks the view for the arcade's live mode.

use crate::core::{Arcade, Stage, StatusReport};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::multi_view::MultiView;
use crate::volume_view::VolumeView;

#[derive(Debug, Clone, Copy, Default)]
pub struct Screen {
    single: GameView,
    multi: MultiView,
    volume: VolumeView,
}

impl Screen {
    pub fn render_into(&self, arcade: &Arcade, report: &StatusReport, viewport: Viewport, fb: &mut FrameBuffer) {
        match arcade.stage() {
            Stage::Single(session) => self.single.render_into(session, report, viewport, fb),
            Stage::Multi(multi) => self.multi.render_into(multi, report, viewport, fb),
            Stage::Volume { session, camera } => {
                self.volume.render_into(session, camera, report, viewport, fb)
            }
        }
    }
}
