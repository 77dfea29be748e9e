//! Arcade - owns the sessions of the selected game mode.
//!
//! Exactly one mode is live at a time. Switching modes throws the old
//! sessions away and builds fresh Idle ones for the next mode
//! (single -> multi -> 3d -> single).

use log::info;

use crate::camera::Camera;
use crate::multi::MultiSession;
use crate::rng::SimpleRng;
use crate::session::{Session2d, Session3d, SessionState};
use crate::status::{SessionStatus, StatusReport};
use crate::types::{CameraTurn, GameMode, HeldKeys};

/// Sessions of the live mode
#[derive(Debug, Clone)]
pub enum Stage {
    Single(Session2d),
    Multi(MultiSession),
    Volume { session: Session3d, camera: Camera },
}

impl Stage {
    fn build(mode: GameMode, seed: u32) -> Self {
        match mode {
            GameMode::Single => Stage::Single(Session2d::standard(seed)),
            GameMode::Multi => Stage::Multi(MultiSession::new(seed)),
            GameMode::Volume => Stage::Volume {
                session: Session3d::standard(seed),
                camera: Camera::default(),
            },
        }
    }

    pub fn mode(&self) -> GameMode {
        match self {
            Stage::Single(_) => GameMode::Single,
            Stage::Multi(_) => GameMode::Multi,
            Stage::Volume { .. } => GameMode::Volume,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Arcade {
    stage: Stage,
    /// Seeds for sessions created by mode switches
    seeds: SimpleRng,
}

impl Arcade {
    /// Idle sessions for `mode`, the first of them seeded with `seed`.
    pub fn new(mode: GameMode, seed: u32) -> Self {
        Self {
            stage: Stage::build(mode, seed),
            seeds: SimpleRng::new(seed),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.stage.mode()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Move to the next mode in the cycle and return it.
    pub fn switch_mode(&mut self) -> GameMode {
        let next = self.mode().next();
        self.set_mode(next);
        next
    }

    /// Replace the live sessions with fresh Idle ones for `mode`.
    pub fn set_mode(&mut self, mode: GameMode) {
        let seed = self.seeds.next_u32();
        info!("mode switch: {} -> {} (seed {})", self.mode().as_str(), mode.as_str(), seed);
        self.stage = Stage::build(mode, seed);
    }

    pub fn start(&mut self) {
        match &mut self.stage {
            Stage::Single(s) => s.start(),
            Stage::Multi(m) => m.start(),
            Stage::Volume { session, .. } => session.start(),
        }
    }

    pub fn pause(&mut self) {
        match &mut self.stage {
            Stage::Single(s) => s.pause(),
            Stage::Multi(m) => m.pause(),
            Stage::Volume { session, .. } => session.pause(),
        }
    }

    pub fn reset(&mut self) {
        match &mut self.stage {
            Stage::Single(s) => s.reset(),
            Stage::Multi(m) => m.reset(),
            Stage::Volume { session, camera } => {
                session.reset();
                *camera = Camera::default();
            }
        }
    }

    pub fn update(&mut self, elapsed_ms: f64, held: HeldKeys) {
        match &mut self.stage {
            Stage::Single(s) => s.update(elapsed_ms, held),
            Stage::Multi(m) => m.update(elapsed_ms, held),
            Stage::Volume { session, .. } => session.update(elapsed_ms, held),
        }
    }

    /// Turn the 3D camera. Applies immediately, in any state; returns false
    /// outside 3D mode.
    pub fn turn_camera(&mut self, turn: CameraTurn) -> bool {
        match &mut self.stage {
            Stage::Volume { camera, .. } => {
                camera.turn(turn);
                true
            }
            _ => false,
        }
    }

    pub fn camera(&self) -> Option<&Camera> {
        match &self.stage {
            Stage::Volume { camera, .. } => Some(camera),
            _ => None,
        }
    }

    /// Aggregate state of the live mode
    pub fn state(&self) -> SessionState {
        match &self.stage {
            Stage::Single(s) => s.state(),
            Stage::Multi(m) => m.state(),
            Stage::Volume { session, .. } => session.state(),
        }
    }

    /// Read-only status of every live board.
    pub fn report(&self) -> StatusReport {
        let boards = match &self.stage {
            Stage::Single(s) => vec![SessionStatus::from(s)],
            Stage::Multi(m) => m.boards().iter().map(SessionStatus::from).collect(),
            Stage::Volume { session, .. } => vec![SessionStatus::from(session)],
        };
        StatusReport::from_boards(self.mode().as_str(), self.state(), boards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Control;

    #[test]
    fn mode_cycle() {
        let mut arcade = Arcade::new(GameMode::Single, 1);
        assert_eq!(arcade.switch_mode(), GameMode::Multi);
        assert_eq!(arcade.switch_mode(), GameMode::Volume);
        assert_eq!(arcade.switch_mode(), GameMode::Single);
    }

    #[test]
    fn switch_discards_progress() {
        let mut arcade = Arcade::new(GameMode::Single, 1);
        arcade.start();
        if let Stage::Single(s) = arcade.stage_mut() {
            s.hard_drop();
        }
        assert!(arcade.report().score > 0);

        arcade.switch_mode();
        arcade.switch_mode();
        arcade.switch_mode();
        let report = arcade.report();
        assert_eq!(report.mode, "single");
        assert_eq!(report.score, 0);
        assert_eq!(report.state, SessionState::Idle);
    }

    #[test]
    fn camera_only_in_volume_mode() {
        let mut arcade = Arcade::new(GameMode::Single, 1);
        assert!(!arcade.turn_camera(CameraTurn::YawLeft));
        assert!(arcade.camera().is_none());

        let mut arcade = Arcade::new(GameMode::Volume, 1);
        let before = *arcade.camera().unwrap();
        // Camera turns even while Idle.
        assert!(arcade.turn_camera(CameraTurn::YawLeft));
        assert_ne!(*arcade.camera().unwrap(), before);
        arcade.reset();
        assert_eq!(*arcade.camera().unwrap(), Camera::default());
    }

    #[test]
    fn update_routes_to_live_mode() {
        let mut arcade = Arcade::new(GameMode::Multi, 8);
        arcade.start();
        let keys: HeldKeys = [Control::Drop].into_iter().collect();
        arcade.update(16.0, keys);
        let report = arcade.report();
        assert_eq!(report.boards.len(), 4);
        assert!(report.boards.iter().all(|b| b.score > 0));
    }
}
