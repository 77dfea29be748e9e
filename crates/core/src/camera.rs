//! Camera for the 3D view: an orbit angle pair and an orthographic projection.
//!
//! The camera only affects presentation; the volume and its pieces never
//! rotate. Projection maps a point (relative to the volume centre) to screen
//! space plus a depth, where a larger depth is farther from the viewer, so
//! callers paint in descending depth order.

use std::f64::consts::FRAC_PI_2;

use crate::types::CameraTurn;

/// Angle change per camera turn (15 degrees)
pub const TURN_STEP: f64 = std::f64::consts::PI / 12.0;

/// Pitch is kept short of looking straight down or up
pub const PITCH_LIMIT: f64 = FRAC_PI_2 - 0.2;

/// A point after projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    yaw: f64,
    pitch: f64,
}

impl Camera {
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self {
            yaw: wrap_angle(yaw),
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Apply one camera turn. Yaw wraps around; pitch is clamped.
    pub fn turn(&mut self, turn: CameraTurn) {
        match turn {
            CameraTurn::YawLeft => self.yaw = wrap_angle(self.yaw - TURN_STEP),
            CameraTurn::YawRight => self.yaw = wrap_angle(self.yaw + TURN_STEP),
            CameraTurn::PitchUp => self.pitch = (self.pitch + TURN_STEP).clamp(-PITCH_LIMIT, PITCH_LIMIT),
            CameraTurn::PitchDown => self.pitch = (self.pitch - TURN_STEP).clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    /// Rotate `(x, y, z)` by yaw about the vertical axis, then by pitch about
    /// the screen's horizontal axis.
    pub fn project(&self, x: f64, y: f64, z: f64) -> Projected {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();

        let x1 = x * cy - z * sy;
        let z1 = x * sy + z * cy;

        let y2 = y * cp - z1 * sp;
        let z2 = y * sp + z1 * cp;

        Projected {
            x: x1,
            y: y2,
            depth: z2,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.6, 0.5)
    }
}

fn wrap_angle(a: f64) -> f64 {
    a.rem_euclid(std::f64::consts::TAU)
}
