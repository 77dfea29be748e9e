//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Columns of a 2D board |
//! | `BOARD_HEIGHT` | 20 | Rows of a 2D board |
//! | `VOLUME_WIDTH` | 5 | X extent of the 3D volume |
//! | `VOLUME_HEIGHT` | 12 | Y (gravity) extent of the 3D volume |
//! | `VOLUME_DEPTH` | 5 | Z extent of the 3D volume |
//!
//! # Timing
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_SPEEDUP` | 0.8 | Interval factor per level |
//! | `DROP_INTERVAL_FLOOR_MS` | 50 | Fastest gravity |
//! | `KEY_REPEAT_MS` | 150 | Minimum gap between applied inputs |
//! | `STATUS_POLL_MS` | 100 | Host UI refresh interval |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Control, GameMode, HeldKeys, PieceKind};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameMode::Single.next(), GameMode::Multi);
//!
//! let mut keys = HeldKeys::default();
//! keys.press(Control::Left);
//! assert!(keys.is_held(Control::Left));
//! assert!(!keys.is_held(Control::Right));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// 3D volume extent along x
pub const VOLUME_WIDTH: u8 = 5;

/// 3D volume extent along y (the gravity axis)
pub const VOLUME_HEIGHT: u8 = 12;

/// 3D volume extent along z (depth)
pub const VOLUME_DEPTH: u8 = 5;

/// Number of independent boards in multi mode
pub const MULTI_BOARD_COUNT: usize = 4;

/// Look-ahead length of the next-piece queue
pub const NEXT_QUEUE_LEN: usize = 3;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: f64 = 1000.0;

/// Each level multiplies the gravity interval by this factor
pub const DROP_SPEEDUP: f64 = 0.8;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_FLOOR_MS: f64 = 50.0;

/// Sampled keyboard input is applied at most once per window
pub const KEY_REPEAT_MS: f64 = 150.0;

/// Host UI polling interval
pub const STATUS_POLL_MS: u32 = 100;

/// Points per cell for a successful soft drop step
pub const SOFT_DROP_POINTS: u32 = 5;

/// Points per cell travelled by a hard drop
pub const HARD_DROP_POINTS: u32 = 5;

/// Lines (or layers) needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear base points, indexed by lines cleared in one lock.
///
/// Points are multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Opaque color token stored in occupied cells (24-bit RGB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    ///
    /// ```
    /// use tui_blockfall_types::Color;
    ///
    /// assert_eq!(Color::from_hex(0x00f0f0), Color::new(0, 240, 240));
    /// ```
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Scale each channel by `num / den` (used for shading).
    pub fn scaled(self, num: u16, den: u16) -> Self {
        let f = |c: u8| ((c as u16 * num) / den.max(1)).min(255) as u8;
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

/// A cell on a board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled with a locked piece of that color
pub type Cell = Option<Color>;

/// Integer grid coordinate. 2D boards always use `z == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    pub const fn flat(x: i16, y: i16) -> Self {
        Self { x, y, z: 0 }
    }
}

/// A translation request for the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub dx: i16,
    pub dy: i16,
    pub dz: i16,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0, dy: 0, dz: 0 };
    pub const DOWN: Offset = Offset { dx: 0, dy: 1, dz: 0 };

    pub const fn new(dx: i16, dy: i16, dz: i16) -> Self {
        Self { dx, dy, dz }
    }

    pub const fn flat(dx: i16, dy: i16) -> Self {
        Self { dx, dy, dz: 0 }
    }
}

/// Presentation mode chosen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// One 2D board
    #[default]
    Single,
    /// Four independent 2D boards sharing the keyboard
    Multi,
    /// A projected voxel volume
    Volume,
}

impl GameMode {
    /// Parse a mode name: "single", "multi", "3d" (or "volume").
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" | "1" => Some(GameMode::Single),
            "multi" | "4" => Some(GameMode::Multi),
            "3d" | "volume" => Some(GameMode::Volume),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Single => "single",
            GameMode::Multi => "multi",
            GameMode::Volume => "3d",
        }
    }

    /// Mode-switch cycle: single → multi → 3d → single.
    pub fn next(&self) -> Self {
        match self {
            GameMode::Single => GameMode::Multi,
            GameMode::Multi => GameMode::Volume,
            GameMode::Volume => GameMode::Single,
        }
    }
}

/// Keys whose held state is sampled by a running session.
///
/// The order of [`Control::ALL`] is the order in which held keys are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Move one cell towards -x
    Left,
    /// Move one cell towards +x
    Right,
    /// Move one cell towards +z (3D only)
    Forward,
    /// Move one cell towards -z (3D only)
    Back,
    /// Soft drop one cell
    Down,
    /// Rotate 90° clockwise (2D only)
    RotateCw,
    /// Rotate 90° counter-clockwise (2D only)
    RotateCcw,
    /// Hard drop and lock
    Drop,
}

impl Control {
    pub const ALL: [Control; 8] = [
        Control::Left,
        Control::Right,
        Control::Forward,
        Control::Back,
        Control::Down,
        Control::RotateCw,
        Control::RotateCcw,
        Control::Drop,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Snapshot of which [`Control`]s are currently held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys(u16);

impl HeldKeys {
    pub fn press(&mut self, control: Control) {
        self.0 |= control.bit();
    }

    pub fn release(&mut self, control: Control) {
        self.0 &= !control.bit();
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.0 & control.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Held controls in application order.
    pub fn iter(self) -> impl Iterator<Item = Control> {
        Control::ALL.into_iter().filter(move |c| self.is_held(*c))
    }
}

impl FromIterator<Control> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Control>>(iter: I) -> Self {
        let mut keys = HeldKeys::default();
        for c in iter {
            keys.press(c);
        }
        keys
    }
}

/// Host-level commands that are not sampled per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Reset,
    SwitchMode,
    Quit,
}

/// A camera turn request in 3D mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraTurn {
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_and_timing_defaults() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(SOFT_DROP_POINTS, 5);
        assert_eq!(HARD_DROP_POINTS, 5);
        assert_eq!(NEXT_QUEUE_LEN, 3);
        assert_eq!(KEY_REPEAT_MS, 150.0);
        assert_eq!(DROP_INTERVAL_FLOOR_MS, 50.0);
    }

    #[test]
    fn held_keys_iterate_in_application_order() {
        let keys: HeldKeys = [Control::Drop, Control::Left, Control::RotateCw]
            .into_iter()
            .collect();
        let order: Vec<Control> = keys.iter().collect();
        assert_eq!(order, vec![Control::Left, Control::RotateCw, Control::Drop]);
    }

    #[test]
    fn held_keys_release() {
        let mut keys = HeldKeys::default();
        keys.press(Control::Down);
        keys.release(Control::Down);
        assert!(keys.is_empty());
    }

    #[test]
    fn mode_cycle_and_parse() {
        assert_eq!(GameMode::Volume.next(), GameMode::Single);
        assert_eq!(GameMode::from_str("3D"), Some(GameMode::Volume));
        assert_eq!(GameMode::from_str(" multi "), Some(GameMode::Multi));
        assert_eq!(GameMode::from_str("bogus"), None);
    }

    #[test]
    fn color_from_hex_and_shading() {
        let c = Color::from_hex(0xf0a000);
        assert_eq!(c, Color::new(240, 160, 0));
        assert_eq!(c.scaled(1, 2), Color::new(120, 80, 0));
    }
}
