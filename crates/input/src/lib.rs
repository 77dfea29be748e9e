//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events to held controls, host commands and camera
//! turns, and tracks which controls are currently held. Terminals that never
//! report key releases are handled with an auto-release timeout.

pub mod keyboard;
pub mod map;

pub use tui_blockfall_types as types;

pub use keyboard::{KeyboardState, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{map_key, KeyInput};
