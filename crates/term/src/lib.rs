//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw into a simple
//! framebuffer that is then flushed to the terminal, without any widget or
//! layout library.
//!
//! - [`fb`]: framebuffer of styled glyphs
//! - [`game_view`]: one 2D board with ghost piece and side panel
//! - [`multi_view`]: four compact boards
//! - [`volume_view`]: the projected 3D well
//! - [`screen`]: chooses the view for the live mode
//! - [`renderer`]: terminal session and full/diff flushing

pub mod fb;
pub mod game_view;
pub mod multi_view;
pub mod renderer;
pub mod screen;
pub mod volume_view;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use game_view::{BoardPainter, GameView, Viewport};
pub use multi_view::MultiView;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
pub use screen::Screen;
pub use volume_view::VolumeView;
