//! tui-blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `tui_blockfall::{core, input, term, types}` and adds the binary's
//! configuration layer.

pub mod config;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub use config::AppConfig;
