//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every game rule and all simulation state for the three
//! play modes. It has **no dependencies** on the terminal or any I/O, so it:
//!
//! - **Is deterministic**: the same seed reproduces the same piece sequence
//! - **Is testable**: every rule is exercised directly by unit tests
//! - **Is portable**: any host that can measure elapsed time can drive it
//!
//! # Module Structure
//!
//! - [`pieces`]: 2D shapes, colors and the quarter-turn transform
//! - [`voxels`]: the layered 3D piece catalog
//! - [`rng`]: seedable generator and the i.i.d. look-ahead queue
//! - [`field`]: the playfield trait shared by both grids
//! - [`board`]: 2D grid with collision, placement and line clearing
//! - [`volume`]: 3D grid with collision, placement and layer clearing
//! - [`scoring`]: clear/drop points, leveling and gravity speed
//! - [`session`]: one board's state machine and timed loop
//! - [`controller`]: spawn, move, rotate, drop and lock
//! - [`multi`]: four independent boards
//! - [`camera`]: orbit camera and projection for the 3D view
//! - [`arcade`]: mode selection and switching
//! - [`status`]: read-only status reports for the host UI
//!
//! # Game Rules
//!
//! - **Random pieces**: each piece is drawn uniformly and independently; three are shown ahead
//! - **Rotation**: quarter turns about the piece origin, never kicked; 3D pieces do not rotate
//! - **Scoring**: 100/300/500/800 times the level for 1-4 lines, 5 points per dropped cell
//! - **Levels**: one every 10 lines; gravity speeds up by 20% per level down to 50ms
//! - **Game over**: only when a newly spawned piece collides
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Session2d, SessionState};
//! use tui_blockfall_core::types::{Control, HeldKeys};
//!
//! let mut game = Session2d::standard(12345);
//! game.start();
//!
//! let held: HeldKeys = [Control::Drop].into_iter().collect();
//! game.update(16.0, held);
//!
//! assert!(game.score() > 0); // hard drop awards points
//! assert_eq!(game.state(), SessionState::Running);
//! ```
//!
//! # Timing
//!
//! The host calls `update` every frame (about 16ms) with the elapsed time.
//! Gravity runs once the drop accumulator reaches the level's interval, and
//! held keys repeat at most every 150ms.

pub mod arcade;
pub mod board;
pub mod camera;
pub mod controller;
pub mod field;
pub mod multi;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod status;
pub mod volume;
pub mod voxels;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use arcade::{Arcade, Stage};
pub use board::{ActivePiece, Board};
pub use camera::{Camera, Projected};
pub use field::{FallingPiece, Field};
pub use multi::MultiSession;
pub use pieces::{rotate, Shape};
pub use rng::{PieceQueue, SimpleRng};
pub use scoring::{drop_interval_ms, drop_score, level_for_lines, line_clear_score, DropKind, Scoreboard};
pub use session::{LockEvent, Session, Session2d, Session3d, SessionState};
pub use status::{SessionStatus, StatusPoller, StatusReport};
pub use volume::{ActiveVoxelPiece, Volume};
pub use voxels::VoxelShape;
