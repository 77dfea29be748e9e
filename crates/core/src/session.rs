//! Session module - one board's complete game state and lifecycle
//!
//! A session composes a [`Field`], the falling piece, the piece queue and the
//! scoreboard, and runs the fixed-timestep gravity loop:
//!
//! - `update(elapsed, held)` does nothing unless the session is Running.
//! - Elapsed time feeds a drop accumulator; once it reaches the gravity
//!   interval one gravity step runs and the accumulator returns to zero
//!   (no catch-up for long frames).
//! - Held keys are then applied at most once per `KEY_REPEAT_MS`, measured on
//!   the session's own running clock with one timestamp shared by all keys.
//!
//! Piece movement lives in [`controller`](crate::controller).

use log::info;
use serde::Serialize;

use crate::board::Board;
use crate::field::Field;
use crate::rng::PieceQueue;
use crate::scoring::Scoreboard;
use crate::types::{Control, HeldKeys, Offset, PieceKind, KEY_REPEAT_MS};
use crate::volume::Volume;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Constructed or reset; a piece is spawned but nothing moves on its own
    Idle,
    Running,
    Paused,
    /// Terminal until `reset()`; entered only when a spawn is blocked
    Over,
}

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub kind: Option<PieceKind>,
    pub lines_cleared: u32,
    pub clear_points: u32,
    /// Soft/hard drop points earned by the piece before it locked
    pub drop_points: u32,
}

/// One board's game.
#[derive(Debug, Clone)]
pub struct Session<F: Field> {
    pub(crate) field: F,
    pub(crate) active: Option<F::Piece>,
    pub(crate) queue: PieceQueue,
    pub(crate) scoreboard: Scoreboard,
    pub(crate) state: SessionState,
    drop_accumulator_ms: f64,
    /// Running time, advanced only while Running
    clock_ms: f64,
    last_input_ms: Option<f64>,
    /// Drop points earned by the current piece
    pub(crate) piece_drop_points: u32,
    pub(crate) last_lock: Option<LockEvent>,
}

/// A classic 2D game
pub type Session2d = Session<Board>;

/// A game in the 3D volume
pub type Session3d = Session<Volume>;

impl<F: Field> Session<F> {
    /// New Idle session on `field` with a queue seeded by `seed`.
    pub fn new(field: F, seed: u32) -> Self {
        Self::from_parts(field, PieceQueue::new(seed))
    }

    /// New Idle session from an explicit field and queue. The first piece is
    /// spawned immediately; if it is blocked the session starts Over.
    pub fn from_parts(field: F, queue: PieceQueue) -> Self {
        let mut session = Self {
            field,
            active: None,
            queue,
            scoreboard: Scoreboard::new(),
            state: SessionState::Idle,
            drop_accumulator_ms: 0.0,
            clock_ms: 0.0,
            last_input_ms: None,
            piece_drop_points: 0,
            last_lock: None,
        };
        session.spawn();
        session
    }

    /// Idle or Paused -> Running.
    pub fn start(&mut self) {
        match self.state {
            SessionState::Idle | SessionState::Paused => {
                info!("session started (seed {})", self.queue.seed());
                self.state = SessionState::Running;
            }
            SessionState::Running | SessionState::Over => {}
        }
    }

    /// Toggle Running <-> Paused; no-op otherwise.
    pub fn pause(&mut self) {
        self.state = match self.state {
            SessionState::Running => SessionState::Paused,
            SessionState::Paused => SessionState::Running,
            other => other,
        };
    }

    /// Back to Idle with an empty field, a fresh queue and a zeroed score.
    ///
    /// The fresh queue continues the current random stream, so a run stays
    /// reproducible from its original seed.
    pub fn reset(&mut self) {
        info!(
            "session reset (score {}, lines {})",
            self.scoreboard.score(),
            self.scoreboard.lines()
        );
        self.field = self.field.emptied();
        self.queue = PieceQueue::new(self.queue.rng_state());
        self.scoreboard = Scoreboard::new();
        self.state = SessionState::Idle;
        self.drop_accumulator_ms = 0.0;
        self.clock_ms = 0.0;
        self.last_input_ms = None;
        self.last_lock = None;
        self.active = None;
        self.spawn();
    }

    /// Advance by `elapsed_ms`, then apply `held` keys if the repeat gate is open.
    pub fn update(&mut self, elapsed_ms: f64, held: HeldKeys) {
        if self.state != SessionState::Running {
            return;
        }

        let elapsed_ms = elapsed_ms.max(0.0);
        self.clock_ms += elapsed_ms;
        self.drop_accumulator_ms += elapsed_ms;

        if self.drop_accumulator_ms >= self.scoreboard.drop_interval_ms() {
            self.drop_accumulator_ms = 0.0;
            self.gravity_step();
        }

        self.apply_held(held);
    }

    /// One step of gravity: move the piece down, or lock it if it cannot move.
    ///
    /// A successful gravity move is scored like a soft drop.
    pub fn gravity_step(&mut self) {
        if self.state == SessionState::Over {
            return;
        }
        let Some(piece) = self.active else {
            return;
        };
        if self.field.blocked(&piece, Offset::DOWN) {
            self.lock_and_respawn();
        } else {
            self.soft_drop();
        }
    }

    fn apply_held(&mut self, held: HeldKeys) {
        if held.is_empty() || self.state != SessionState::Running {
            return;
        }
        if let Some(last) = self.last_input_ms {
            if self.clock_ms - last < KEY_REPEAT_MS {
                return;
            }
        }
        self.last_input_ms = Some(self.clock_ms);

        for control in held.iter() {
            if self.state != SessionState::Running {
                break;
            }
            self.apply_control(control);
        }
    }

    /// Apply one control immediately, bypassing the repeat gate.
    pub fn apply_control(&mut self, control: Control) -> bool {
        match control {
            Control::Left => self.try_move(Offset::flat(-1, 0)),
            Control::Right => self.try_move(Offset::flat(1, 0)),
            Control::Forward => self.try_move(Offset::new(0, 0, 1)),
            Control::Back => self.try_move(Offset::new(0, 0, -1)),
            Control::Down => self.soft_drop(),
            Control::RotateCw => self.try_rotate_cw(),
            Control::RotateCcw => self.try_rotate_ccw(),
            Control::Drop => self.hard_drop().is_some(),
        }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn active(&self) -> Option<&F::Piece> {
        self.active.as_ref()
    }

    /// Upcoming pieces, next first
    pub fn next_pieces(&self) -> &[PieceKind] {
        self.queue.preview()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::Over
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn level(&self) -> u32 {
        self.scoreboard.level()
    }

    pub fn lines(&self) -> u32 {
        self.scoreboard.lines()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> f64 {
        self.scoreboard.drop_interval_ms()
    }

    pub fn drop_accumulator_ms(&self) -> f64 {
        self.drop_accumulator_ms
    }

    /// Time spent Running since creation or the last reset
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn seed(&self) -> u32 {
        self.queue.seed()
    }

    /// The most recent lock, if not yet taken
    pub fn last_lock(&self) -> Option<&LockEvent> {
        self.last_lock.as_ref()
    }

    /// Consume the most recent lock event.
    pub fn take_lock_event(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }
}

impl Session<Board> {
    /// A 10x20 session
    pub fn standard(seed: u32) -> Self {
        Self::new(Board::standard(), seed)
    }
}

impl Session<Volume> {
    /// A session in the standard 3D well
    pub fn standard(seed: u32) -> Self {
        Self::new(Volume::standard(), seed)
    }
}
