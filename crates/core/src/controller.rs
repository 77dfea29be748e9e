//! Controller module - spawning, moving, rotating and dropping the falling piece
//!
//! Every request is checked against the field before anything changes; a
//! refused request returns `false` and leaves the session untouched.
//! Requests are honoured in every state except Over, so hosts and tests can
//! drive a session directly; timed input from `update` only arrives while
//! Running.

use log::{debug, info};

use crate::field::{FallingPiece, Field};
use crate::scoring::DropKind;
use crate::session::{LockEvent, Session, SessionState};
use crate::types::Offset;

impl<F: Field> Session<F> {
    /// Draw the next piece and place it at the spawn position.
    ///
    /// If the new piece collides where it spawns the session is Over and no
    /// piece is active. Returns whether a piece was spawned.
    pub fn spawn(&mut self) -> bool {
        let kind = self.queue.take();
        let piece = self.field.spawn_piece(kind);
        self.piece_drop_points = 0;

        if self.field.blocked(&piece, Offset::ZERO) {
            self.active = None;
            self.state = SessionState::Over;
            info!(
                "game over: {} blocked at spawn (score {}, lines {}, level {})",
                kind.as_str(),
                self.scoreboard.score(),
                self.scoreboard.lines(),
                self.scoreboard.level()
            );
            return false;
        }

        self.active = Some(piece);
        true
    }

    #[inline]
    fn movable(&self) -> Option<F::Piece> {
        if self.state == SessionState::Over {
            return None;
        }
        self.active
    }

    /// Move the piece by `by` if nothing is in the way.
    pub fn try_move(&mut self, by: Offset) -> bool {
        let Some(piece) = self.movable() else {
            return false;
        };
        if self.field.blocked(&piece, by) {
            return false;
        }
        self.active = Some(piece.shifted(by));
        true
    }

    /// Rotate one quarter turn clockwise, origin fixed, no kicks.
    pub fn try_rotate_cw(&mut self) -> bool {
        self.try_rotate(true)
    }

    /// Rotate one quarter turn counter-clockwise, origin fixed, no kicks.
    pub fn try_rotate_ccw(&mut self) -> bool {
        self.try_rotate(false)
    }

    fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(piece) = self.movable() else {
            return false;
        };
        match self.field.turned(&piece, clockwise) {
            Some(turned) => {
                self.active = Some(turned);
                true
            }
            None => false,
        }
    }

    /// Move down one row, scoring a soft-drop cell on success.
    pub fn soft_drop(&mut self) -> bool {
        if !self.try_move(Offset::DOWN) {
            return false;
        }
        self.piece_drop_points += self.scoreboard.record_drop(DropKind::Soft, 1);
        true
    }

    /// Drop straight down, score each cell, then lock and spawn the next
    /// piece. Returns the number of cells dropped, or None without a piece.
    pub fn hard_drop(&mut self) -> Option<u32> {
        let mut piece = self.movable()?;
        let mut cells = 0u32;
        while !self.field.blocked(&piece, Offset::DOWN) {
            piece = piece.shifted(Offset::DOWN);
            cells += 1;
        }
        self.active = Some(piece);
        self.piece_drop_points += self.scoreboard.record_drop(DropKind::Hard, cells);
        self.lock_and_respawn();
        Some(cells)
    }

    /// Lock the piece, clear full lines, score them, spawn the next piece.
    pub(crate) fn lock_and_respawn(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.field.lock(&piece);
        let cleared = self.field.clear_full();
        let clear_points = self.scoreboard.record_clear(cleared);

        debug!(
            "locked {} at {:?}: {} cleared for {} (+{} drop)",
            piece.kind().as_str(),
            piece.origin(),
            cleared,
            clear_points,
            self.piece_drop_points
        );

        self.last_lock = Some(LockEvent {
            kind: Some(piece.kind()),
            lines_cleared: cleared as u32,
            clear_points,
            drop_points: self.piece_drop_points,
        });

        self.spawn();
    }

    /// The falling piece moved as far down as it can go.
    pub fn ghost(&self) -> Option<F::Piece> {
        let mut piece = self.active?;
        while !self.field.blocked(&piece, Offset::DOWN) {
            piece = piece.shifted(Offset::DOWN);
        }
        Some(piece)
    }
}
