//! Status reporting for the host UI.
//!
//! The host never gets pushed updates. It owns a [`StatusPoller`] and asks it
//! every frame; the poller rebuilds its [`StatusReport`] from a read-only
//! borrow of the [`Arcade`] at most once per `STATUS_POLL_MS`.

use serde::Serialize;

use crate::arcade::Arcade;
use crate::field::Field;
use crate::session::{Session, SessionState};
use crate::types::STATUS_POLL_MS;

/// Snapshot of one session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStatus {
    pub state: SessionState,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
    pub next: Vec<&'static str>,
}

impl<F: Field> From<&Session<F>> for SessionStatus {
    fn from(session: &Session<F>) -> Self {
        Self {
            state: session.state(),
            score: session.score(),
            level: session.level(),
            lines: session.lines(),
            game_over: session.is_over(),
            next: session.next_pieces().iter().map(|k| k.as_str()).collect(),
        }
    }
}

/// Snapshot of the whole arcade, aggregated over its boards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub mode: &'static str,
    pub state: SessionState,
    /// Sum over boards
    pub score: u32,
    /// Highest level over boards
    pub level: u32,
    /// Sum over boards
    pub lines: u32,
    /// True once every board is over
    pub game_over: bool,
    /// Boards not yet over
    pub active_boards: usize,
    pub boards: Vec<SessionStatus>,
}

impl StatusReport {
    pub fn from_boards(mode: &'static str, state: SessionState, boards: Vec<SessionStatus>) -> Self {
        Self {
            mode,
            state,
            score: boards.iter().fold(0u32, |acc, b| acc.saturating_add(b.score)),
            level: boards.iter().map(|b| b.level).max().unwrap_or(1),
            lines: boards.iter().fold(0u32, |acc, b| acc.saturating_add(b.lines)),
            game_over: !boards.is_empty() && boards.iter().all(|b| b.game_over),
            active_boards: boards.iter().filter(|b| !b.game_over).count(),
            boards,
        }
    }
}

/// Rate-limited, read-only status reader
#[derive(Debug, Clone)]
pub struct StatusPoller {
    interval_ms: f64,
    since_refresh_ms: f64,
    latest: Option<StatusReport>,
}

impl StatusPoller {
    pub fn new() -> Self {
        Self::with_interval(STATUS_POLL_MS as f64)
    }

    pub fn with_interval(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            since_refresh_ms: 0.0,
            latest: None,
        }
    }

    /// Advance by `elapsed_ms`; refresh from `arcade` if the interval has
    /// passed or nothing was read yet. Returns the report only when refreshed.
    pub fn poll(&mut self, elapsed_ms: f64, arcade: &Arcade) -> Option<&StatusReport> {
        self.since_refresh_ms += elapsed_ms.max(0.0);
        if self.latest.is_some() && self.since_refresh_ms < self.interval_ms {
            return None;
        }
        self.since_refresh_ms = 0.0;
        self.latest = Some(arcade.report());
        self.latest.as_ref()
    }

    /// Refresh now regardless of the interval.
    pub fn refresh(&mut self, arcade: &Arcade) -> &StatusReport {
        self.since_refresh_ms = 0.0;
        self.latest.insert(arcade.report())
    }

    /// Last report read, if any
    pub fn latest(&self) -> Option<&StatusReport> {
        self.latest.as_ref()
    }
}

impl Default for StatusPoller {
    fn default() -> Self {
        Self::new()
    }
}
