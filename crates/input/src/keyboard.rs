//! Held-key tracking.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a control counts as held until it is released or until no press (or
//! auto-repeat) for it has arrived within the timeout. Once any release event
//! is seen the terminal is known to report releases and the timeout is
//! switched off.

use std::time::{Duration, Instant};

use crossterm::event::KeyEventKind;

use crate::types::{Control, HeldKeys};

// Shorter than the session's 150ms repeat window, so a single tap on a
// terminal without releases is applied exactly once.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 120;

const SLOTS: usize = Control::ALL.len();

#[derive(Debug, Clone)]
pub struct KeyboardState {
    /// Last press or repeat per control, indexed like `Control::ALL`
    last_seen: [Option<Instant>; SLOTS],
    release_timeout: Duration,
    reports_releases: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::with_release_timeout(Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS))
    }

    pub fn with_release_timeout(release_timeout: Duration) -> Self {
        Self {
            last_seen: [None; SLOTS],
            release_timeout,
            reports_releases: false,
        }
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    /// Whether a release event has ever been observed
    pub fn reports_releases(&self) -> bool {
        self.reports_releases
    }

    fn slot(control: Control) -> usize {
        Control::ALL
            .iter()
            .position(|c| *c == control)
            .unwrap_or(0)
    }

    pub fn press(&mut self, control: Control, now: Instant) {
        self.last_seen[Self::slot(control)] = Some(now);
    }

    pub fn release(&mut self, control: Control) {
        self.reports_releases = true;
        self.last_seen[Self::slot(control)] = None;
    }

    /// Feed one mapped key event.
    pub fn handle(&mut self, control: Control, kind: KeyEventKind, now: Instant) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(control, now),
            KeyEventKind::Release => self.release(control),
        }
    }

    /// Drop every held control (on pause, mode switch or focus loss).
    pub fn clear(&mut self) {
        self.last_seen = [None; SLOTS];
    }

    /// Controls held at `now`, expiring stale ones first.
    pub fn held(&mut self, now: Instant) -> HeldKeys {
        if !self.reports_releases {
            let timeout = self.release_timeout;
            for slot in self.last_seen.iter_mut() {
                if let Some(at) = *slot {
                    if now.saturating_duration_since(at) > timeout {
                        *slot = None;
                    }
                }
            }
        }

        Control::ALL
            .iter()
            .zip(self.last_seen.iter())
            .filter(|(_, seen)| seen.is_some())
            .map(|(control, _)| *control)
            .collect()
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}
