//! Multi-board mode: four independent 2D sessions side by side.
//!
//! Every board receives the same elapsed time and key snapshot, but each one
//! keeps its own queue, gravity accumulator and input gate.

use log::info;

use crate::session::{Session2d, SessionState};
use crate::types::{HeldKeys, MULTI_BOARD_COUNT};

#[derive(Debug, Clone)]
pub struct MultiSession {
    boards: Vec<Session2d>,
}

impl MultiSession {
    /// `MULTI_BOARD_COUNT` standard boards, seeded `seed`, `seed + 1`, ...
    pub fn new(seed: u32) -> Self {
        Self::with_count(seed, MULTI_BOARD_COUNT)
    }

    pub fn with_count(seed: u32, count: usize) -> Self {
        let boards = (0..count)
            .map(|i| Session2d::standard(seed.wrapping_add(i as u32)))
            .collect();
        Self { boards }
    }

    /// Reset every board, then start them all.
    pub fn start(&mut self) {
        info!("multi start ({} boards)", self.boards.len());
        for board in &mut self.boards {
            board.reset();
            board.start();
        }
    }

    /// Toggle pause on every board.
    pub fn pause(&mut self) {
        for board in &mut self.boards {
            board.pause();
        }
    }

    pub fn reset(&mut self) {
        for board in &mut self.boards {
            board.reset();
        }
    }

    pub fn update(&mut self, elapsed_ms: f64, held: HeldKeys) {
        for board in &mut self.boards {
            board.update(elapsed_ms, held);
        }
    }

    /// Sum of all board scores
    pub fn total_score(&self) -> u32 {
        self.boards.iter().fold(0u32, |acc, b| acc.saturating_add(b.score()))
    }

    /// Boards still in play (not Over)
    pub fn active_count(&self) -> usize {
        self.boards.iter().filter(|b| !b.is_over()).count()
    }

    pub fn all_over(&self) -> bool {
        self.boards.iter().all(|b| b.is_over())
    }

    /// Running if any board runs, otherwise Paused if any is paused, otherwise
    /// Over when every board is, else Idle.
    pub fn state(&self) -> SessionState {
        let any = |s: SessionState| self.boards.iter().any(|b| b.state() == s);
        if any(SessionState::Running) {
            SessionState::Running
        } else if any(SessionState::Paused) {
            SessionState::Paused
        } else if self.all_over() {
            SessionState::Over
        } else {
            SessionState::Idle
        }
    }

    pub fn boards(&self) -> &[Session2d] {
        &self.boards
    }

    pub fn boards_mut(&mut self) -> &mut [Session2d] {
        &mut self.boards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Control;

    #[test]
    fn four_idle_boards() {
        let multi = MultiSession::new(10);
        assert_eq!(multi.boards().len(), 4);
        assert_eq!(multi.active_count(), 4);
        assert!(!multi.all_over());
        assert_eq!(multi.state(), SessionState::Idle);
    }

    #[test]
    fn start_resets_boards() {
        let mut multi = MultiSession::new(10);
        multi.boards_mut()[2].hard_drop();
        assert!(multi.total_score() > 0);

        multi.start();
        assert_eq!(multi.total_score(), 0);
        assert!(multi.boards().iter().all(|b| b.is_running()));
    }

    #[test]
    fn same_keys_reach_every_board() {
        let mut multi = MultiSession::new(3);
        multi.start();
        let keys: HeldKeys = [Control::Drop].into_iter().collect();
        multi.update(16.0, keys);
        for board in multi.boards() {
            let event = board.last_lock().unwrap();
            assert_eq!(event.lines_cleared, 0);
            assert!(event.drop_points > 0);
            assert_eq!(board.score(), event.drop_points);
        }
    }

    #[test]
    fn pause_toggles_all() {
        let mut multi = MultiSession::new(1);
        multi.start();
        multi.pause();
        assert_eq!(multi.state(), SessionState::Paused);
        multi.pause();
        assert_eq!(multi.state(), SessionState::Running);
    }

    #[test]
    fn held_drop_tops_out_every_board() {
        let mut multi = MultiSession::new(21);
        multi.start();
        let keys: HeldKeys = [Control::Drop].into_iter().collect();
        let mut frames = 0;
        while !multi.all_over() && frames < 2000 {
            multi.update(1000.0, keys);
            frames += 1;
        }
        assert!(multi.all_over());
        assert_eq!(multi.active_count(), 0);
        assert_eq!(multi.state(), SessionState::Over);

        let total = multi.total_score();
        multi.update(1000.0, keys);
        assert_eq!(multi.total_score(), total);

        multi.reset();
        assert_eq!(multi.active_count(), 4);
        assert_eq!(multi.total_score(), 0);
    }
}
