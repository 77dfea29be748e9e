//! Scoring module - line-clear points, drop points, leveling and gravity speed
//!
//! Rules:
//! - Clearing `n` lines (or layers) at once awards `LINE_SCORES[n] * level`;
//!   clears larger than four use the four-line value.
//! - Every cell a piece is pushed down by the player (soft or hard drop) is
//!   worth a fixed number of points.
//! - Level is `lines / 10 + 1` and only ever rises.
//! - Gravity interval is `1000ms * 0.8^(level-1)`, floored at 50ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_FLOOR_MS, DROP_SPEEDUP, HARD_DROP_POINTS, LINES_PER_LEVEL,
    LINE_SCORES, SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows at `level` (1-based)
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// How a piece was pushed down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    Soft,
    Hard,
}

/// Points for pushing a piece down `cells` rows
pub fn drop_score(kind: DropKind, cells: u32) -> u32 {
    let per_cell = match kind {
        DropKind::Soft => SOFT_DROP_POINTS,
        DropKind::Hard => HARD_DROP_POINTS,
    };
    cells.saturating_mul(per_cell)
}

/// Level reached after clearing `lines` in total
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds at `level`
pub fn drop_interval_ms(level: u32) -> f64 {
    let steps = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    (BASE_DROP_MS * DROP_SPEEDUP.powi(steps)).max(DROP_INTERVAL_FLOOR_MS)
}

/// Running score, line count and level of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    lines: u32,
    level: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> f64 {
        drop_interval_ms(self.level)
    }

    /// Record a clear of `cleared` lines. Points use the level before the new
    /// lines are counted. Returns the points awarded.
    pub fn record_clear(&mut self, cleared: usize) -> u32 {
        if cleared == 0 {
            return 0;
        }
        let points = line_clear_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);
        self.level = self.level.max(level_for_lines(self.lines));
        points
    }

    /// Record a drop of `cells` rows. Returns the points awarded.
    pub fn record_drop(&mut self, kind: DropKind, cells: u32) -> u32 {
        let points = drop_score(kind, cells);
        self.score = self.score.saturating_add(points);
        points
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scores() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(2, 1), 300);
        assert_eq!(line_clear_score(3, 2), 1000);
        assert_eq!(line_clear_score(4, 3), 2400);
    }

    #[test]
    fn test_oversized_clear_uses_four_line_value() {
        assert_eq!(line_clear_score(6, 1), 800);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(drop_score(DropKind::Soft, 1), 5);
        assert_eq!(drop_score(DropKind::Hard, 6), 30);
        assert_eq!(drop_score(DropKind::Hard, 0), 0);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
    }

    #[test]
    fn test_drop_interval_curve() {
        assert_eq!(drop_interval_ms(1), 1000.0);
        assert!((drop_interval_ms(6) - 327.68).abs() < 1e-9);
        assert_eq!(drop_interval_ms(40), 50.0);
        assert_eq!(drop_interval_ms(u32::MAX), 50.0);
    }

    #[test]
    fn test_clear_uses_level_before_counting() {
        let mut board = Scoreboard::new();
        for _ in 0..9 {
            board.record_clear(1);
        }
        assert_eq!(board.level(), 1);
        // Lines 10..13 cross into level 2, but are scored at level 1.
        assert_eq!(board.record_clear(4), 800);
        assert_eq!(board.level(), 2);
        assert_eq!(board.lines(), 13);
        assert_eq!(board.score(), 900 + 800);
    }

    #[test]
    fn test_drops_accumulate() {
        let mut board = Scoreboard::new();
        board.record_drop(DropKind::Soft, 1);
        board.record_drop(DropKind::Hard, 18);
        assert_eq!(board.score(), 95);
        assert_eq!(board.lines(), 0);
    }
}
