//! RNG module - i.i.d. random piece generation
//!
//! Every upcoming piece is an independent uniform draw over the seven kinds
//! (with replacement). The queue buffers a fixed look-ahead and refills it
//! after each draw, so callers always see `NEXT_QUEUE_LEN` upcoming pieces.
//!
//! Also provides a simple LCG so that a seed reproduces a piece sequence.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, NEXT_QUEUE_LEN};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Look-ahead buffer of upcoming pieces.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    pending: ArrayVec<PieceKind, NEXT_QUEUE_LEN>,
    rng: SimpleRng,
    seed: u32,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed, already filled
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            pending: ArrayVec::new(),
            rng: SimpleRng::new(seed),
            seed,
        };
        queue.refill();
        queue
    }

    /// Create a queue whose first draws are `upcoming` (up to the look-ahead
    /// length); random draws from `seed` follow.
    pub fn with_upcoming(seed: u32, upcoming: &[PieceKind]) -> Self {
        let mut queue = Self {
            pending: upcoming.iter().copied().take(NEXT_QUEUE_LEN).collect(),
            rng: SimpleRng::new(seed),
            seed,
        };
        queue.refill();
        queue
    }

    /// Append uniform random kinds until the look-ahead is full.
    pub fn refill(&mut self) {
        while !self.pending.is_full() {
            let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
            self.pending.push(PieceKind::ALL[idx]);
        }
    }

    /// Pop the head and top the buffer back up.
    pub fn take(&mut self) -> PieceKind {
        self.refill();
        let kind = self.pending.remove(0);
        self.refill();
        kind
    }

    /// The next piece `take()` will return
    pub fn peek(&self) -> PieceKind {
        self.pending[0]
    }

    /// All buffered upcoming pieces, head first.
    pub fn preview(&self) -> &[PieceKind] {
        &self.pending
    }

    /// The seed this queue was created with (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Current generator state; seeding a new queue with it continues the stream.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_queue_starts_full() {
        let queue = PieceQueue::new(1);
        assert_eq!(queue.preview().len(), NEXT_QUEUE_LEN);
    }

    #[test]
    fn test_take_returns_head_and_refills() {
        let mut queue = PieceQueue::new(7);
        for _ in 0..50 {
            let head = queue.peek();
            let second = queue.preview()[1];
            assert_eq!(queue.take(), head);
            assert_eq!(queue.peek(), second);
            assert_eq!(queue.preview().len(), NEXT_QUEUE_LEN);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceQueue::new(2024);
        let mut b = PieceQueue::new(2024);
        for _ in 0..64 {
            assert_eq!(a.take(), b.take());
        }
    }

    #[test]
    fn test_upcoming_prefix_is_drawn_first() {
        let mut queue = PieceQueue::with_upcoming(3, &[PieceKind::O, PieceKind::I]);
        assert_eq!(queue.take(), PieceKind::O);
        assert_eq!(queue.take(), PieceKind::I);
        assert_eq!(queue.preview().len(), NEXT_QUEUE_LEN);
    }

    #[test]
    fn test_draws_are_not_a_bag() {
        // A 7-bag never repeats a kind within its first seven draws; i.i.d.
        // draws do so almost always. Over many seeds at least one repeat must show.
        let repeated = (1..50u32).any(|seed| {
            let mut q = PieceQueue::new(seed);
            let mut seen = Vec::new();
            (0..7).any(|_| {
                let k = q.take();
                let dup = seen.contains(&k);
                seen.push(k);
                dup
            })
        });
        assert!(repeated);
    }

    #[test]
    fn test_every_kind_eventually_appears() {
        let mut queue = PieceQueue::new(31337);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let k = queue.take();
            if !seen.contains(&k) {
                seen.push(k);
            }
        }
        assert_eq!(seen.len(), 7);
    }
}
