//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization algorithm: each bag holds one of
//! every piece kind, shuffled. Draws from the bag until empty, then
//! reshuffles.
//!
//! The random source is a trait so tests can script exact sequences; the
//! default is a simple LCG that is deterministic for a given seed.

use tracing::trace;

use crate::types::{PieceKind, BAG_SIZE};

/// Kinds that may not open a game (shape-table indices 3, 4 and 6)
pub const UNFAIR_OPENERS: [PieceKind; 3] = [PieceKind::O, PieceKind::S, PieceKind::Z];

/// Source of uniformly distributed random numbers
pub trait RandomSource {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, max)`; `max` must be non-zero
    fn next_below(&mut self, max: u32) -> u32 {
        // Multiply-shift keeps the high bits, which are the good ones for an LCG.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

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
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Forward-only Fisher-Yates: for each slot but the last, swap in a uniform
/// pick from itself or the slots after it
pub fn shuffle<T>(rng: &mut dyn RandomSource, slice: &mut [T]) {
    let n = slice.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        let j = i + rng.next_below((n - i) as u32) as usize;
        slice.swap(i, j);
    }
}

/// 7-bag piece generator
///
/// Holds one of each kind plus a cursor to the next slot to deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    slots: [PieceKind; BAG_SIZE],
    cursor: usize,
}

impl Bag {
    /// Create a bag in table order with the cursor at the start
    pub fn new() -> Self {
        Self {
            slots: PieceKind::ALL,
            cursor: 0,
        }
    }

    fn fill(&mut self) {
        self.slots = PieceKind::ALL;
    }

    /// Reset to table order and shuffle
    pub fn refill(&mut self, rng: &mut dyn RandomSource) {
        self.fill();
        shuffle(rng, &mut self.slots);
        self.cursor = 0;
    }

    /// Reshuffle until the first slot is a fair opener
    ///
    /// Only slot 0 is constrained; the second piece can be anything.
    pub fn refill_for_opening(&mut self, rng: &mut dyn RandomSource) {
        self.fill();
        loop {
            shuffle(rng, &mut self.slots);
            if !UNFAIR_OPENERS.contains(&self.slots[0]) {
                break;
            }
        }
        self.cursor = 0;
        trace!(opener = ?self.slots[0], "bag shuffled for opening");
    }

    /// Deal the next piece, reshuffling first when the bag is exhausted
    pub fn deal(&mut self, rng: &mut dyn RandomSource) -> PieceKind {
        if self.cursor >= BAG_SIZE {
            self.refill(rng);
        }
        let kind = self.slots[self.cursor];
        self.cursor += 1;
        kind
    }

    /// Index of the next slot to deal
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Kinds in deal order
    pub fn slots(&self) -> &[PieceKind; BAG_SIZE] {
        &self.slots
    }

    /// Kinds not yet dealt from the current bag
    pub fn remaining(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.slots[self.cursor.min(BAG_SIZE)..].iter().copied()
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of raw values, then repeats the last one.
    struct Scripted {
        values: Vec<u32>,
        pos: usize,
    }

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.pos.min(self.values.len() - 1)];
            self.pos += 1;
            v
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for max in 1..20 {
            for _ in 0..50 {
                assert!(rng.next_below(max) < max);
            }
        }
    }

    #[test]
    fn test_shuffle_with_zero_source_is_identity() {
        // next_below always yields 0, so every swap is i <-> i.
        let mut rng = Scripted { values: vec![0], pos: 0 };
        let mut items = [0, 1, 2, 3, 4, 5, 6];
        shuffle(&mut rng, &mut items);
        assert_eq!(items, [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_shuffle_with_max_source_rotates_left() {
        // next_below always yields max-1, so each slot swaps with the last.
        let mut rng = Scripted { values: vec![u32::MAX], pos: 0 };
        let mut items = [0, 1, 2, 3];
        shuffle(&mut rng, &mut items);
        assert_eq!(items, [3, 0, 1, 2]);
    }

    #[test]
    fn test_bag_deals_each_kind_once_per_cycle() {
        let mut rng = SimpleRng::new(99);
        let mut bag = Bag::new();
        bag.refill(&mut rng);

        for _ in 0..5 {
            let mut counts = [0; 7];
            for _ in 0..7 {
                counts[bag.deal(&mut rng).index()] += 1;
            }
            assert_eq!(counts, [1; 7]);
        }
    }

    #[test]
    fn test_unshuffled_bag_deals_in_table_order() {
        let mut rng = SimpleRng::new(5);
        let mut bag = Bag::new();
        assert!(bag.remaining().eq(PieceKind::ALL));
        for kind in PieceKind::ALL {
            assert_eq!(bag.deal(&mut rng), kind);
        }
    }

    #[test]
    fn test_exhausted_bag_reshuffles_before_dealing() {
        let mut rng = SimpleRng::new(3);
        let mut bag = Bag::new();
        bag.refill(&mut rng);
        for _ in 0..7 {
            bag.deal(&mut rng);
        }
        assert_eq!(bag.cursor(), 7);
        assert_eq!(bag.remaining().count(), 0);
        bag.deal(&mut rng);
        assert_eq!(bag.cursor(), 1);
        assert_eq!(bag.remaining().count(), 6);
    }

    #[test]
    fn test_opening_filter_rejects_o_s_z() {
        // First shuffle swaps slot 3 (O) to the front and must be rejected;
        // the second swaps it back, opening with I. `first` makes
        // next_below(7) return 3.
        let first = ((3u64 << 32) / 7 + 1) as u32;
        let mut rng = Scripted {
            values: vec![first, 0, 0, 0, 0, 0, first, 0],
            pos: 0,
        };
        let mut bag = Bag::new();
        bag.refill_for_opening(&mut rng);
        assert_eq!(rng.pos, 12);
        assert_eq!(bag.slots()[0], PieceKind::I);
        assert_eq!(bag.cursor(), 0);

        for seed in 1..200 {
            let mut rng = SimpleRng::new(seed);
            bag.refill_for_opening(&mut rng);
            let opener = bag.slots()[0];
            assert!(matches!(
                opener,
                PieceKind::I | PieceKind::L | PieceKind::J | PieceKind::T
            ));
        }
    }
}
