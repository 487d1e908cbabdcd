//! Seeded piece randomization.
//!
//! [`Bag`] deals kinds in shuffled sets of seven: every consecutive group of
//! seven draws contains each kind once. Shuffles come from [`SimpleRng`], a
//! 32-bit LCG, so one seed reproduces a whole game.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// 32-bit linear congruential generator (Numerical Recipes multiplier and increment)
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed 0 is remapped to 1
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform-ish value in `0..max`
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// In-place Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (usable as a seed to continue the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Shuffled sets of all seven kinds, dealt one at a time
#[derive(Debug, Clone)]
pub struct Bag {
    /// Kinds still pending in the current bag; drawn from the back
    pending: ArrayVec<PieceKind, 7>,
    /// RNG for shuffling; its state carries over between refills
    rng: SimpleRng,
    /// Number of refills performed so far
    refills: u64,
}

impl Bag {
    /// Create an empty bag; the first draw triggers the first shuffle
    pub fn new(seed: u32) -> Self {
        Self {
            pending: ArrayVec::new(),
            rng: SimpleRng::new(seed),
            refills: 0,
        }
    }

    /// Replace the (empty) bag with all seven kinds in random order
    fn refill(&mut self) {
        let mut kinds = PieceKind::ALL;
        self.rng.shuffle(&mut kinds);
        self.pending = ArrayVec::from(kinds);
        self.refills += 1;
    }

    /// Draw the next kind, refilling first if the bag is empty
    pub fn next_kind(&mut self) -> PieceKind {
        loop {
            if let Some(kind) = self.pending.pop() {
                return kind;
            }
            self.refill();
        }
    }

    /// Kinds left in the current bag, in draw order
    pub fn remaining(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.pending.iter().rev().copied()
    }

    pub fn refills(&self) -> u64 {
        self.refills
    }

    /// Get the current RNG state (for restarting with a fresh but reproducible sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}
