//! RNG module - 7-bag random piece generation
//!
//! Each bag holds one of each of the seven kinds, shuffled uniformly.
//! Draws consume the bag from the back until it is empty, then a new bag
//! is generated. Between refills no kind can repeat, which bounds the
//! worst-case drought for any kind to 13 draws.
//!
//! The LCG doubles as the crate's only randomness source so tests can pin
//! a seed and assert exact permutations.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a degenerate sequence
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Shuffled-bag piece generator
#[derive(Debug, Clone)]
pub struct SevenBag {
    /// Pending kinds, consumed from the back
    bag: ArrayVec<PieceKind, 7>,
    /// RNG for shuffling
    rng: SimpleRng,
}

impl SevenBag {
    /// Create a new bag generator with the given seed.
    ///
    /// The bag starts empty; the first draw triggers the first refill.
    pub fn new(seed: u32) -> Self {
        Self {
            bag: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Fill the bag with a fresh uniform permutation of all seven kinds
    fn refill(&mut self) {
        self.bag.clear();
        self.bag.extend(PieceKind::ALL);
        self.rng.shuffle(&mut self.bag);
    }

    /// Draw the next kind, refilling first if the bag is empty
    pub fn next(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill();
        }
        // Refill always leaves seven entries
        self.bag.pop().unwrap_or(PieceKind::I)
    }

    /// Number of kinds left before the next refill
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    #[cfg(test)]
    pub fn pending(&self) -> &[PieceKind] {
        &self.bag
    }
}

impl Default for SevenBag {
    fn default() -> Self {
        Self::new(1)
    }
}
