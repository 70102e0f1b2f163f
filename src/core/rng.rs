//! Deterministic randomness for piece sequencing
//!
//! A small seedable generator keeps games reproducible: the same seed always
//! yields the same piece stream, which the tests and benchmarks rely on.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// 32-bit linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct Lcg32 {
    state: u32,
}

impl Lcg32 {
    /// Create a generator from a seed.
    pub fn new(seed: u32) -> Self {
        // Avoid the all-zero fixed point of a zero seed
        let state = if seed == 0 { 0x4d595df4 } else { seed };
        Lcg32 { state }
    }

    /// Next raw 32-bit value
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform value in `[0, max)`. `max` must be non-zero.
    ///
    /// Only the high 16 bits feed the reduction; the low bits of an LCG
    /// cycle with short periods and would skew small ranges.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max
    }

    /// Unbiased Fisher-Yates shuffle of `slice` in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Shuffled seven-bag piece sequencer.
///
/// The bag starts empty and refills with a fresh permutation of all seven
/// kinds whenever it runs dry, so no kind repeats until a whole batch has
/// been consumed. Draws pop from the end of the bag.
#[derive(Debug, Clone)]
pub struct PieceBag {
    rng: Lcg32,
    bag: ArrayVec<PieceKind, 7>,
}

impl PieceBag {
    /// Create an empty bag; the first draw triggers the first refill.
    pub fn new(seed: u32) -> Self {
        PieceBag {
            rng: Lcg32::new(seed),
            bag: ArrayVec::new(),
        }
    }

    /// Remove and return the next piece kind, refilling first if needed.
    pub fn draw(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill();
        }

        let top = self.bag.len() - 1;
        let kind = self.bag[top];
        self.bag.truncate(top);
        kind
    }

    /// The kind the next `draw` will return, without consuming it.
    pub fn peek(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill();
        }
        self.bag[self.bag.len() - 1]
    }

    /// Pieces left in the current batch
    pub fn pending(&self) -> usize {
        self.bag.len()
    }

    fn refill(&mut self) {
        self.bag.clear();
        for kind in PieceKind::ALL {
            self.bag.push(kind);
        }
        self.rng.shuffle(&mut self.bag);
    }
}
