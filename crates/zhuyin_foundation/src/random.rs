//! The single substitutable source of randomness.
//!
//! Sampling vocabulary and shuffling options are the only non-deterministic
//! steps in the game. Both go through [`RandomSource`] so play can use a
//! seeded `ChaCha8` stream while tests script the exact draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..bound`.
    ///
    /// A `bound` of zero returns zero; callers never index with it.
    fn below(&mut self, bound: usize) -> usize;
}

/// Shuffles `items` in place with Fisher-Yates.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

// =============================================================================
// Seeded Random
// =============================================================================

/// Deterministic `ChaCha8` stream. Two sources with the same seed produce
/// the same draws on every platform.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Creates a source from an explicit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source from a fresh OS-derived seed.
    ///
    /// The seed is kept so a session can be replayed with [`Self::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().r#gen())
    }

    /// Returns the seed this source was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

// =============================================================================
// Scripted Random
// =============================================================================

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested bound, so a script
/// of all zeros always picks the first candidate and leaves every shuffle
/// as a fixed rotation.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Creates a source that replays `values`.
    #[must_use]
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Creates a source that always draws zero.
    #[must_use]
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }

    /// Returns the number of draws made so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 || self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}
