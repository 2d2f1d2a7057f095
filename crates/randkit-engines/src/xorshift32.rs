//! Xorshift32: Marsaglia's single-word xorshift with shifts 13/17/5.

use randkit_core::{RandomEngine, RandomError, SeedableEngine};
use serde::{Deserialize, Serialize};

use crate::entropy;

/// Single-word xorshift engine.
///
/// A zero state is a fixed point and yields zero forever; seed with any
/// non-zero word for a useful sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift32 {
    x: u32,
}

impl Xorshift32 {
    /// The largest raw draw.
    pub const MAX: u32 = u32::MAX;

    /// Creates an engine from an explicit seed word.
    #[must_use]
    pub const fn new(x: u32) -> Self {
        Self { x }
    }

    /// Creates an engine seeded from host entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(entropy::seed_word())
    }

    /// Creates an engine from up to one seed word, drawing the rest from host
    /// entropy.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::ExhaustedSeed` if more than one word is given.
    pub fn from_seed_words(words: &[u32]) -> Result<Self, RandomError> {
        let [x] = entropy::fill_seed(words)?;
        Ok(Self::new(x))
    }

    /// The current state word.
    #[must_use]
    pub const fn state(&self) -> [u32; 1] {
        [self.x]
    }
}

impl RandomEngine for Xorshift32 {
    fn next(&mut self) -> u32 {
        let mut x = self.x;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.x = x;
        x
    }
}

impl SeedableEngine for Xorshift32 {
    const WORDS: usize = 1;

    fn seed(&mut self, words: &[u32]) -> Result<(), RandomError> {
        *self = Self::from_seed_words(words)?;
        Ok(())
    }
}
