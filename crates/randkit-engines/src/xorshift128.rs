//! Xorshift128: Marsaglia's four-word xorshift.

use randkit_core::{RandomEngine, RandomError, SeedableEngine};
use serde::{Deserialize, Serialize};

use crate::entropy;

/// Four-word xorshift engine with a period of `2^128 - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift128 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl Xorshift128 {
    /// The largest raw draw.
    pub const MAX: u32 = u32::MAX;

    /// Creates an engine from four explicit seed words.
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32, w: u32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates an engine with every word drawn independently from host
    /// entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(
            entropy::seed_word(),
            entropy::seed_word(),
            entropy::seed_word(),
            entropy::seed_word(),
        )
    }

    /// Creates an engine from up to four seed words, drawing the rest from
    /// host entropy.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::ExhaustedSeed` if more than four words are given.
    pub fn from_seed_words(words: &[u32]) -> Result<Self, RandomError> {
        let [x, y, z, w] = entropy::fill_seed(words)?;
        Ok(Self::new(x, y, z, w))
    }

    /// The current state words.
    #[must_use]
    pub const fn state(&self) -> [u32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl RandomEngine for Xorshift128 {
    fn next(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = (self.w ^ (self.w >> 19)) ^ (t ^ (t >> 8));
        self.w
    }
}

impl SeedableEngine for Xorshift128 {
    const WORDS: usize = 4;

    fn seed(&mut self, words: &[u32]) -> Result<(), RandomError> {
        *self = Self::from_seed_words(words)?;
        Ok(())
    }
}
