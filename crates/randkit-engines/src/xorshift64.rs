//! Xorshift64: a two-word xorshift carried out on 32-bit halves.

use randkit_core::{RandomEngine, RandomError, SeedableEngine};
use serde::{Deserialize, Serialize};

use crate::entropy;

/// Two-word xorshift engine.
///
/// The second seed word is stored negated (two's complement), so
/// `Xorshift64::new(x, 0)` is the only seed with a zero high word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64 {
    x: u32,
    y: u32,
}

impl Xorshift64 {
    /// The largest raw draw.
    pub const MAX: u32 = u32::MAX;

    /// Creates an engine from two explicit seed words.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self {
            x,
            y: y.wrapping_neg(),
        }
    }

    /// Creates an engine with both words drawn independently from host
    /// entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(entropy::seed_word(), entropy::seed_word())
    }

    /// Creates an engine from up to two seed words, drawing the rest from host
    /// entropy.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::ExhaustedSeed` if more than two words are given.
    pub fn from_seed_words(words: &[u32]) -> Result<Self, RandomError> {
        let [x, y] = entropy::fill_seed(words)?;
        Ok(Self::new(x, y))
    }

    /// The current state words, high word as stored.
    #[must_use]
    pub const fn state(&self) -> [u32; 2] {
        [self.x, self.y]
    }
}

impl RandomEngine for Xorshift64 {
    fn next(&mut self) -> u32 {
        self.x ^= self.x << 13;
        self.y ^= (self.y << 13) | (self.x >> 19);
        self.x ^= (self.x >> 7) | (self.y << 25);
        self.y ^= self.y >> 7;
        self.x ^= self.x << 17;
        self.y ^= (self.y << 17) | (self.x >> 15);
        self.x
    }
}

impl SeedableEngine for Xorshift64 {
    const WORDS: usize = 2;

    fn seed(&mut self, words: &[u32]) -> Result<(), RandomError> {
        *self = Self::from_seed_words(words)?;
        Ok(())
    }
}
