//! Pass-through engine backed by the host's default random source.

use rand::Rng;
use randkit_core::RandomEngine;

/// Non-reproducible engine delegating to the thread-local host RNG.
///
/// It has no seed and cannot be reseeded; use it where reproducibility does
/// not matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEngine;

impl DefaultEngine {
    /// The largest raw draw.
    pub const MAX: u32 = u32::MAX;

    /// Creates the engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RandomEngine for DefaultEngine {
    fn next(&mut self) -> u32 {
        rand::rng().random_range(0..=Self::MAX)
    }
}
