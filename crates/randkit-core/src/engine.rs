//! Random engine abstraction.
//!
//! An engine owns the state of exactly one pseudo-random sequence. Callers
//! construct engines explicitly and thread them through every call; there is
//! no process-wide engine.

use crate::error::RandomError;

/// A bit generator producing raw draws in `[0, max]`.
///
/// Engines are single-owner: sharing one across threads requires an external
/// lock, the same way any other `&mut` state would.
pub trait RandomEngine: Send {
    /// Advances the state and returns the next raw draw in `[0, max]`.
    fn next(&mut self) -> u32;

    /// The largest value `next` can return.
    fn max(&self) -> u32 {
        u32::MAX
    }

    /// Size of the raw output domain. Always `max + 1`.
    fn range(&self) -> u64 {
        u64::from(self.max()) + 1
    }
}

/// An engine whose state can be reset from explicit 32-bit words.
pub trait SeedableEngine: RandomEngine {
    /// Number of 32-bit state words.
    const WORDS: usize;

    /// Resets the state.
    ///
    /// An empty slice draws every word from host entropy; a shorter slice
    /// fills the remaining words from host entropy, one independent draw per
    /// word.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::ExhaustedSeed` if more than `WORDS` words are
    /// supplied.
    fn seed(&mut self, words: &[u32]) -> Result<(), RandomError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts upwards, wrapping at `max`.
    struct Counter {
        value: u32,
        max: u32,
    }

    impl RandomEngine for Counter {
        fn next(&mut self) -> u32 {
            let current = self.value;
            self.value = if current == self.max { 0 } else { current + 1 };
            current
        }

        fn max(&self) -> u32 {
            self.max
        }
    }

    #[test]
    fn test_range_is_max_plus_one() {
        let engine = Counter { value: 0, max: 9 };
        assert_eq!(engine.range(), 10);
    }

    #[test]
    fn test_default_max_covers_full_word() {
        struct Zero;
        impl RandomEngine for Zero {
            fn next(&mut self) -> u32 {
                0
            }
        }

        assert_eq!(Zero.max(), u32::MAX);
        assert_eq!(Zero.range(), 1 << 32);
    }

    #[test]
    fn test_engine_usable_as_trait_object() {
        let mut engine = Counter { value: 8, max: 9 };
        let dyn_engine: &mut dyn RandomEngine = &mut engine;
        assert_eq!(dyn_engine.next(), 8);
        assert_eq!(dyn_engine.next(), 9);
        assert_eq!(dyn_engine.next(), 0);
    }
}
