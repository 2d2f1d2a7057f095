//! Xoroshiro128+ emulated with 32-bit words.
//!
//! The two 64-bit lanes are held as `(x, y)` and `(z, w)` halves. The
//! rotate by 23 spans both halves of a lane, and the output sum carries from
//! the low half into the high half by comparison rather than by widening.
//!
//! The carry test reads the low word `x` as unsigned on the first step after
//! seeding and as a signed 32-bit value on every later step, so once the
//! engine has stepped a low word with its top bit set never carries. Output
//! is bit-compatible with the established sequences for this engine.

use randkit_core::{RandomEngine, RandomError, SeedableEngine};
use serde::{Deserialize, Serialize};

use crate::entropy;

/// Xoroshiro128+ engine returning the low-order word of each lane sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoroshiro128Plus {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
    /// Whether `next` has run since seeding; switches the carry test to a
    /// signed read of `x`.
    #[serde(default)]
    stepped: bool,
}

impl Xoroshiro128Plus {
    /// The largest raw draw.
    pub const MAX: u32 = u32::MAX;

    /// Creates an engine from four explicit seed words.
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32, w: u32) -> Self {
        Self {
            x,
            y,
            z,
            w,
            stepped: false,
        }
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

impl RandomEngine for Xoroshiro128Plus {
    #[allow(clippy::cast_possible_wrap)]
    fn next(&mut self) -> u32 {
        let z = self.z ^ self.x;
        let w = self.w ^ self.y;
        let low = if self.stepped {
            i64::from(self.x as i32)
        } else {
            i64::from(self.x)
        };
        let carry = u32::from(z != 0 && low >= i64::from(z.wrapping_neg()));
        let sum = w.wrapping_add(self.y).wrapping_add(carry);

        self.x = ((self.y << 23) | (self.x >> 9)) ^ z ^ (z << 14);
        self.y = ((self.x << 23) | (self.y >> 9)) ^ w ^ ((w << 14) | (z >> 18));
        self.z = (w << 4) | (z >> 28);
        self.w = (z << 4) | (w >> 28);
        self.stepped = true;

        sum
    }
}

impl SeedableEngine for Xoroshiro128Plus {
    const WORDS: usize = 4;

    fn seed(&mut self, words: &[u32]) -> Result<(), RandomError> {
        *self = Self::from_seed_words(words)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(engine: &mut Xoroshiro128Plus, count: usize) -> Vec<u32> {
        (0..count).map(|_| engine.next()).collect()
    }

    #[test]
    fn test_golden_sequence() {
        let mut engine = Xoroshiro128Plus::new(1, 2, 3, 4);
        assert_eq!(
            draw(&mut engine, 20),
            vec![
                8,
                33_751_084,
                3_490_252_588,
                2_703_898_790,
                2_598_930_200,
                1_010_470_692,
                1_215_747_541,
                4_131_398_812,
                2_067_615_892,
                1_737_477_199,
                3_081_639_847,
                1_819_181_689,
                2_215_471_945,
                596_818_995,
                490_195_796,
                3_989_796_458,
                1_626_775_044,
                2_950_448_652,
                221_819_711,
                921_257_108,
            ]
        );
    }

    #[test]
    fn test_first_step_reads_high_low_word_unsigned() {
        // x = 0x8000_0001 carries on the first step only because x is still
        // unsigned: z = 0xFFFF_FFFE, so the carry needs x >= 2.
        let mut engine = Xoroshiro128Plus::new(0x8000_0001, 2, 0x7FFF_FFFF, 9);
        assert_eq!(
            draw(&mut engine, 6),
            vec![14, 8, 3_943_167_590, 1_215_429_649, 1_404_916_488, 2_571_465_679]
        );
    }

    #[test]
    fn test_snapshot_keeps_signed_carry_mode() {
        let mut engine = Xoroshiro128Plus::new(1, 2, 3, 4);
        draw(&mut engine, 5);
        let snapshot = serde_json::to_string(&engine).unwrap();
        let mut restored: Xoroshiro128Plus = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(restored.next(), 1_010_470_692);
    }

    #[test]
    fn test_reseed_restores_unsigned_first_step() {
        let mut engine = Xoroshiro128Plus::new(1, 2, 3, 4);
        draw(&mut engine, 3);
        engine.seed(&[0x8000_0001, 2, 0x7FFF_FFFF, 9]).unwrap();
        assert_eq!(engine.next(), 14);
    }

    #[test]
    fn test_carry_applies_when_low_half_overflows() {
        // z = x ^ z_seed = 0xFFFF_FFFF, and x = 1 >= 2^32 - z = 1.
        let mut engine = Xoroshiro128Plus::new(1, 0, 0xFFFF_FFFE, 5);
        assert_eq!(engine.next(), 6);
    }

    #[test]
    fn test_no_carry_for_zero_low_sum_term() {
        let mut engine = Xoroshiro128Plus::new(7, 0, 7, 5);
        assert_eq!(engine.next(), 5);
    }

    #[test]
    fn test_from_seed_words_matches_new() {
        let engine = Xoroshiro128Plus::from_seed_words(&[1, 2, 3, 4]).unwrap();
        assert_eq!(engine, Xoroshiro128Plus::new(1, 2, 3, 4));
    }
}
