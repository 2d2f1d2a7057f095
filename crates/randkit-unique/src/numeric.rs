//! Unique integer generators.

use randkit_core::{Inclusivity, RandomError, UniqueOptions};
use randkit_distributions::UniformInt;

use crate::generator::{FastUniqueGenerator, UniqueGenerator};

/// Unique integers drawn uniformly from `[min, max)`.
pub type UniqueIntGenerator = UniqueGenerator<UniformInt>;

/// Fast variant of `UniqueIntGenerator`.
pub type FastUniqueIntGenerator = FastUniqueGenerator<UniformInt>;

/// Builds a generator of unique integers in `[min, max)`.
///
/// # Errors
///
/// Returns `RandomError::InvalidRange` if `max <= min` and
/// `RandomError::InvalidDomain` if the uniqueness target is zero.
pub fn unique_int_generator(
    min: i64,
    max: i64,
    options: UniqueOptions<i64>,
) -> Result<UniqueIntGenerator, RandomError> {
    UniqueGenerator::new(UniformInt::new(min, max, Inclusivity::default())?, options)
}

/// Builds the fast variant of `unique_int_generator`.
///
/// # Errors
///
/// Same as `unique_int_generator`.
pub fn fast_unique_int_generator(
    min: i64,
    max: i64,
    options: UniqueOptions<i64>,
) -> Result<FastUniqueIntGenerator, RandomError> {
    FastUniqueGenerator::new(UniformInt::new(min, max, Inclusivity::default())?, options)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use randkit_engines::Xorshift128;

    #[test]
    fn test_every_window_is_distinct() {
        let mut generator = unique_int_generator(0, 10, UniqueOptions::with_percentage(1.0))
            .unwrap();
        let mut engine = Xorshift128::new(1, 2, 3, 4);

        for window in 0..50 {
            let values: HashSet<i64> = (0..10).map(|_| generator.generate(&mut engine)).collect();
            assert_eq!(values.len(), 10, "window {window}");
            assert!(values.iter().all(|value| (0..10).contains(value)));
        }
        assert_eq!(generator.cycle(), 50);
    }

    #[test]
    fn test_default_percentage_cycles_early() {
        let mut generator = unique_int_generator(0, 100, UniqueOptions::default()).unwrap();
        assert_eq!(generator.unique_target(), 99);
        let mut engine = Xorshift128::new(5, 6, 7, 8);
        for _ in 0..99 {
            generator.generate(&mut engine);
        }
        assert_eq!(generator.cycle(), 1);
    }

    #[test]
    fn test_rejects_non_positive_percentage() {
        let error = unique_int_generator(0, 10, UniqueOptions::with_percentage(0.0)).unwrap_err();
        assert_eq!(
            error,
            RandomError::InvalidDomain {
                domain_size: 10,
                unique_percentage: 0.0
            }
        );
    }

    #[test]
    fn test_rejects_empty_range() {
        assert!(matches!(
            unique_int_generator(3, 3, UniqueOptions::default()),
            Err(RandomError::InvalidRange { .. })
        ));
        assert!(matches!(
            fast_unique_int_generator(4, 1, UniqueOptions::default()),
            Err(RandomError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_fast_variant_stays_in_cached_set() {
        let mut generator =
            fast_unique_int_generator(-5, 5, UniqueOptions::with_percentage(1.0)).unwrap();
        let mut engine = Xorshift128::new(9, 8, 7, 6);
        let first: HashSet<i64> = (0..10).map(|_| generator.generate(&mut engine)).collect();
        assert_eq!(first, (-5..5).collect());
        for _ in 0..1000 {
            assert!((-5..5).contains(&generator.generate(&mut engine)));
        }
    }
}
