//! Cycle behaviour of the uniqueness generators across engines.

use std::collections::HashSet;

use proptest::prelude::*;
use randkit_core::{FiniteDistribution, UniqueOptions};
use randkit_engines::{DefaultEngine, Xoroshiro128Plus, Xorshift64, Xorshift128};
use randkit_unique::{unique_int_generator, unique_string_generator};

#[test]
fn test_cycle_law_for_every_aligned_window() {
    let mut generator = unique_int_generator(0, 10, UniqueOptions::with_percentage(1.0)).unwrap();
    let mut engine = Xoroshiro128Plus::new(1, 2, 3, 4);
    let values: Vec<i64> = (0..1000).map(|_| generator.generate(&mut engine)).collect();

    for window in values.chunks(10) {
        let distinct: HashSet<&i64> = window.iter().collect();
        assert_eq!(distinct.len(), 10);
    }
}

#[test]
fn test_persisted_cache_resumes_cycle() {
    let options = UniqueOptions::with_percentage(1.0);
    let mut first = unique_int_generator(0, 20, options.clone()).unwrap();
    let mut engine = Xorshift128::new(11, 22, 33, 44);
    let head: Vec<i64> = (0..7).map(|_| first.generate(&mut engine)).collect();

    let mut resumed =
        unique_int_generator(0, 20, options.with_initial(first.seen().to_vec())).unwrap();
    let mut resumed_engine = engine.clone();
    let tail: Vec<i64> = (0..13).map(|_| resumed.generate(&mut resumed_engine)).collect();

    let cycle: HashSet<i64> = head.iter().chain(&tail).copied().collect();
    assert_eq!(cycle.len(), 20);
    assert_eq!(resumed.cycle(), 1);

    // The resumed generator tracks the first draw for draw.
    let expected: Vec<i64> = (0..13).map(|_| first.generate(&mut engine)).collect();
    assert_eq!(tail, expected);
}

#[test]
fn test_string_cycle_has_no_repeats() {
    let mut generator =
        unique_string_generator("abc", 3, UniqueOptions::with_percentage(0.9)).unwrap();
    assert_eq!(generator.unique_target(), 24);
    let mut engine = Xorshift64::new(5, 6);
    let cycle: HashSet<String> = (0..24).map(|_| generator.generate(&mut engine)).collect();
    assert_eq!(cycle.len(), 24);
    assert_eq!(generator.cycle(), 1);
}

#[test]
fn test_default_engine_cycle_covers_domain() {
    let mut generator = unique_int_generator(0, 10, UniqueOptions::with_percentage(1.0)).unwrap();
    let mut engine = DefaultEngine::new();

    for _ in 0..5 {
        let window: HashSet<i64> = (0..10).map(|_| generator.generate(&mut engine)).collect();
        assert_eq!(window, (0..10).collect());
    }
    assert_eq!(generator.cycle(), 5);
}

#[test]
fn test_saturated_string_domain_never_rolls_over() {
    let mut generator =
        unique_string_generator("abcdefghij", 40, UniqueOptions::with_percentage(1.0)).unwrap();
    assert_eq!(generator.distribution().domain_size(), u64::MAX);
    assert!(generator.unique_target() > 1_000_000);

    let mut engine = Xorshift128::new(7, 8, 9, 10);
    let values: HashSet<String> = (0..200).map(|_| generator.generate(&mut engine)).collect();
    assert_eq!(values.len(), 200);
    assert!(values.iter().all(|value| value.len() == 40));
    assert_eq!(generator.cycle(), 0);
    assert_eq!(generator.seen().len(), 200);
}

proptest! {
    #[test]
    fn prop_no_repeat_within_cycle(
        seed in any::<[u32; 4]>(),
        min in -1000i64..1000,
        width in 1i64..60,
        percentage in 0.1f64..=1.0,
    ) {
        let options = UniqueOptions::with_percentage(percentage);
        let Ok(mut generator) = unique_int_generator(min, min + width, options) else {
            // Target rounded down to zero.
            return Ok(());
        };
        let mut engine = Xorshift128::new(seed[0], seed[1], seed[2], seed[3] | 1);
        let target = generator.unique_target();

        let mut cycle = HashSet::new();
        for _ in 0..target {
            let value = generator.generate(&mut engine);
            prop_assert!((min..min + width).contains(&value));
            prop_assert!(cycle.insert(value));
        }
        prop_assert_eq!(generator.cycle(), 1);
    }
}
