//! Test engines: scripted `RandomEngine` implementations for tests.

use randkit_core::RandomEngine;

/// An engine that returns the same raw draw forever.
#[derive(Debug, Clone, Copy)]
pub struct ConstantEngine(pub u32);

impl RandomEngine for ConstantEngine {
    fn next(&mut self) -> u32 {
        self.0
    }
}

/// An engine that returns raw draws from a predetermined sequence. Panics if
/// the sequence is exhausted, unless built with `cycling`.
///
/// The reported `max` defaults to `u32::MAX` and can be narrowed to test
/// mappings against small raw domains.
#[derive(Debug, Clone)]
pub struct SequenceEngine {
    values: Vec<u32>,
    index: usize,
    max: u32,
    cycle: bool,
}

impl SequenceEngine {
    /// Create a new `SequenceEngine` with the given raw draws.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            index: 0,
            max: u32::MAX,
            cycle: false,
        }
    }

    /// Create a `SequenceEngine` that restarts from the first value once the
    /// sequence is exhausted.
    #[must_use]
    pub fn cycling(values: Vec<u32>) -> Self {
        Self {
            cycle: true,
            ..Self::new(values)
        }
    }

    /// Narrow the reported `max`.
    ///
    /// # Panics
    ///
    /// Panics if a scripted value exceeds `max`.
    #[must_use]
    pub fn with_max(self, max: u32) -> Self {
        assert!(
            self.values.iter().all(|value| *value <= max),
            "scripted value exceeds max {max}"
        );
        Self { max, ..self }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomEngine for SequenceEngine {
    fn next(&mut self) -> u32 {
        let position = if self.cycle {
            self.index % self.values.len()
        } else {
            self.index
        };
        let value = self.values[position];
        self.index += 1;
        value
    }

    fn max(&self) -> u32 {
        self.max
    }
}
