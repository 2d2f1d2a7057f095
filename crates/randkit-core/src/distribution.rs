//! Distribution abstraction.

use crate::engine::RandomEngine;

/// A stateless mapping from raw engine draws to values.
///
/// Implementations hold only the parameters fixed at construction, so one
/// distribution can be shared read-only and sampled with many engines.
pub trait Distribution {
    /// The value type produced by `sample`.
    type Output;

    /// Draws one value, calling `engine.next()` one or more times.
    fn sample(&self, engine: &mut dyn RandomEngine) -> Self::Output;
}

/// A distribution over a countable set of values.
pub trait FiniteDistribution: Distribution {
    /// Number of distinct values `sample` can produce, saturating at
    /// `u64::MAX`.
    fn domain_size(&self) -> u64;
}
