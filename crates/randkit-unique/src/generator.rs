//! Generic uniqueness generators over any finite distribution.

use std::hash::Hash;

use randkit_core::{FiniteDistribution, RandomEngine, RandomError, UniqueOptions};
use tracing::trace;

use crate::seen::SeenSet;

/// Computes the cycle length `floor(domain_size * min(unique_percentage, 1))`.
///
/// # Errors
///
/// Returns `RandomError::InvalidDomain` if the percentage is not positive or
/// the target rounds down to zero.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn unique_target(domain_size: u64, unique_percentage: f64) -> Result<usize, RandomError> {
    let invalid = RandomError::InvalidDomain {
        domain_size,
        unique_percentage,
    };
    if unique_percentage.is_nan() || unique_percentage <= 0.0 {
        return Err(invalid);
    }

    let target = (domain_size as f64 * unique_percentage.min(1.0)).floor();
    if target < 1.0 {
        return Err(invalid);
    }
    Ok(target as usize)
}

/// Emits values from `D` without repeats inside a cycle.
///
/// Each call redraws until the candidate is not cached, caches it, and
/// clears the cache once it holds `unique_target` values.
#[derive(Debug, Clone)]
pub struct UniqueGenerator<D>
where
    D: FiniteDistribution,
    D::Output: Eq + Hash + Clone,
{
    distribution: D,
    seen: SeenSet<D::Output>,
    unique_target: usize,
    cycle: u64,
}

impl<D> UniqueGenerator<D>
where
    D: FiniteDistribution,
    D::Output: Eq + Hash + Clone,
{
    /// Wraps `distribution`, preloading the cache with `options.initial`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidDomain` if the uniqueness target is zero.
    pub fn new(distribution: D, options: UniqueOptions<D::Output>) -> Result<Self, RandomError> {
        let unique_target = unique_target(distribution.domain_size(), options.unique_percentage)?;
        Ok(Self {
            distribution,
            seen: options.initial.into_iter().collect(),
            unique_target,
            cycle: 0,
        })
    }

    /// Draws the next value not yet emitted in the current cycle.
    pub fn generate(&mut self, engine: &mut dyn RandomEngine) -> D::Output {
        // A preloaded cache can already be complete.
        if self.seen.len() >= self.unique_target {
            self.start_cycle();
        }

        let value = loop {
            let candidate = self.distribution.sample(engine);
            if !self.seen.contains(&candidate) {
                break candidate;
            }
        };

        self.seen.insert(value.clone());
        if self.seen.len() >= self.unique_target {
            self.start_cycle();
        }
        value
    }

    /// Values emitted so far in the current cycle, in emission order.
    ///
    /// Feed them back through `UniqueOptions::initial` to resume the cycle.
    #[must_use]
    pub fn seen(&self) -> &[D::Output] {
        self.seen.values()
    }

    /// Number of values per cycle.
    #[must_use]
    pub fn unique_target(&self) -> usize {
        self.unique_target
    }

    /// Number of completed cycles.
    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// The wrapped distribution.
    #[must_use]
    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    fn start_cycle(&mut self) {
        self.seen.clear();
        self.cycle += 1;
        trace!(
            cycle = self.cycle,
            unique_target = self.unique_target,
            "uniqueness cycle complete, cache cleared"
        );
    }
}

/// Emits unique values from `D` until the cache reaches its target, then
/// returns uniformly chosen cached values forever.
///
/// After the first `unique_target` calls no value is new, so use
/// `UniqueGenerator` when every cycle must be free of repeats.
#[derive(Debug, Clone)]
pub struct FastUniqueGenerator<D>
where
    D: FiniteDistribution,
    D::Output: Eq + Hash + Clone,
{
    distribution: D,
    seen: SeenSet<D::Output>,
    unique_target: usize,
}

impl<D> FastUniqueGenerator<D>
where
    D: FiniteDistribution,
    D::Output: Eq + Hash + Clone,
{
    /// Wraps `distribution`, preloading the cache with `options.initial`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidDomain` if the uniqueness target is zero.
    pub fn new(distribution: D, options: UniqueOptions<D::Output>) -> Result<Self, RandomError> {
        let unique_target = unique_target(distribution.domain_size(), options.unique_percentage)?;
        Ok(Self {
            distribution,
            seen: options.initial.into_iter().collect(),
            unique_target,
        })
    }

    /// Draws a fresh unique value, or a cached one once the cache is full.
    pub fn generate(&mut self, engine: &mut dyn RandomEngine) -> D::Output {
        if self.is_saturated() {
            if let Some(cached) = self.seen.pick(engine) {
                return cached.clone();
            }
        }

        let value = loop {
            let candidate = self.distribution.sample(engine);
            if !self.seen.contains(&candidate) {
                break candidate;
            }
        };

        self.seen.insert(value.clone());
        if self.is_saturated() {
            trace!(
                unique_target = self.unique_target,
                "uniqueness cache full, serving cached values"
            );
        }
        value
    }

    /// Whether the cache has reached its target and calls return cached
    /// values.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.seen.len() >= self.unique_target
    }

    /// Cached values in emission order.
    #[must_use]
    pub fn seen(&self) -> &[D::Output] {
        self.seen.values()
    }

    /// Number of fresh values emitted before serving from the cache.
    #[must_use]
    pub fn unique_target(&self) -> usize {
        self.unique_target
    }
}
