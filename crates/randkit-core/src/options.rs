//! Option structs shared by distributions and uniqueness generators.

use serde::{Deserialize, Serialize};

/// Whether each bound of an interval is a reachable output.
///
/// Defaults to start inclusive, end exclusive: `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Inclusivity {
    /// Whether `min` can be produced.
    pub inclusive_start: bool,
    /// Whether `max` can be produced.
    pub inclusive_end: bool,
}

impl Inclusivity {
    /// Creates an inclusivity configuration.
    #[must_use]
    pub const fn new(inclusive_start: bool, inclusive_end: bool) -> Self {
        Self {
            inclusive_start,
            inclusive_end,
        }
    }

    /// `[min, max]`.
    #[must_use]
    pub const fn closed() -> Self {
        Self::new(true, true)
    }

    /// `(min, max)`.
    #[must_use]
    pub const fn open() -> Self {
        Self::new(false, false)
    }

    /// Returns a copy with `inclusive_start` replaced.
    #[must_use]
    pub const fn with_start(self, inclusive_start: bool) -> Self {
        Self::new(inclusive_start, self.inclusive_end)
    }

    /// Returns a copy with `inclusive_end` replaced.
    #[must_use]
    pub const fn with_end(self, inclusive_end: bool) -> Self {
        Self::new(self.inclusive_start, inclusive_end)
    }

    /// `0` if the start is inclusive, `1` otherwise.
    #[must_use]
    pub const fn start_offset(self) -> u8 {
        if self.inclusive_start { 0 } else { 1 }
    }

    /// `1` if the end is inclusive, `0` otherwise.
    #[must_use]
    pub const fn end_offset(self) -> u8 {
        if self.inclusive_end { 1 } else { 0 }
    }
}

impl Default for Inclusivity {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// Options for the normal-shaped distributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalOptions {
    /// Bound inclusivity.
    #[serde(flatten)]
    pub inclusivity: Inclusivity,
    /// Shaping parameter controlling the spread before rejection. This is
    /// not the standard deviation of the produced values.
    pub standard_deviation: f64,
}

impl NormalOptions {
    /// The default shaping parameter.
    pub const DEFAULT_STANDARD_DEVIATION: f64 = 2.0;

    /// Returns a copy with the shaping parameter replaced.
    #[must_use]
    pub const fn with_standard_deviation(self, standard_deviation: f64) -> Self {
        Self {
            inclusivity: self.inclusivity,
            standard_deviation,
        }
    }
}

impl Default for NormalOptions {
    fn default() -> Self {
        Self {
            inclusivity: Inclusivity::default(),
            standard_deviation: Self::DEFAULT_STANDARD_DEVIATION,
        }
    }
}

impl From<Inclusivity> for NormalOptions {
    fn from(inclusivity: Inclusivity) -> Self {
        Self {
            inclusivity,
            ..Self::default()
        }
    }
}

/// Options for uniqueness generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniqueOptions<T> {
    /// Fraction of the domain emitted before the cache resets. Values above
    /// `1` are treated as `1`.
    pub unique_percentage: f64,
    /// Values preloaded into the cache, typically a previously persisted
    /// cycle.
    pub initial: Vec<T>,
}

impl<T> UniqueOptions<T> {
    /// The default unique percentage.
    pub const DEFAULT_UNIQUE_PERCENTAGE: f64 = 0.99;

    /// Creates options with the given percentage and an empty cache.
    #[must_use]
    pub fn with_percentage(unique_percentage: f64) -> Self {
        Self {
            unique_percentage,
            initial: Vec::new(),
        }
    }

    /// Returns a copy preloaded with `initial`.
    #[must_use]
    pub fn with_initial(self, initial: Vec<T>) -> Self {
        Self { initial, ..self }
    }
}

impl<T> Default for UniqueOptions<T> {
    fn default() -> Self {
        Self::with_percentage(Self::DEFAULT_UNIQUE_PERCENTAGE)
    }
}
