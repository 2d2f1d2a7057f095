//! Normal-shaped distributions built by rejection sampling.
//!
//! A raw sample is `sqrt(-sd * ln(u)) * cos(sd * PI * v) / 10`, with `u` and
//! `v` drawn uniformly from `(0, 1)`. Samples outside the acceptance window
//! around zero are discarded and redrawn; accepted samples are shifted by
//! `0.5` and stretched onto the target interval. `sd` shapes the spread
//! before rejection and is not the standard deviation of the output.

use std::f64::consts::PI;

use randkit_core::{Distribution, Inclusivity, NormalOptions, RandomEngine, RandomError};
use serde::{Deserialize, Serialize};

use crate::uniform::{UniformReal, int_bounds, validate_int_span, validate_real_bounds};
use crate::{offset, scale_to_span};

/// Uniform `(0, 1)`; open at zero so `ln(u)` stays finite.
const UNIT_OPEN: UniformReal = UniformReal {
    min: 0.0,
    max: 1.0,
    inclusivity: Inclusivity::new(false, false),
};

fn shaped_sample(engine: &mut dyn RandomEngine, standard_deviation: f64) -> f64 {
    let u = UNIT_OPEN.sample(engine);
    let v = UNIT_OPEN.sample(engine);
    (-standard_deviation * u.ln()).sqrt() * (standard_deviation * PI * v).cos() / 10.0
}

fn validate_standard_deviation(standard_deviation: f64) -> Result<(), RandomError> {
    if standard_deviation.is_finite() && standard_deviation > 0.0 {
        Ok(())
    } else {
        Err(RandomError::InvalidStandardDeviation(standard_deviation))
    }
}

/// Normal-shaped integers.
///
/// Accepts raw samples in `[-0.5, 0.5)` and floors the stretched value, so
/// each reachable integer owns a half-open slice of the window.
///
/// Not every integer in the interval is reachable: with a small shaping
/// parameter the window edges are never sampled. It therefore does not
/// implement `FiniteDistribution` and cannot back a uniqueness generator.
///
/// ```compile_fail
/// use randkit_core::{FiniteDistribution, NormalOptions};
/// use randkit_distributions::NormalInt;
///
/// let dist = NormalInt::new(0, 10, NormalOptions::default()).unwrap();
/// let _ = dist.domain_size();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NormalIntFields")]
pub struct NormalInt {
    start: i64,
    span: u64,
    standard_deviation: f64,
}

impl NormalInt {
    /// Creates the distribution.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if no integer lies in the interval
    /// after applying inclusivity, or `RandomError::InvalidStandardDeviation`
    /// if the shaping parameter is not finite and positive.
    pub fn new(min: i64, max: i64, options: NormalOptions) -> Result<Self, RandomError> {
        let (start, span) = int_bounds(min, max, options.inclusivity)?;
        validate_standard_deviation(options.standard_deviation)?;
        Ok(Self {
            start,
            span,
            standard_deviation: options.standard_deviation,
        })
    }

    /// The smallest value that can be produced.
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Number of distinct values that can be produced.
    #[must_use]
    pub const fn span(&self) -> u64 {
        self.span
    }
}

impl Distribution for NormalInt {
    type Output = i64;

    fn sample(&self, engine: &mut dyn RandomEngine) -> i64 {
        loop {
            let res = shaped_sample(engine, self.standard_deviation);
            if (-0.5..0.5).contains(&res) {
                return offset(self.start, scale_to_span(res + 0.5, self.span));
            }
        }
    }
}

/// Normal-shaped reals.
///
/// Accepts raw samples in `[-0.5, 0.5]`, rejecting exactly `-0.5` when the
/// start is exclusive and exactly `0.5` when the end is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NormalRealFields")]
pub struct NormalReal {
    min: f64,
    max: f64,
    inclusivity: Inclusivity,
    standard_deviation: f64,
}

impl NormalReal {
    /// Creates the distribution.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if the bounds are not finite or
    /// not increasing, or `RandomError::InvalidStandardDeviation` if the
    /// shaping parameter is not finite and positive.
    pub fn new(min: f64, max: f64, options: NormalOptions) -> Result<Self, RandomError> {
        validate_real_bounds(min, max)?;
        validate_standard_deviation(options.standard_deviation)?;
        Ok(Self {
            min,
            max,
            inclusivity: options.inclusivity,
            standard_deviation: options.standard_deviation,
        })
    }

    fn accepts(&self, res: f64) -> bool {
        let above_start = if self.inclusivity.inclusive_start {
            res >= -0.5
        } else {
            res > -0.5
        };
        let below_end = if self.inclusivity.inclusive_end {
            res <= 0.5
        } else {
            res < 0.5
        };
        above_start && below_end
    }
}

impl Distribution for NormalReal {
    type Output = f64;

    fn sample(&self, engine: &mut dyn RandomEngine) -> f64 {
        loop {
            let res = shaped_sample(engine, self.standard_deviation);
            if self.accepts(res) {
                return (res + 0.5) * (self.max - self.min) + self.min;
            }
        }
    }
}

/// Serialized shape of `NormalInt`.
#[derive(Deserialize)]
struct NormalIntFields {
    start: i64,
    span: u64,
    standard_deviation: f64,
}

impl TryFrom<NormalIntFields> for NormalInt {
    type Error = RandomError;

    fn try_from(fields: NormalIntFields) -> Result<Self, Self::Error> {
        validate_int_span(fields.start, fields.span)?;
        validate_standard_deviation(fields.standard_deviation)?;
        Ok(Self {
            start: fields.start,
            span: fields.span,
            standard_deviation: fields.standard_deviation,
        })
    }
}

/// Serialized shape of `NormalReal`.
#[derive(Deserialize)]
struct NormalRealFields {
    min: f64,
    max: f64,
    #[serde(default)]
    inclusivity: Inclusivity,
    standard_deviation: f64,
}

impl TryFrom<NormalRealFields> for NormalReal {
    type Error = RandomError;

    fn try_from(fields: NormalRealFields) -> Result<Self, Self::Error> {
        let options = NormalOptions::from(fields.inclusivity)
            .with_standard_deviation(fields.standard_deviation);
        Self::new(fields.min, fields.max, options)
    }
}
