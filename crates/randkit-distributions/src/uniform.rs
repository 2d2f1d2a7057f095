//! Uniform distributions over integer and real intervals.

use randkit_core::{Distribution, FiniteDistribution, Inclusivity, RandomEngine, RandomError};
use serde::{Deserialize, Serialize};

use crate::{offset, scale_to_span};

/// Uniform integers in `[min, max)` or any other inclusivity.
///
/// The effective lower bound is `min + 1` when the start is exclusive, and
/// the span is `max - lower + 1` when the end is inclusive. One raw draw per
/// sample: `floor(next / RANGE * span) + lower`.
///
/// Deserialization applies the same checks as `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IntFields")]
pub struct UniformInt {
    start: i64,
    span: u64,
}

impl UniformInt {
    /// Creates the distribution.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if no integer lies in the interval
    /// after applying `inclusivity`.
    pub fn new(min: i64, max: i64, inclusivity: Inclusivity) -> Result<Self, RandomError> {
        let (start, span) = int_bounds(min, max, inclusivity)?;
        Ok(Self { start, span })
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

impl Distribution for UniformInt {
    type Output = i64;

    #[allow(clippy::cast_precision_loss)]
    fn sample(&self, engine: &mut dyn RandomEngine) -> i64 {
        let fraction = f64::from(engine.next()) / engine.range() as f64;
        offset(self.start, scale_to_span(fraction, self.span))
    }
}

impl FiniteDistribution for UniformInt {
    fn domain_size(&self) -> u64 {
        self.span
    }
}

/// Uniform reals between `min` and `max`.
///
/// The raw draw is shifted and rescaled so that an open bound is never hit
/// and a closed bound is reachable:
/// `(next + s) / (RANGE + s - e) * (max - min) + min`, where `s` is `1` for an
/// exclusive start and `e` is `1` for an inclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RealFields")]
pub struct UniformReal {
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) inclusivity: Inclusivity,
}

impl UniformReal {
    /// Creates the distribution.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if either bound is not finite or
    /// `max - min` is not a finite positive number.
    pub fn new(min: f64, max: f64, inclusivity: Inclusivity) -> Result<Self, RandomError> {
        validate_real_bounds(min, max)?;
        Ok(Self {
            min,
            max,
            inclusivity,
        })
    }

    /// The lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// The upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Bound inclusivity.
    #[must_use]
    pub const fn inclusivity(&self) -> Inclusivity {
        self.inclusivity
    }
}

impl Distribution for UniformReal {
    type Output = f64;

    #[allow(clippy::cast_precision_loss)]
    fn sample(&self, engine: &mut dyn RandomEngine) -> f64 {
        let s = f64::from(self.inclusivity.start_offset());
        let e = f64::from(self.inclusivity.end_offset());
        let fraction = (f64::from(engine.next()) + s) / (engine.range() as f64 + s - e);
        fraction * (self.max - self.min) + self.min
    }
}

/// Serialized shape of `UniformInt`.
#[derive(Deserialize)]
struct IntFields {
    start: i64,
    span: u64,
}

impl TryFrom<IntFields> for UniformInt {
    type Error = RandomError;

    fn try_from(fields: IntFields) -> Result<Self, Self::Error> {
        validate_int_span(fields.start, fields.span)?;
        Ok(Self {
            start: fields.start,
            span: fields.span,
        })
    }
}

/// Serialized shape of `UniformReal`.
#[derive(Deserialize)]
struct RealFields {
    min: f64,
    max: f64,
    #[serde(default)]
    inclusivity: Inclusivity,
}

impl TryFrom<RealFields> for UniformReal {
    type Error = RandomError;

    fn try_from(fields: RealFields) -> Result<Self, Self::Error> {
        Self::new(fields.min, fields.max, fields.inclusivity)
    }
}

/// Applies inclusivity to integer bounds, returning the lower bound and the
/// number of reachable values.
pub(crate) fn int_bounds(
    min: i64,
    max: i64,
    inclusivity: Inclusivity,
) -> Result<(i64, u64), RandomError> {
    let start = min.checked_add(i64::from(inclusivity.start_offset()));
    let span = start
        .and_then(|start| max.checked_sub(start))
        .and_then(|span| span.checked_add(i64::from(inclusivity.end_offset())));

    match (start, span) {
        (Some(start), Some(span)) if span > 0 => Ok((start, span.unsigned_abs())),
        _ => Err(invalid_int_range(min, max)),
    }
}

/// Checks a stored `(start, span)` pair: the span is non-empty and its last
/// value fits in an `i64`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn validate_int_span(start: i64, span: u64) -> Result<(), RandomError> {
    let last = span
        .checked_sub(1)
        .and_then(|steps| i64::try_from(steps).ok())
        .and_then(|steps| start.checked_add(steps));
    match last {
        Some(_) => Ok(()),
        None => Err(RandomError::InvalidRange {
            min: start as f64,
            max: start as f64 + span as f64,
        }),
    }
}

pub(crate) fn validate_real_bounds(min: f64, max: f64) -> Result<(), RandomError> {
    let span = max - min;
    if min.is_finite() && max.is_finite() && span.is_finite() && span > 0.0 {
        Ok(())
    } else {
        Err(RandomError::InvalidRange { min, max })
    }
}

#[allow(clippy::cast_precision_loss)]
fn invalid_int_range(min: i64, max: i64) -> RandomError {
    RandomError::InvalidRange {
        min: min as f64,
        max: max as f64,
    }
}
