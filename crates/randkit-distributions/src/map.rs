//! One-shot mappings.
//!
//! Each helper validates its bounds, draws a single value and discards the
//! distribution. When sampling the same interval repeatedly, build the
//! distribution once instead.

use randkit_core::{Distribution, Inclusivity, NormalOptions, RandomEngine, RandomError};

use crate::normal::{NormalInt, NormalReal};
use crate::uniform::{UniformInt, UniformReal};

/// Maps one raw draw onto a uniform integer in the interval.
///
/// # Errors
///
/// Returns `RandomError::InvalidRange` if no integer lies in the interval.
pub fn uniform_int_map(
    engine: &mut dyn RandomEngine,
    min: i64,
    max: i64,
    inclusivity: Inclusivity,
) -> Result<i64, RandomError> {
    Ok(UniformInt::new(min, max, inclusivity)?.sample(engine))
}

/// Maps one raw draw onto a uniform real in the interval.
///
/// # Errors
///
/// Returns `RandomError::InvalidRange` if the bounds are not finite or not
/// increasing.
pub fn uniform_real_map(
    engine: &mut dyn RandomEngine,
    min: f64,
    max: f64,
    inclusivity: Inclusivity,
) -> Result<f64, RandomError> {
    Ok(UniformReal::new(min, max, inclusivity)?.sample(engine))
}

/// Draws one normal-shaped integer in the interval.
///
/// # Errors
///
/// Returns `RandomError::InvalidRange` or
/// `RandomError::InvalidStandardDeviation` as `NormalInt::new` does.
pub fn normal_int_map(
    engine: &mut dyn RandomEngine,
    min: i64,
    max: i64,
    options: NormalOptions,
) -> Result<i64, RandomError> {
    Ok(NormalInt::new(min, max, options)?.sample(engine))
}

/// Draws one normal-shaped real in the interval.
///
/// # Errors
///
/// Returns `RandomError::InvalidRange` or
/// `RandomError::InvalidStandardDeviation` as `NormalReal::new` does.
pub fn normal_real_map(
    engine: &mut dyn RandomEngine,
    min: f64,
    max: f64,
    options: NormalOptions,
) -> Result<f64, RandomError> {
    Ok(NormalReal::new(min, max, options)?.sample(engine))
}
