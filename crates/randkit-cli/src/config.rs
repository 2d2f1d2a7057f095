//! Harness configuration read from `RANDKIT_*` environment variables.

use std::fmt;
use std::path::PathBuf;

use randkit_core::{Inclusivity, NormalOptions, UniqueOptions};

use crate::error::AppError;

pub const ENGINE: &str = "RANDKIT_ENGINE";
pub const SEED: &str = "RANDKIT_SEED";
pub const DISTRIBUTION: &str = "RANDKIT_DISTRIBUTION";
pub const MIN: &str = "RANDKIT_MIN";
pub const MAX: &str = "RANDKIT_MAX";
pub const INCLUSIVE_START: &str = "RANDKIT_INCLUSIVE_START";
pub const INCLUSIVE_END: &str = "RANDKIT_INCLUSIVE_END";
pub const STD_DEV: &str = "RANDKIT_STD_DEV";
pub const UNIQUE_PERCENTAGE: &str = "RANDKIT_UNIQUE_PERCENTAGE";
pub const CHARSET: &str = "RANDKIT_CHARSET";
pub const CHAR_COUNT: &str = "RANDKIT_CHAR_COUNT";
pub const SAMPLES: &str = "RANDKIT_SAMPLES";
pub const BUCKETS: &str = "RANDKIT_BUCKETS";
pub const FORMAT: &str = "RANDKIT_FORMAT";
pub const OUTPUT: &str = "RANDKIT_OUTPUT";

/// `RANDKIT_CHARSET` value selecting the zero-width charset.
pub const INVISIBLE: &str = "invisible";

/// Which engine drives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Xorshift32,
    Xorshift64,
    Xorshift128,
    Xoroshiro128Plus,
    Default,
}

impl EngineKind {
    const ALL: [Self; 5] = [
        Self::Xorshift32,
        Self::Xorshift64,
        Self::Xorshift128,
        Self::Xoroshiro128Plus,
        Self::Default,
    ];

    /// The configuration token for this engine.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xorshift32 => "xorshift32",
            Self::Xorshift64 => "xorshift64",
            Self::Xorshift128 => "xorshift128",
            Self::Xoroshiro128Plus => "xoroshiro128plus",
            Self::Default => "default",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == token)
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which distribution is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionKind {
    UniformInt,
    UniformReal,
    NormalInt,
    NormalReal,
    UniqueInt,
    UniqueString,
}

impl DistributionKind {
    const ALL: [Self; 6] = [
        Self::UniformInt,
        Self::UniformReal,
        Self::NormalInt,
        Self::NormalReal,
        Self::UniqueInt,
        Self::UniqueString,
    ];

    /// The configuration token for this distribution.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UniformInt => "uniform-int",
            Self::UniformReal => "uniform-real",
            Self::NormalInt => "normal-int",
            Self::NormalReal => "normal-real",
            Self::UniqueInt => "unique-int",
            Self::UniqueString => "unique-string",
        }
    }

    /// Whether samples are reals and the histogram is bucketed.
    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::UniformReal | Self::NormalReal)
    }

    fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == token)
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Everything a sampling run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    pub engine: EngineKind,
    /// Explicit seed words; missing words are drawn from host entropy.
    pub seed: Vec<u32>,
    pub distribution: DistributionKind,
    pub min: f64,
    pub max: f64,
    pub inclusivity: Inclusivity,
    pub standard_deviation: f64,
    pub unique_percentage: f64,
    /// Characters for `unique-string`, or `invisible`.
    pub charset: String,
    pub char_count: usize,
    pub samples: usize,
    /// Histogram bins for real-valued distributions.
    pub buckets: usize,
    pub format: OutputFormat,
    /// Report destination; stdout when unset.
    pub output: Option<PathBuf>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Xorshift128,
            seed: Vec::new(),
            distribution: DistributionKind::UniformInt,
            min: 0.0,
            max: 10.0,
            inclusivity: Inclusivity::default(),
            standard_deviation: NormalOptions::DEFAULT_STANDARD_DEVIATION,
            unique_percentage: UniqueOptions::<i64>::DEFAULT_UNIQUE_PERCENTAGE,
            charset: "abcdefghijklmnopqrstuvwxyz".to_string(),
            char_count: 2,
            samples: 100_000,
            buckets: 20,
            format: OutputFormat::Text,
            output: None,
        }
    }
}

impl SampleConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` naming the first invalid variable.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Unset or blank variables
    /// keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` naming the first invalid variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());

        let inclusivity = Inclusivity::new(
            parse_var(
                var(INCLUSIVE_START),
                INCLUSIVE_START,
                defaults.inclusivity.inclusive_start,
                parse_bool,
                "true or false",
            )?,
            parse_var(
                var(INCLUSIVE_END),
                INCLUSIVE_END,
                defaults.inclusivity.inclusive_end,
                parse_bool,
                "true or false",
            )?,
        );

        Ok(Self {
            engine: parse_var(
                var(ENGINE),
                ENGINE,
                defaults.engine,
                EngineKind::parse,
                "xorshift32, xorshift64, xorshift128, xoroshiro128plus or default",
            )?,
            seed: parse_var(
                var(SEED),
                SEED,
                defaults.seed,
                parse_seed,
                "comma-separated u32 words",
            )?,
            distribution: parse_var(
                var(DISTRIBUTION),
                DISTRIBUTION,
                defaults.distribution,
                DistributionKind::parse,
                "uniform-int, uniform-real, normal-int, normal-real, unique-int or unique-string",
            )?,
            min: parse_var(var(MIN), MIN, defaults.min, parse_finite, "a finite number")?,
            max: parse_var(var(MAX), MAX, defaults.max, parse_finite, "a finite number")?,
            inclusivity,
            standard_deviation: parse_var(
                var(STD_DEV),
                STD_DEV,
                defaults.standard_deviation,
                parse_finite,
                "a finite number",
            )?,
            unique_percentage: parse_var(
                var(UNIQUE_PERCENTAGE),
                UNIQUE_PERCENTAGE,
                defaults.unique_percentage,
                parse_finite,
                "a finite number",
            )?,
            charset: var(CHARSET).unwrap_or(defaults.charset),
            char_count: parse_var(
                var(CHAR_COUNT),
                CHAR_COUNT,
                defaults.char_count,
                parse_positive,
                POSITIVE,
            )?,
            samples: parse_var(var(SAMPLES), SAMPLES, defaults.samples, parse_positive, POSITIVE)?,
            buckets: parse_var(var(BUCKETS), BUCKETS, defaults.buckets, parse_positive, POSITIVE)?,
            format: parse_var(
                var(FORMAT),
                FORMAT,
                defaults.format,
                OutputFormat::parse,
                "text or json",
            )?,
            output: var(OUTPUT).map(PathBuf::from),
        })
    }

    /// `min` and `max` as integers, for the integer distributions.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if either bound has a fractional part or
    /// does not fit in an `i64`.
    pub fn integer_bounds(&self) -> Result<(i64, i64), AppError> {
        Ok((to_integer(MIN, self.min)?, to_integer(MAX, self.max)?))
    }

    /// Normal-distribution options built from the inclusivity flags and
    /// `RANDKIT_STD_DEV`.
    #[must_use]
    pub fn normal_options(&self) -> NormalOptions {
        NormalOptions::from(self.inclusivity).with_standard_deviation(self.standard_deviation)
    }
}

const POSITIVE: &str = "a positive integer";

fn parse_var<T>(
    raw: Option<String>,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
    expected: &str,
) -> Result<T, AppError> {
    match raw {
        None => Ok(default),
        Some(raw) => parse(raw.trim()).ok_or_else(|| AppError::invalid(key, &raw, expected)),
    }
}

fn parse_bool(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_positive(token: &str) -> Option<usize> {
    token.parse::<usize>().ok().filter(|value| *value > 0)
}

fn parse_seed(token: &str) -> Option<Vec<u32>> {
    token
        .split(',')
        .map(|word| word.trim().parse::<u32>().ok())
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn to_integer(key: &str, value: f64) -> Result<i64, AppError> {
    // 2^63 is exactly representable; anything at or above it overflows.
    let limit = i64::MAX as f64;
    if value.fract() == 0.0 && value >= -limit && value < limit {
        Ok(value as i64)
    } else {
        Err(AppError::invalid(key, &value.to_string(), "an integer"))
    }
}
