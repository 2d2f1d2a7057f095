//! Builds a boxed sampling closure for the configured distribution.

use randkit_core::{Distribution, RandomEngine, UniqueOptions};
use randkit_distributions::{NormalInt, NormalReal, UniformInt, UniformReal};
use randkit_unique::{RandomStringGenerator, UniqueGenerator, invisible_string_generator};

use crate::config::{DistributionKind, INVISIBLE, SampleConfig};
use crate::error::AppError;

/// One drawn value.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    Int(i64),
    Real(f64),
    Text(String),
}

/// Draws one value per call. Unique samplers own their cache.
pub type Sampler = Box<dyn FnMut(&mut dyn RandomEngine) -> Sample>;

/// Validates the configured distribution and wraps it in a `Sampler`.
///
/// # Errors
///
/// Returns `AppError::Config` for non-integer bounds on an integer
/// distribution and `AppError::Random` if construction fails.
pub fn build_sampler(config: &SampleConfig) -> Result<Sampler, AppError> {
    let sampler: Sampler = match config.distribution {
        DistributionKind::UniformInt => {
            let (min, max) = config.integer_bounds()?;
            let distribution = UniformInt::new(min, max, config.inclusivity)?;
            Box::new(move |engine: &mut dyn RandomEngine| Sample::Int(distribution.sample(engine)))
        }
        DistributionKind::UniformReal => {
            let distribution = UniformReal::new(config.min, config.max, config.inclusivity)?;
            Box::new(move |engine: &mut dyn RandomEngine| Sample::Real(distribution.sample(engine)))
        }
        DistributionKind::NormalInt => {
            let (min, max) = config.integer_bounds()?;
            let distribution = NormalInt::new(min, max, config.normal_options())?;
            Box::new(move |engine: &mut dyn RandomEngine| Sample::Int(distribution.sample(engine)))
        }
        DistributionKind::NormalReal => {
            let distribution = NormalReal::new(config.min, config.max, config.normal_options())?;
            Box::new(move |engine: &mut dyn RandomEngine| Sample::Real(distribution.sample(engine)))
        }
        DistributionKind::UniqueInt => {
            let (min, max) = config.integer_bounds()?;
            let mut generator = UniqueGenerator::new(
                UniformInt::new(min, max, config.inclusivity)?,
                UniqueOptions::with_percentage(config.unique_percentage),
            )?;
            Box::new(move |engine: &mut dyn RandomEngine| Sample::Int(generator.generate(engine)))
        }
        DistributionKind::UniqueString => {
            let strings = if config.charset == INVISIBLE {
                invisible_string_generator(config.char_count)?
            } else {
                RandomStringGenerator::from_chars(&config.charset, config.char_count)?
            };
            let mut generator = UniqueGenerator::new(
                strings,
                UniqueOptions::with_percentage(config.unique_percentage),
            )?;
            Box::new(move |engine: &mut dyn RandomEngine| Sample::Text(generator.generate(engine)))
        }
    };
    Ok(sampler)
}

/// Draws `count` values.
pub fn draw(sampler: &mut Sampler, engine: &mut dyn RandomEngine, count: usize) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        samples.push(sampler(&mut *engine));
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use randkit_core::RandomError;
    use randkit_test_support::{ConstantEngine, SequenceEngine};

    fn config(distribution: DistributionKind) -> SampleConfig {
        SampleConfig {
            distribution,
            ..SampleConfig::default()
        }
    }

    #[test]
    fn test_uniform_int_sampler_maps_draws() {
        let mut sampler = build_sampler(&config(DistributionKind::UniformInt)).unwrap();
        let mut engine = SequenceEngine::new(vec![0, 5, 9]).with_max(9);
        assert_eq!(
            draw(&mut sampler, &mut engine, 3),
            vec![Sample::Int(0), Sample::Int(5), Sample::Int(9)]
        );
    }

    #[test]
    fn test_real_sampler_yields_reals() {
        let mut sampler = build_sampler(&config(DistributionKind::UniformReal)).unwrap();
        assert_eq!(sampler(&mut ConstantEngine(0)), Sample::Real(0.0));
    }

    #[test]
    fn test_unique_int_sampler_keeps_cache_between_calls() {
        let config = SampleConfig {
            unique_percentage: 1.0,
            ..config(DistributionKind::UniqueInt)
        };
        let mut sampler = build_sampler(&config).unwrap();
        let mut engine = SequenceEngine::new(vec![3, 3, 4]).with_max(9);
        assert_eq!(
            draw(&mut sampler, &mut engine, 2),
            vec![Sample::Int(3), Sample::Int(4)]
        );
    }

    #[test]
    fn test_invisible_charset_keyword() {
        let config = SampleConfig {
            charset: INVISIBLE.to_string(),
            char_count: 1,
            ..config(DistributionKind::UniqueString)
        };
        let mut sampler = build_sampler(&config).unwrap();
        assert_eq!(
            sampler(&mut ConstantEngine(0)),
            Sample::Text("\u{200B}".to_string())
        );
    }

    #[test]
    fn test_inverted_bounds_surface_random_error() {
        let config = SampleConfig {
            min: 10.0,
            max: 0.0,
            ..config(DistributionKind::NormalReal)
        };
        assert!(matches!(
            build_sampler(&config),
            Err(AppError::Random(RandomError::InvalidRange { .. }))
        ));
    }
}
