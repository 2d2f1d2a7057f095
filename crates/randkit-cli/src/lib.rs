//! randkit: sampling harness library.
//!
//! Draws a configured number of values from one engine and distribution and
//! tallies them into an occurrence histogram and a duplicate listing. The
//! `randkit` binary wires this to environment configuration and stdout.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod sampler;

use tracing::{debug, info};

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SampleConfig;
pub use error::AppError;
pub use report::Report;

/// Runs one sampling pass and tallies the result.
///
/// # Errors
///
/// Returns `AppError` if the engine or distribution cannot be built from
/// `config`.
pub fn run(config: &SampleConfig, clock: &dyn Clock) -> Result<Report, AppError> {
    let mut engine = engine::build_engine(config.engine, &config.seed)?;
    let mut sampler = sampler::build_sampler(config)?;

    info!(
        engine = %config.engine,
        distribution = %config.distribution,
        samples = config.samples,
        "sampling"
    );
    let samples = sampler::draw(&mut sampler, engine.as_mut(), config.samples);

    let buckets = config
        .distribution
        .is_real()
        .then(|| report::Buckets::new(config.min, config.max, config.buckets));
    let report = Report::new(clock.now(), config, &samples, buckets);
    debug!(
        rows = report.occurrences.len(),
        duplicates = report.duplicates.len(),
        "tally complete"
    );
    Ok(report)
}
