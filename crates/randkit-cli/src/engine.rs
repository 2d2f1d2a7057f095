//! Engine selection.

use randkit_core::RandomEngine;
use randkit_engines::{DefaultEngine, Xoroshiro128Plus, Xorshift32, Xorshift64, Xorshift128};

use crate::config::{EngineKind, SEED};
use crate::error::AppError;

/// Builds the configured engine from explicit seed words. Words the engine
/// needs beyond `seed` come from host entropy.
///
/// # Errors
///
/// Returns `AppError::Random` if `seed` has more words than the engine, and
/// `AppError::Config` if a seed is given for the unseedable default engine.
pub fn build_engine(kind: EngineKind, seed: &[u32]) -> Result<Box<dyn RandomEngine>, AppError> {
    let engine: Box<dyn RandomEngine> = match kind {
        EngineKind::Xorshift32 => Box::new(Xorshift32::from_seed_words(seed)?),
        EngineKind::Xorshift64 => Box::new(Xorshift64::from_seed_words(seed)?),
        EngineKind::Xorshift128 => Box::new(Xorshift128::from_seed_words(seed)?),
        EngineKind::Xoroshiro128Plus => Box::new(Xoroshiro128Plus::from_seed_words(seed)?),
        EngineKind::Default if seed.is_empty() => Box::new(DefaultEngine::new()),
        EngineKind::Default => {
            return Err(AppError::Config(format!(
                "{SEED} cannot be used with the default engine"
            )));
        }
    };
    Ok(engine)
}
