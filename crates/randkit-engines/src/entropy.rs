//! Host entropy for seed-less construction and reseeding.

use randkit_core::RandomError;

/// Draws one 32-bit seed word from the host's default random source.
#[must_use]
pub fn seed_word() -> u32 {
    rand::random()
}

/// Completes a partial seed to exactly `N` words.
///
/// Supplied words are used in order; every missing word is an independent
/// draw from host entropy so that seed-less engines never start from
/// correlated words.
///
/// # Errors
///
/// Returns `RandomError::ExhaustedSeed` if more than `N` words are supplied.
pub fn fill_seed<const N: usize>(words: &[u32]) -> Result<[u32; N], RandomError> {
    if words.len() > N {
        return Err(RandomError::ExhaustedSeed {
            expected: N,
            actual: words.len(),
        });
    }

    let mut state = [0_u32; N];
    for (index, slot) in state.iter_mut().enumerate() {
        *slot = words.get(index).copied().unwrap_or_else(seed_word);
    }
    Ok(state)
}
