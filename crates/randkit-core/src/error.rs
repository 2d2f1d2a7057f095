//! Error types shared by every randkit crate.

use thiserror::Error;

/// Construction and call-time failures.
///
/// Rejection-sampling retries are part of normal operation and never surface
/// as errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomError {
    /// The interval is empty or inverted after applying inclusivity, or a
    /// bound is not finite.
    #[error("invalid range: [{min}, {max}] holds no values")]
    InvalidRange {
        /// The lower bound as supplied.
        min: f64,
        /// The upper bound as supplied.
        max: f64,
    },

    /// The uniqueness target rounds down to zero.
    #[error(
        "invalid uniqueness domain: {unique_percentage} of {domain_size} values leaves nothing to cache"
    )]
    InvalidDomain {
        /// Count of distinct representable values.
        domain_size: u64,
        /// The requested unique percentage.
        unique_percentage: f64,
    },

    /// A reseed supplied more words than the engine has state.
    #[error("seed takes at most {expected} words, got {actual}")]
    ExhaustedSeed {
        /// Number of state words the engine holds.
        expected: usize,
        /// Number of words supplied.
        actual: usize,
    },

    /// The normal shaping parameter is not finite and positive.
    #[error("standard deviation must be finite and positive, got {0}")]
    InvalidStandardDeviation(f64),

    /// A string generator was given no characters to draw from.
    #[error("charset is empty")]
    EmptyCharset,
}
