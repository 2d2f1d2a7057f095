//! randkit core: shared engine and distribution abstractions.
//!
//! This crate defines the capability traits that engines, distributions
//! and uniqueness generators are built against, together with the option
//! structs and error taxonomy they share. It contains no algorithms.

pub mod distribution;
pub mod engine;
pub mod error;
pub mod options;

pub use distribution::{Distribution, FiniteDistribution};
pub use engine::{RandomEngine, SeedableEngine};
pub use error::RandomError;
pub use options::{Inclusivity, NormalOptions, UniqueOptions};
