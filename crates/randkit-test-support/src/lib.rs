//! Shared test engines for randkit crates.

mod engine;

pub use engine::{ConstantEngine, SequenceEngine};
