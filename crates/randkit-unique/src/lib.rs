//! randkit unique: generators that avoid repeating values within a cycle.
//!
//! A uniqueness generator wraps a finite distribution with a cache of the
//! values emitted so far. Draws that hit the cache are redrawn. Once the
//! cache holds `floor(domain_size * unique_percentage)` values it is cleared
//! and a new cycle begins, so values from earlier cycles become eligible
//! again before the domain is completely exhausted.
//!
//! Collision redraws are not capped. With `unique_percentage` close to one
//! the last values of a cycle can take many engine draws to find; lower the
//! percentage to bound that latency.

mod generator;
mod numeric;
mod seen;
mod string;

pub use generator::{FastUniqueGenerator, UniqueGenerator, unique_target};
pub use numeric::{
    FastUniqueIntGenerator, UniqueIntGenerator, fast_unique_int_generator, unique_int_generator,
};
pub use seen::SeenSet;
pub use string::{
    FastUniqueStringGenerator, INVISIBLE_CHARSET, RandomStringGenerator, UniqueStringGenerator,
    fast_unique_string_generator, invisible_string_generator, unique_string_generator,
};
