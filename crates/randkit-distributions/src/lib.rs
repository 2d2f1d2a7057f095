//! randkit distributions: map raw engine draws onto numeric ranges.
//!
//! Distributions are built once from `(min, max, options)`, validated at
//! construction, and then sampled with any engine. They hold no mutable
//! state.
//!
//! The normal-shaped distributions use rejection sampling: a call draws
//! from the engine until a sample lands in the acceptance window. The loop
//! is not capped. Rejection probability is low and bounded away from one,
//! so it terminates with probability one, but callers must not assume a
//! fixed number of engine draws per value.

mod map;
mod normal;
mod uniform;

pub use map::{normal_int_map, normal_real_map, uniform_int_map, uniform_real_map};
pub use normal::{NormalInt, NormalReal};
pub use uniform::{UniformInt, UniformReal};

/// Scales a fraction in `[0, 1)` onto `0..span`.
///
/// Floating-point rounding can carry a fraction just below one up to
/// exactly `span`; the result is held to the last slot.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn scale_to_span(fraction: f64, span: u64) -> u64 {
    let slot = (fraction * span as f64).floor() as u64;
    slot.min(span - 1)
}

/// Offsets `start` by a slot index produced by `scale_to_span`.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn offset(start: i64, slot: u64) -> i64 {
    start.wrapping_add(slot as i64)
}
