//! randkit engines: seeded bit generators.
//!
//! Every engine produces 32-bit raw draws (`MAX = 2^32 - 1`) and is a pure
//! function of its state: the same seed always yields the same sequence.
//! None of them is suitable for cryptographic use.

mod default_engine;
pub mod entropy;
mod xoroshiro128plus;
mod xorshift128;
mod xorshift32;
mod xorshift64;

pub use default_engine::DefaultEngine;
pub use xoroshiro128plus::Xoroshiro128Plus;
pub use xorshift32::Xorshift32;
pub use xorshift64::Xorshift64;
pub use xorshift128::Xorshift128;
