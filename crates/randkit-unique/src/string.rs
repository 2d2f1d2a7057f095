//! Random and unique string generators.

use std::collections::HashSet;

use randkit_core::{
    Distribution, FiniteDistribution, Inclusivity, RandomEngine, RandomError, UniqueOptions,
};
use randkit_distributions::UniformInt;

use crate::generator::{FastUniqueGenerator, UniqueGenerator};

/// Zero-width characters that render as nothing.
pub const INVISIBLE_CHARSET: [&str; 5] = ["\u{200B}", "\u{2060}", "\u{180E}", "\u{200D}", "\u{200C}"];

/// Strings of `char_count` pieces drawn uniformly from a charset.
///
/// Each position takes one raw draw. The charset is a list of string
/// pieces so multi-codepoint symbols can be used as single characters.
/// Repeated pieces weight the draw but count once towards the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomStringGenerator {
    charset: Vec<String>,
    distinct: u64,
    char_count: usize,
    picker: UniformInt,
}

impl RandomStringGenerator {
    /// Creates a generator over `charset`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EmptyCharset` if the charset is empty.
    pub fn new<I, S>(charset: I, char_count: usize) -> Result<Self, RandomError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let charset: Vec<String> = charset.into_iter().map(Into::into).collect();
        if charset.is_empty() {
            return Err(RandomError::EmptyCharset);
        }
        let len = i64::try_from(charset.len()).unwrap_or(i64::MAX);
        let picker = UniformInt::new(0, len, Inclusivity::default())?;
        let distinct = charset.iter().collect::<HashSet<_>>().len();
        Ok(Self {
            distinct: u64::try_from(distinct).unwrap_or(u64::MAX),
            charset,
            char_count,
            picker,
        })
    }

    /// Creates a generator whose pieces are the `char`s of `charset`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EmptyCharset` if `charset` is empty.
    pub fn from_chars(charset: &str, char_count: usize) -> Result<Self, RandomError> {
        Self::new(charset.chars().map(String::from), char_count)
    }
}

impl Distribution for RandomStringGenerator {
    type Output = String;

    fn sample(&self, engine: &mut dyn RandomEngine) -> String {
        let mut out = String::new();
        for _ in 0..self.char_count {
            let index = usize::try_from(self.picker.sample(engine)).unwrap_or_default();
            out.push_str(&self.charset[index]);
        }
        out
    }
}

impl FiniteDistribution for RandomStringGenerator {
    /// `distinct_pieces ^ char_count`, saturating at `u64::MAX`.
    fn domain_size(&self) -> u64 {
        let exponent = u32::try_from(self.char_count).unwrap_or(u32::MAX);
        self.distinct.saturating_pow(exponent)
    }
}

/// Builds a generator of `length` invisible characters.
///
/// # Errors
///
/// Never fails for the fixed charset; the `Result` mirrors the other
/// constructors.
pub fn invisible_string_generator(length: usize) -> Result<RandomStringGenerator, RandomError> {
    RandomStringGenerator::new(INVISIBLE_CHARSET, length)
}

/// Unique strings of `char_count` characters from `charset`.
pub type UniqueStringGenerator = UniqueGenerator<RandomStringGenerator>;

/// Fast variant of `UniqueStringGenerator`.
pub type FastUniqueStringGenerator = FastUniqueGenerator<RandomStringGenerator>;

/// Builds a generator of unique strings over the `char`s of `charset`.
///
/// # Errors
///
/// Returns `RandomError::InvalidDomain` if the charset is empty or the
/// uniqueness target is zero.
pub fn unique_string_generator(
    charset: &str,
    char_count: usize,
    options: UniqueOptions<String>,
) -> Result<UniqueStringGenerator, RandomError> {
    let strings = string_domain(charset, char_count, options.unique_percentage)?;
    UniqueGenerator::new(strings, options)
}

/// Builds the fast variant of `unique_string_generator`.
///
/// # Errors
///
/// Same as `unique_string_generator`.
pub fn fast_unique_string_generator(
    charset: &str,
    char_count: usize,
    options: UniqueOptions<String>,
) -> Result<FastUniqueStringGenerator, RandomError> {
    let strings = string_domain(charset, char_count, options.unique_percentage)?;
    FastUniqueGenerator::new(strings, options)
}

/// An empty charset leaves a uniqueness generator nothing to emit.
fn string_domain(
    charset: &str,
    char_count: usize,
    unique_percentage: f64,
) -> Result<RandomStringGenerator, RandomError> {
    RandomStringGenerator::from_chars(charset, char_count).map_err(|err| match err {
        RandomError::EmptyCharset => RandomError::InvalidDomain {
            domain_size: 0,
            unique_percentage,
        },
        other => other,
    })
}
