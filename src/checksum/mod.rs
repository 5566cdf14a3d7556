pub mod damm;
pub mod luhn;
pub mod mod_97_10;
pub mod mod_n_1_n;
pub mod mod_n_2;
pub mod verhoeff;
pub mod weighted;

use crate::alphabet::Alphabet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// The input holds a character that is not part of the alphabet in use.
    #[error("The symbol {0:?} is not part of the alphabet")]
    InvalidSymbol(char),

    #[error("A check digit cannot be computed over an empty input")]
    EmptyInput,

    /// A weighted sum without weights or with a zero modulus.
    #[error("Weighted sums need at least one weight and a non-zero modulus")]
    InvalidParameters,
}

/// Yields the value of every symbol of `symbols`, failing on the first one that is not in the
/// alphabet.
fn symbol_values<'a>(
    symbols: &'a str,
    alphabet: &'a Alphabet<'_>,
) -> impl Iterator<Item = Result<u32, ChecksumError>> + 'a {
    symbols.chars().map(move |symbol| {
        alphabet
            .index_of(symbol)
            .ok_or(ChecksumError::InvalidSymbol(symbol))
    })
}

/// Numeric value of an ASCII decimal digit.
fn digit_value(symbol: char) -> Result<u32, ChecksumError> {
    symbol
        .to_digit(10)
        .ok_or(ChecksumError::InvalidSymbol(symbol))
}
