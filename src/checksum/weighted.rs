//! Weighted positional sums. Every symbol value is multiplied by the weight of its position
//! (counted from the left, weights repeat when the input is longer than the weight list), the
//! products are summed and reduced modulo a fixed base.
//!
//! Standards use the sum in one of two ways: either the check symbol carries a weight too and the
//! whole number sums to 0 ([`is_valid`]), or the check symbol is derived from the remainder of
//! the payload ([`check_value`]).

use crate::alphabet::Alphabet;
use crate::checksum::{symbol_values, ChecksumError};

/// Fails with [`ChecksumError::InvalidParameters`] when `weights` is empty or `modulus` is 0.
pub fn weighted_sum(
    symbols: &str,
    alphabet: &Alphabet,
    weights: &[u32],
    modulus: u32,
) -> Result<u32, ChecksumError> {
    if weights.is_empty() || modulus == 0 {
        return Err(ChecksumError::InvalidParameters);
    }
    let mut sum = 0;
    for (value, weight) in symbol_values(symbols, alphabet).zip(weights.iter().cycle()) {
        sum = (sum + value? * weight) % modulus;
    }
    Ok(sum)
}

/// Whether the weighted sum over the full number (check symbol included) is 0. Invalid
/// parameters make every number invalid.
pub fn is_valid(symbols: &str, alphabet: &Alphabet, weights: &[u32], modulus: u32) -> bool {
    !symbols.is_empty() && weighted_sum(symbols, alphabet, weights, modulus) == Ok(0)
}

/// Maps the weighted remainder of `payload` to the value of its check symbol. `finish` returns
/// `None` for remainders the standard declares as not having a check symbol.
pub fn check_value(
    payload: &str,
    alphabet: &Alphabet,
    weights: &[u32],
    modulus: u32,
    finish: impl FnOnce(u32) -> Option<u32>,
) -> Result<Option<u32>, ChecksumError> {
    if payload.is_empty() {
        return Err(ChecksumError::EmptyInput);
    }
    let remainder = weighted_sum(payload, alphabet, weights, modulus)?;
    Ok(finish(remainder))
}
