//! BSN (Burgerservicenummer, Dutch citizen identification number).
//!
//! Nine digits with the weights 9 down to 2 and -1 for the last one, the sum must be a multiple
//! of 11.

use crate::alphabet::DIGITS;
use crate::checksum::weighted;
use crate::error::ValidationError;
use crate::util::{clean, is_digits};

const SEPARATORS: &str = " -.";
// 10 is -1 modulo 11
const WEIGHTS: &[u32] = &[9, 8, 7, 6, 5, 4, 3, 2, 10];

/// Strips separators and pads to nine digits with leading zeros.
pub fn compact(number: &str) -> String {
    let number = clean(number, SEPARATORS).trim().to_string();
    format!("{number:0>9}")
}

pub fn checksum(number: &str) -> Result<u32, ValidationError> {
    Ok(weighted::weighted_sum(number, &DIGITS, WEIGHTS, 11)?)
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    // the padding alone would make an empty input pass
    if !is_digits(&number) || number.bytes().all(|b| b == b'0') {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 9 {
        return Err(ValidationError::InvalidLength);
    }
    if checksum(&number)? != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// `dddd.dd.ddd`
pub fn format(number: &str) -> String {
    let number = compact(number);
    match (number.get(..4), number.get(4..6), number.get(6..)) {
        (Some(a), Some(b), Some(c)) if number.len() == 9 => format!("{a}.{b}.{c}"),
        _ => number,
    }
}
