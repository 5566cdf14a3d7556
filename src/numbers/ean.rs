//! EAN (International Article Number): EAN-8, UPC-A (12 digits), EAN-13 and GTIN-14.
//!
//! The last digit is a check digit over the weights 3 and 1 alternating from the right.

use crate::alphabet::DIGITS;
use crate::checksum::weighted;
use crate::error::ValidationError;
use crate::util::{clean, is_digits, split_check};

const SEPARATORS: &str = " -";
const LENGTHS: &[usize] = &[8, 12, 13, 14];

pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).trim().to_string()
}

/// The check digit to append to `payload`.
pub fn calc_check_digit(payload: &str) -> Result<char, ValidationError> {
    // the digit next to the check digit has weight 3
    let weights: &[u32] = if payload.len() % 2 == 1 { &[3, 1] } else { &[1, 3] };
    let value = weighted::check_value(payload, &DIGITS, weights, 10, |sum| Some((10 - sum) % 10))?
        .ok_or(ValidationError::InvalidChecksum)?;
    Ok(DIGITS.symbol_for(value))
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if !LENGTHS.contains(&number.len()) {
        return Err(ValidationError::InvalidLength);
    }
    let (payload, check) = split_check(&number).ok_or(ValidationError::InvalidFormat)?;
    if calc_check_digit(payload)? != check {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

pub fn format(number: &str) -> String {
    compact(number)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_eans() {
        let valid_numbers = vec![
            "73513537",
            "978-0-471-11709-4",
            "9780471117094",
            "036000291452",
            "4006381333931",
            "98765432109213",
        ];
        for number in valid_numbers {
            println!("testing for input {number}");
            assert!(is_valid(number));
        }
    }

    #[test]
    fn test_invalid_eans() {
        let invalid_numbers = vec![
            ("73513536", ValidationError::InvalidChecksum),
            ("9780471117095", ValidationError::InvalidChecksum),
            ("978047111708", ValidationError::InvalidChecksum),
            ("97804711170", ValidationError::InvalidLength),
            ("978047111709X", ValidationError::InvalidFormat),
            ("", ValidationError::InvalidFormat),
        ];
        for (number, error) in invalid_numbers {
            println!("testing for input {number}");
            assert_eq!(validate(number), Err(error));
        }
    }

    #[test]
    fn check_digits() {
        assert_eq!(calc_check_digit("7351353"), Ok('7'));
        assert_eq!(calc_check_digit("978047111709"), Ok('4'));
        assert_eq!(calc_check_digit("97804711170A"), Err(ValidationError::InvalidFormat));
    }
}
