//! ISSN (International Standard Serial Number): seven digits and a mod 11 check digit.

use crate::alphabet::{DIGITS, DIGITS_X};
use crate::checksum::weighted;
use crate::error::ValidationError;
use crate::numbers::ean;
use crate::util::{clean, is_digits, split_check};

const SEPARATORS: &str = " -";
const WEIGHTS: &[u32] = &[8, 7, 6, 5, 4, 3, 2];

pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).trim().to_uppercase()
}

pub fn calc_check_digit(payload: &str) -> Result<char, ValidationError> {
    let value = weighted::check_value(payload, &DIGITS, WEIGHTS, 11, |sum| Some((11 - sum) % 11))?
        .ok_or(ValidationError::InvalidChecksum)?;
    Ok(DIGITS_X.symbol_for(value))
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    let (body, check) = split_check(&number).ok_or(ValidationError::InvalidFormat)?;
    if !is_digits(body) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 8 {
        return Err(ValidationError::InvalidLength);
    }
    if calc_check_digit(body)? != check {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

pub fn format(number: &str) -> String {
    let number = compact(number);
    match number.get(..4).zip(number.get(4..)) {
        Some((head, tail)) if !tail.is_empty() => format!("{head}-{tail}"),
        _ => number,
    }
}

/// The EAN-13 of a valid ISSN, `977` + the number without its check digit + the issue code.
pub fn to_ean(number: &str, issue_code: &str) -> Result<String, ValidationError> {
    let number = validate(number)?;
    if issue_code.len() != 2 || !is_digits(issue_code) {
        return Err(ValidationError::InvalidFormat);
    }
    let payload = format!("977{}{issue_code}", &number[..7]);
    let check = ean::calc_check_digit(&payload)?;
    Ok(format!("{payload}{check}"))
}
