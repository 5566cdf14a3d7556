//! SIREN (a French company identification number): nine digits with a Luhn check digit.

use crate::alphabet::DIGITS;
use crate::checksum::luhn;
use crate::error::ValidationError;
use crate::util::{clean, is_digits};

const SEPARATORS: &str = " .";

pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).trim().to_string()
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if !is_digits(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 9 {
        return Err(ValidationError::InvalidLength);
    }
    if !luhn::is_valid(&number, &DIGITS) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// `ddd ddd ddd`
pub fn format(number: &str) -> String {
    let number = compact(number);
    match (number.get(..3), number.get(3..6), number.get(6..)) {
        (Some(a), Some(b), Some(c)) if number.len() == 9 => format!("{a} {b} {c}"),
        _ => number,
    }
}

/// The numeric TVA (VAT) number of a company: two check digits followed by the SIREN.
pub fn to_tva(number: &str) -> Result<String, ValidationError> {
    let number = validate(number)?;
    let value = format!("{number}12")
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidFormat)?;
    Ok(format!("{:02}{number}", value % 97))
}
