//! Ust ID Nr. (Umsatzsteuer Identifikationsnummer, the German VAT number).
//!
//! Nine digits, the first one non-zero and the last one an ISO 7064 Mod 11,10 check digit.

use crate::alphabet::DIGITS;
use crate::checksum::mod_n_1_n;
use crate::error::ValidationError;
use crate::util::{clean, is_digits};

const SEPARATORS: &str = " -./,";

pub fn compact(number: &str) -> String {
    let number = clean(number, SEPARATORS).trim().to_uppercase();
    match number.strip_prefix("DE") {
        Some(rest) => rest.to_string(),
        None => number,
    }
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if !is_digits(&number) || number.starts_with('0') {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 9 {
        return Err(ValidationError::InvalidLength);
    }
    if !mod_n_1_n::is_valid(&number, &DIGITS) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

pub fn format(number: &str) -> String {
    format!("DE{}", compact(number))
}
