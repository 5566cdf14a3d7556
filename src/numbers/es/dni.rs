//! DNI (Documento Nacional de Identidad, the Spanish personal identity number).
//!
//! Eight digits followed by a check letter, the letter at the position of the number modulo 23.

use crate::error::ValidationError;
use crate::util::{clean, is_digits, split_check};

const SEPARATORS: &str = " -";
const CHECK_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).trim().to_uppercase()
}

pub fn calc_check_digit(payload: &str) -> Result<char, ValidationError> {
    if !is_digits(payload) {
        return Err(ValidationError::InvalidFormat);
    }
    // folded digit by digit so the length is not bounded
    let remainder = payload
        .bytes()
        .fold(0, |acc, digit| (acc * 10 + u32::from(digit - b'0')) % 23);
    Ok(char::from(CHECK_LETTERS[remainder as usize]))
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    let (body, check) = split_check(&number).ok_or(ValidationError::InvalidFormat)?;
    if !is_digits(body) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 9 {
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
    compact(number)
}
