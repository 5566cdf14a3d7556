//! Btw-identificatienummer (Omzetbelastingnummer, the Dutch VAT number).
//!
//! A BSN or RSIN followed by `B` and a two digit branch number. Numbers issued to sole
//! proprietors since 2020 no longer embed the BSN; they validate with ISO 7064 Mod 97,10 over the
//! `NL` prefixed number instead.

use crate::checksum::mod_97_10;
use crate::error::ValidationError;
use crate::numbers::nl::bsn;
use crate::util::{clean, is_digits};

const SEPARATORS: &str = " -.";

pub fn compact(number: &str) -> String {
    let number = clean(number, SEPARATORS).trim().to_uppercase();
    let number = number.strip_prefix("NL").unwrap_or(&number);
    match number.len().checked_sub(3) {
        Some(split) if number.is_char_boundary(split) => {
            let (head, tail) = number.split_at(split);
            format!("{}{tail}", bsn::compact(head))
        }
        _ => number.to_string(),
    }
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    let (Some(head), Some(branch)) = (number.get(..9), number.get(10..)) else {
        return Err(ValidationError::InvalidFormat);
    };
    if !is_digits(head) || head.bytes().all(|b| b == b'0') {
        return Err(ValidationError::InvalidFormat);
    }
    if !is_digits(branch) || branch.bytes().all(|b| b == b'0') {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 12 {
        return Err(ValidationError::InvalidLength);
    }
    if number.as_bytes()[9] != b'B' {
        return Err(ValidationError::InvalidFormat);
    }
    if !bsn::is_valid(head) && !mod_97_10::is_valid(&format!("NL{number}")) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

pub fn format(number: &str) -> String {
    format!("NL{}", compact(number))
}
