//! n° TVA (taxe sur la valeur ajoutée, the French VAT number).
//!
//! Two check characters followed by the SIREN of the company. The old style uses two digits,
//! the new style mixes digits and letters from an alphabet without `I` and `O`.

use crate::error::ValidationError;
use crate::numbers::fr::siren;
use crate::util::{clean, is_digits};

const SEPARATORS: &str = " -.";
const ALPHABET: &str = "0123456789ABCDEFGHJKLMNPQRSTUVWXYZ";

pub fn compact(number: &str) -> String {
    let number = clean(number, SEPARATORS).trim().to_uppercase();
    match number.strip_prefix("FR") {
        Some(rest) => rest.to_string(),
        None => number,
    }
}

fn value_of(symbol: char) -> Option<i64> {
    ALPHABET.find(symbol).map(|idx| idx as i64)
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    let mut symbols = number.chars();
    let (Some(first), Some(second)) = (symbols.next(), symbols.next()) else {
        return Err(ValidationError::InvalidFormat);
    };
    let (Some(first_value), Some(second_value)) = (value_of(first), value_of(second)) else {
        return Err(ValidationError::InvalidFormat);
    };
    let company = symbols.as_str();
    if !is_digits(company) {
        return Err(ValidationError::InvalidFormat);
    }
    if number.len() != 11 {
        return Err(ValidationError::InvalidLength);
    }
    // Monaco companies have a TVA number but no SIREN
    if !company.starts_with("000") {
        siren::validate(company)?;
    }

    let company_value = company
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat)?;
    let valid = if first.is_ascii_digit() && second.is_ascii_digit() {
        let check = first_value * 10 + second_value;
        check == (company_value * 100 + 12) % 97
    } else {
        let check = if first.is_ascii_digit() {
            first_value * 24 + second_value - 10
        } else {
            first_value * 34 + second_value - 100
        };
        (company_value + 1 + check / 11) % 11 == check % 11
    };
    if !valid {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// `FR cc ddd ddd ddd`
pub fn format(number: &str) -> String {
    let number = compact(number);
    match number.get(..2).zip(number.get(2..)) {
        Some((check, company)) if number.len() == 11 => {
            format!("FR {check} {}", siren::format(company))
        }
        _ => number,
    }
}
