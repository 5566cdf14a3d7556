//! ISBN (International Standard Book Number).
//!
//! ISBN-10 ends with a mod 11 check digit (`X` for ten), ISBN-13 is an EAN-13 with the Bookland
//! prefix `978` or `979`. Both decompose into a registration group, a registrant and a
//! publication element whose lengths come from the bundled range database.

use crate::alphabet::{DIGITS, DIGITS_X};
use crate::checksum::weighted;
use crate::config::FormatConfig;
use crate::data::isbn_ranges;
use crate::error::ValidationError;
use crate::numbers::ean;
use crate::util::{clean, is_digits, split_check};

const SEPARATORS: &str = " -";
const BOOKLAND: &[&str] = &["978", "979"];
const ISBN10_WEIGHTS: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnType {
    Isbn10,
    Isbn13,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsbnParts {
    /// `978` or `979`, empty for an ISBN-10 that was not converted.
    pub prefix: String,
    pub group: String,
    pub registrant: String,
    pub publication: String,
    pub check: String,
}

impl IsbnParts {
    pub fn as_array(&self) -> [&str; 5] {
        [
            &self.prefix,
            &self.group,
            &self.registrant,
            &self.publication,
            &self.check,
        ]
    }
}

/// Strips separators and uppercases. Nine digit SBNs get their leading zero back, and with
/// `convert` an ISBN-10 is turned into an ISBN-13.
pub fn compact(number: &str, convert: bool) -> String {
    let mut number = clean(number, SEPARATORS).trim().to_uppercase();
    if number.len() == 9 {
        number.insert(0, '0');
    }
    if convert && number.len() == 10 {
        if let Some(converted) = bookland(&number) {
            return converted;
        }
    }
    number
}

fn bookland(isbn10: &str) -> Option<String> {
    let (body, _) = split_check(isbn10)?;
    let payload = format!("978{body}");
    let check = ean::calc_check_digit(&payload).ok()?;
    Some(format!("{payload}{check}"))
}

fn calc_isbn10_check_digit(payload: &str) -> Result<char, ValidationError> {
    let value = weighted::check_value(payload, &DIGITS, ISBN10_WEIGHTS, 11, Some)?
        .ok_or(ValidationError::InvalidChecksum)?;
    Ok(DIGITS_X.symbol_for(value))
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number, false);
    let (body, check) = split_check(&number).ok_or(ValidationError::InvalidFormat)?;
    if !is_digits(body) {
        return Err(ValidationError::InvalidFormat);
    }
    match number.len() {
        10 => {
            if calc_isbn10_check_digit(body)? != check {
                return Err(ValidationError::InvalidChecksum);
            }
        }
        13 => {
            ean::validate(&number)?;
            if !BOOKLAND.contains(&&number[..3]) {
                return Err(ValidationError::InvalidComponent);
            }
        }
        _ => return Err(ValidationError::InvalidLength),
    }
    Ok(number)
}

pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

pub fn isbn_type(number: &str) -> Option<IsbnType> {
    match validate(number).ok()?.len() {
        10 => Some(IsbnType::Isbn10),
        _ => Some(IsbnType::Isbn13),
    }
}

/// Converts a valid ISBN-10 to ISBN-13, keeping the separator style of the input. ISBN-13
/// input is returned as is.
pub fn to_isbn13(number: &str) -> Result<String, ValidationError> {
    let trimmed = number.trim();
    let min_number = validate(trimmed)?;
    if min_number.len() == 13 {
        return Ok(trimmed.to_string());
    }
    // SBNs miss the leading zero, only the compact form has it
    let source = if clean(trimmed, SEPARATORS).len() == 10 {
        trimmed
    } else {
        min_number.as_str()
    };
    let (body, _) = split_check(source).ok_or(ValidationError::InvalidFormat)?;
    let converted = if body.contains(' ') {
        format!("978 {body}")
    } else if body.contains('-') {
        format!("978-{body}")
    } else {
        format!("978{body}")
    };
    let check = ean::calc_check_digit(&compact(&converted, false))?;
    Ok(format!("{converted}{check}"))
}

/// Converts a valid `978` ISBN-13 to ISBN-10, keeping the separator style of the input.
pub fn to_isbn10(number: &str) -> Result<String, ValidationError> {
    let trimmed = number.trim();
    let min_number = validate(trimmed)?;
    if min_number.len() == 10 {
        return Ok(trimmed.to_string());
    }
    // 979 numbers have no ISBN-10 form
    let rest = trimmed
        .strip_prefix("978")
        .ok_or(ValidationError::InvalidComponent)?;
    let (body, _) = split_check(rest).ok_or(ValidationError::InvalidFormat)?;
    let body = body.trim().trim_matches('-');
    let check = calc_isbn10_check_digit(&min_number[3..12])?;
    Ok(if body.contains(' ') {
        format!("{body} {check}")
    } else if body.contains('-') {
        format!("{body}-{check}")
    } else {
        format!("{body}{check}")
    })
}

/// Decomposes the number with the registration group ranges. The check digit is not verified,
/// unassigned groups or registrants fail with [`ValidationError::InvalidComponent`].
pub fn split(number: &str, convert: bool) -> Result<IsbnParts, ValidationError> {
    let number = compact(number, convert);
    let (body, check) = split_check(&number).ok_or(ValidationError::InvalidFormat)?;
    if !is_digits(body) {
        return Err(ValidationError::InvalidFormat);
    }
    let (has_prefix, digits) = match number.len() {
        10 => (false, format!("978{body}")),
        13 => (true, body.to_string()),
        _ => return Err(ValidationError::InvalidLength),
    };

    let ranges = isbn_ranges().map_err(|_| ValidationError::InvalidComponent)?;
    match ranges.split(&digits)?.as_slice() {
        [prefix, group, registrant, publication] => Ok(IsbnParts {
            prefix: if has_prefix {
                prefix.to_string()
            } else {
                String::new()
            },
            group: group.to_string(),
            registrant: registrant.to_string(),
            publication: publication.to_string(),
            check: check.to_string(),
        }),
        _ => Err(ValidationError::InvalidComponent),
    }
}

/// The agency in charge of the registration group.
pub fn agency(number: &str) -> Result<String, ValidationError> {
    let number = compact(number, true);
    let digits = split_check(&number)
        .map(|(body, _)| body)
        .filter(|body| body.len() == 12 && is_digits(body))
        .ok_or(ValidationError::InvalidFormat)?;
    let ranges = isbn_ranges().map_err(|_| ValidationError::InvalidComponent)?;
    ranges
        .info(digits)?
        .get(1)
        .and_then(|group| group.property("agency"))
        .map(str::to_string)
        .ok_or(ValidationError::InvalidComponent)
}

pub fn format(number: &str, config: &FormatConfig) -> Result<String, ValidationError> {
    let parts = split(number, config.convert)?;
    Ok(parts
        .as_array()
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(config.separator.as_str()))
}
