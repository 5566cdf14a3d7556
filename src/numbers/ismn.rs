//! ISMN (International Standard Music Number).
//!
//! The old ten character form is `M` followed by nine digits, the current one is an EAN-13 with
//! the `9790` prefix. Both share the same check digit, since `M` counts as `9790`.

use crate::data::ismn_publishers;
use crate::error::ValidationError;
use crate::numbers::ean;
use crate::util::{clean, is_digits};

const SEPARATORS: &str = " -.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsmnType {
    Ismn10,
    Ismn13,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsmnParts {
    pub prefix: String,
    pub group: String,
    pub publisher: String,
    pub item: String,
    pub check: String,
}

impl IsmnParts {
    pub fn as_array(&self) -> [&str; 5] {
        [
            &self.prefix,
            &self.group,
            &self.publisher,
            &self.item,
            &self.check,
        ]
    }
}

pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).trim().to_uppercase()
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    match number.len() {
        10 => {
            let digits = number
                .strip_prefix('M')
                .filter(|digits| is_digits(digits))
                .ok_or(ValidationError::InvalidFormat)?;
            ean::validate(&format!("9790{digits}"))?;
        }
        13 => {
            if !number.starts_with("9790") {
                return Err(ValidationError::InvalidComponent);
            }
            ean::validate(&number)?;
        }
        _ => return Err(ValidationError::InvalidLength),
    }
    Ok(number)
}

pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

pub fn ismn_type(number: &str) -> Option<IsmnType> {
    match validate(number).ok()?.len() {
        10 => Some(IsmnType::Ismn10),
        _ => Some(IsmnType::Ismn13),
    }
}

/// Converts a valid ISMN-10 to the 13 digit form, keeping the separator style of the input.
pub fn to_ismn13(number: &str) -> Result<String, ValidationError> {
    let trimmed = number.trim();
    if validate(trimmed)?.len() == 13 {
        return Ok(trimmed.to_string());
    }
    let rest = trimmed
        .strip_prefix(|c: char| c.eq_ignore_ascii_case(&'m'))
        .ok_or(ValidationError::InvalidFormat)?;
    Ok(if rest.contains(' ') {
        format!("979 0{rest}")
    } else if rest.contains('-') {
        format!("979-0{rest}")
    } else {
        format!("9790{rest}")
    })
}

/// Decomposes a valid ISMN into `979`, `0`, publisher, item and check digit. The publisher
/// length depends on its first digits.
pub fn split(number: &str) -> Result<IsmnParts, ValidationError> {
    let number = compact(&to_ismn13(number)?);
    let publishers = ismn_publishers().map_err(|_| ValidationError::InvalidComponent)?;
    match publishers.split(&number[4..12])?.as_slice() {
        [publisher, item] => Ok(IsmnParts {
            prefix: number[..3].to_string(),
            group: number[3..4].to_string(),
            publisher: publisher.to_string(),
            item: item.to_string(),
            check: number[12..].to_string(),
        }),
        _ => Err(ValidationError::InvalidComponent),
    }
}

pub fn format(number: &str, separator: &str) -> Result<String, ValidationError> {
    Ok(split(number)?.as_array().join(separator))
}
