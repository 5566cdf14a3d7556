//! IBAN (International Bank Account Number).
//!
//! The check digits are verified with ISO 7064 Mod 97,10 on the rearranged number, the country
//! specific BBAN structure by the `iban_validate` registry.

use crate::checksum::mod_97_10;
use crate::error::ValidationError;
use crate::util::clean;
use iban::Iban;
use lazy_static::lazy_static;
use regex::Regex;

const SEPARATORS: &str = " -.";

lazy_static! {
    static ref IBAN_SHAPE: Regex = Regex::new("^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$").unwrap();
}

pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).trim().to_uppercase()
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if !IBAN_SHAPE.is_match(&number) {
        return Err(ValidationError::InvalidFormat);
    }
    let (head, bban) = number.split_at(4);
    if !mod_97_10::is_valid(&format!("{bban}{head}")) {
        return Err(ValidationError::InvalidChecksum);
    }
    // unknown countries and BBANs not matching the country's layout
    if number.parse::<Iban>().is_err() {
        return Err(ValidationError::InvalidComponent);
    }
    Ok(number)
}

pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Groups of four characters separated by spaces.
pub fn format(number: &str) -> String {
    compact(number)
        .chars()
        .collect::<Vec<_>>()
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_ibans() {
        let valid_ibans = vec![
            "GR16 0110 1050 0000 1054 7023 795",
            "BE31435411161155",
            "DE44500105175407324931",
            "DE4450-0105-1754-0732-4931",
            "KZ86 125K ZT50 0410 0100",
            "de44 5001 0517 5407 3249 31",
        ];
        for iban in valid_ibans {
            println!("testing for input {iban}");
            assert!(is_valid(iban));
        }
    }

    #[test]
    fn test_invalid_ibans() {
        let invalid_ibans = vec![
            ("DE45500105175407324931", ValidationError::InvalidChecksum),
            ("ZZZFO6666000000000000031231ZZZ", ValidationError::InvalidFormat),
            ("DE44", ValidationError::InvalidFormat),
            ("", ValidationError::InvalidFormat),
        ];
        for (iban, error) in invalid_ibans {
            println!("testing for input {iban}");
            assert_eq!(validate(iban), Err(error));
        }
        // the BBAN layout of Albania has no letters at this position
        assert!(!is_valid("AL84212110090000AB023569874"));
    }

    #[test]
    fn formatting() {
        assert_eq!(
            format("GR1601101050000010547023795"),
            "GR16 0110 1050 0000 1054 7023 795"
        );
        assert_eq!(format("be31-4354-1116-1155"), "BE31 4354 1116 1155");
    }
}
