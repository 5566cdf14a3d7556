//! RIC No. (Chinese Resident Identity Card Number).
//!
//! Eighteen characters: a six digit address code, the birth date as `YYYYMMDD`, a three digit
//! order code and an ISO 7064 Mod 11,2 check character (`X` for ten).

use crate::alphabet::DIGITS_X;
use crate::checksum::mod_n_2;
use crate::error::ValidationError;
use crate::util::{clean, is_digits, split_check};
use chrono::NaiveDate;

const SEPARATORS: &str = " -";
const LENGTH: usize = 18;

pub fn compact(number: &str) -> String {
    clean(number, SEPARATORS).trim().to_uppercase()
}

pub fn calc_check_digit(payload: &str) -> Result<char, ValidationError> {
    Ok(mod_n_2::check_digit(payload, &DIGITS_X)?)
}

/// The birth date encoded in the number.
pub fn birth_date(number: &str) -> Result<NaiveDate, ValidationError> {
    let number = compact(number);
    let field = |range: std::ops::Range<usize>| {
        number
            .get(range)
            .filter(|digits| is_digits(digits))
            .and_then(|digits| digits.parse::<u32>().ok())
            .ok_or(ValidationError::InvalidFormat)
    };
    let year = field(6..10)?;
    let month = field(10..12)?;
    let day = field(12..14)?;
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(ValidationError::InvalidComponent)
}

pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if number.len() != LENGTH {
        return Err(ValidationError::InvalidLength);
    }
    let (body, check) = split_check(&number).ok_or(ValidationError::InvalidFormat)?;
    if !is_digits(body) || !DIGITS_X.contains(check) {
        return Err(ValidationError::InvalidFormat);
    }
    if calc_check_digit(body)? != check {
        return Err(ValidationError::InvalidChecksum);
    }
    birth_date(&number)?;
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
    fn test_valid_chinese_ids() {
        let valid_ids = vec![
            "360426199101010071",
            "44011320141005001X",
            "44011320141005001x",
            "513231200012121657",
            "51323120001212169X",
        ];
        for id in valid_ids {
            println!("testing for input {id}");
            assert!(is_valid(id));
        }
    }

    #[test]
    fn test_invalid_chinese_ids() {
        let invalid_ids = vec![
            ("36042619910102009X", ValidationError::InvalidChecksum),
            ("360426199101010072", ValidationError::InvalidChecksum),
            ("36042619910101007", ValidationError::InvalidLength),
            ("36042619910101007Y", ValidationError::InvalidFormat),
            ("3604261991010A0071", ValidationError::InvalidFormat),
        ];
        for (id, error) in invalid_ids {
            println!("testing for input {id}");
            assert_eq!(validate(id), Err(error));
        }
    }

    #[test]
    fn impossible_birth_dates() {
        // 1991-02-30 with a matching check character
        let payload = "36042619910230007";
        let number = format!("{payload}{}", calc_check_digit(payload).unwrap());
        assert_eq!(validate(&number), Err(ValidationError::InvalidComponent));
    }

    #[test]
    fn birth_dates() {
        assert_eq!(
            birth_date("360426199101010071"),
            Ok(NaiveDate::from_ymd_opt(1991, 1, 1).unwrap())
        );
        assert_eq!(
            birth_date("44011320141005001X"),
            Ok(NaiveDate::from_ymd_opt(2014, 10, 5).unwrap())
        );
        assert_eq!(birth_date("440113"), Err(ValidationError::InvalidFormat));
    }
}
