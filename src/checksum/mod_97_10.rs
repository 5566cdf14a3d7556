//! ISO 7064 Mod 97,10. The number is read as a base 10 integer in which letters expand to their
//! two digit base 36 value (`A` = 10 ... `Z` = 35). A valid number is 1 modulo 97, which takes
//! two check digits.

use crate::checksum::ChecksumError;

const MODULUS: u32 = 97;

/// The value of the number modulo 97, computed incrementally so the length is not bounded.
pub fn checksum(symbols: &str) -> Result<u32, ChecksumError> {
    symbols.chars().try_fold(0, |remainder, symbol| {
        let value = symbol
            .to_digit(36)
            .filter(|_| !symbol.is_ascii_lowercase())
            .ok_or(ChecksumError::InvalidSymbol(symbol))?;
        let shift = if value < 10 { 10 } else { 100 };
        Ok((remainder * shift + value) % MODULUS)
    })
}

/// The two digits to append to `symbols`, in `02..=98`.
pub fn check_digits(symbols: &str) -> Result<String, ChecksumError> {
    let remainder = checksum(symbols)?;
    Ok(format!("{:02}", 98 - (remainder * 100) % MODULUS))
}

pub fn is_valid(symbols: &str) -> bool {
    symbols.len() > 2 && checksum(symbols) == Ok(1)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_digits_reference_values() {
        assert_eq!(
            check_digits("80000821490000000009SE").as_deref(),
            Ok("98")
        );
        assert_eq!(check_digits("435411161155111400").as_deref(), Ok("91"));
        assert_eq!(
            check_digits("80000821490000000009se"),
            Err(ChecksumError::InvalidSymbol('s'))
        );
    }

    #[test]
    fn test_valid_numbers() {
        let valid_numbers = vec![
            "9999123456789012141490",
            "08686001256515001121751",
            "80000821490000000009SE98",
        ];
        for number in valid_numbers {
            println!("testing for input {number}");
            assert!(is_valid(number));
        }
    }

    #[test]
    fn test_invalid_numbers() {
        let invalid_numbers = vec!["80000821490000000009SE97", "01", "1", "", "8000-0821"];
        for number in invalid_numbers {
            println!("testing for input {number}");
            assert!(!is_valid(number));
        }
    }

    #[test]
    fn computed_check_digits_are_accepted() {
        for number in ["0", "ABC", "123456789", "NL000099998B"] {
            let check = check_digits(number).unwrap();
            assert!(is_valid(&format!("{number}{check}")));
        }
    }
}
