//! ISO 7064 pure systems with radix 2 (Mod 11,2, Mod 37,2 and any other Mod N,2).
//!
//! The modulus is the size of the alphabet, so a different alphabet gives a different system:
//! [`DIGITS_X`](crate::alphabet::DIGITS_X) is Mod 11,2 and
//! [`ALPHANUMERIC_STAR`](crate::alphabet::ALPHANUMERIC_STAR) is Mod 37,2.

use crate::alphabet::Alphabet;
use crate::checksum::{symbol_values, ChecksumError};

/// Folds every symbol into `state = (2 * state + value) mod N`. A complete number has a
/// checksum of 1.
pub fn checksum(symbols: &str, alphabet: &Alphabet) -> Result<u32, ChecksumError> {
    let modulus = alphabet.modulus();
    symbol_values(symbols, alphabet)
        .try_fold(0, |state, value| Ok((2 * state + value?) % modulus))
}

/// The symbol that has to be appended to `symbols` to get a checksum of 1.
///
/// The recurrence is affine in its last term, so the symbol is solved for directly:
/// `alphabet[(1 - 2 * checksum) mod N]`.
pub fn check_digit(symbols: &str, alphabet: &Alphabet) -> Result<char, ChecksumError> {
    let modulus = alphabet.modulus();
    let state = checksum(symbols, alphabet)?;
    Ok(alphabet.symbol_for(1 + 2 * modulus - 2 * state))
}

/// Whether `symbols` is a non-empty number that carries a correct check symbol. Symbols outside
/// of the alphabet make the number invalid.
pub fn is_valid(symbols: &str, alphabet: &Alphabet) -> bool {
    !symbols.is_empty() && checksum(symbols, alphabet) == Ok(1)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alphabet::{ALPHANUMERIC_STAR, DIGITS_X};
    use iso_iec_7064::{System, MOD_11_2, MOD_37_2};

    #[test]
    fn mod_37_2_reference_value() {
        assert_eq!(check_digit("G123489654321", &ALPHANUMERIC_STAR), Ok('Y'));
        assert!(is_valid("G123489654321Y", &ALPHANUMERIC_STAR));
        assert_eq!(checksum("G123489654321Y", &ALPHANUMERIC_STAR), Ok(1));
    }

    #[test]
    fn mod_11_2_reference_value() {
        assert_eq!(check_digit("079", &DIGITS_X), Ok('X'));
        assert!(is_valid("079X", &DIGITS_X));
        assert_eq!(checksum("079X", &DIGITS_X), Ok(1));
        assert_eq!(check_digit("0794", &DIGITS_X), Ok('0'));
        assert!(is_valid("07940", &DIGITS_X));
    }

    #[test]
    fn computed_check_digit_is_accepted() {
        let numbers = vec!["0", "1", "G12348965432", "HELLO*WORLD", "000000000", "ZZZZZZ"];
        for number in numbers {
            let check = check_digit(number, &ALPHANUMERIC_STAR).unwrap();
            let full = format!("{number}{check}");
            println!("testing for input {full}");
            assert!(is_valid(&full, &ALPHANUMERIC_STAR));
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(checksum("", &DIGITS_X), Ok(0));
        assert_eq!(check_digit("", &DIGITS_X), Ok('1'));
        assert!(!is_valid("", &DIGITS_X));
        assert!(is_valid("1", &DIGITS_X));
    }

    #[test]
    fn invalid_symbols() {
        assert_eq!(
            checksum("079x", &DIGITS_X),
            Err(ChecksumError::InvalidSymbol('x'))
        );
        assert_eq!(
            check_digit("G12-3", &ALPHANUMERIC_STAR),
            Err(ChecksumError::InvalidSymbol('-'))
        );
        let invalid = vec!["079x", "07 9X", "0795\u{1F385}", "ABC"];
        for number in invalid {
            println!("testing for input {number}");
            assert!(!is_valid(number, &DIGITS_X));
        }
    }

    #[test]
    fn checksum_is_deterministic() {
        let first = checksum("G123489654321Y", &ALPHANUMERIC_STAR);
        for _ in 0..10 {
            assert_eq!(checksum("G123489654321Y", &ALPHANUMERIC_STAR), first);
        }
    }

    #[test]
    fn single_substitutions_are_detected() {
        // The weight of position i is 2^(n-i) mod N, which is never 0 for an odd prime modulus,
        // so changing a single symbol always changes the checksum for Mod 11,2 and Mod 37,2.
        let valid = "G123489654321Y";
        let symbols: Vec<char> = valid.chars().collect();
        for position in 0..symbols.len() {
            for replacement in ALPHANUMERIC_STAR.as_str().chars() {
                if replacement == symbols[position] {
                    continue;
                }
                let mut mutated = symbols.clone();
                mutated[position] = replacement;
                let mutated: String = mutated.into_iter().collect();
                assert!(!is_valid(&mutated, &ALPHANUMERIC_STAR), "{mutated}");
            }
        }
    }

    #[test]
    fn agrees_with_iso_iec_7064() {
        let numbers = vec![
            "513231200012121657",
            "51323120001212169X",
            "513231200012121293",
            "079X",
            "07940",
            "07941",
        ];
        for number in numbers {
            println!("testing for input {number}");
            assert_eq!(
                is_valid(number, &DIGITS_X),
                MOD_11_2.validate_string(number)
            );
        }

        let numbers = vec!["G123489654321Y", "G123489654321Z", "A1B2C3*"];
        for number in numbers {
            println!("testing for input {number}");
            assert_eq!(
                is_valid(number, &ALPHANUMERIC_STAR),
                MOD_37_2.validate_string(number)
            );
        }
    }
}
