//! Luhn and Luhn mod N. With [`DIGITS`](crate::alphabet::DIGITS) this is the classic credit card
//! algorithm; any other alphabet gives the mod N generalisation.

use crate::alphabet::Alphabet;
use crate::checksum::{symbol_values, ChecksumError};

/// Sum of the symbols, every second one doubled, starting from the rightmost one which is not
/// doubled. Doubled values are folded back with `value / N + value % N`. Valid numbers have a
/// checksum of 0.
pub fn checksum(symbols: &str, alphabet: &Alphabet) -> Result<u32, ChecksumError> {
    let modulus = alphabet.modulus();
    let values = symbol_values(symbols, alphabet).collect::<Result<Vec<u32>, _>>()?;

    let mut sum = 0;
    for (idx, value) in values.into_iter().rev().enumerate() {
        if idx % 2 == 0 {
            sum += value;
        } else {
            let doubled = value * 2;
            sum += doubled / modulus + doubled % modulus;
        }
        sum %= modulus;
    }
    Ok(sum)
}

pub fn check_digit(symbols: &str, alphabet: &Alphabet) -> Result<char, ChecksumError> {
    let modulus = alphabet.modulus();
    let mut padded = String::with_capacity(symbols.len() + 1);
    padded.push_str(symbols);
    padded.push(alphabet.symbol_for(0));
    let sum = checksum(&padded, alphabet)?;
    Ok(alphabet.symbol_for(modulus - sum))
}

pub fn is_valid(symbols: &str, alphabet: &Alphabet) -> bool {
    !symbols.is_empty() && checksum(symbols, alphabet) == Ok(0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alphabet::{Alphabet, DIGITS};

    #[test]
    fn validate_various_credit_cards() {
        let credit_cards = vec![
            // source https://www.paypalobjects.com/en_AU/vhelp/paypalmanager_help/credit_card_numbers.htm
            // American Express
            "378282246310005",
            "371449635398431",
            // American Express Corporate
            "378734493671000",
            // Australian BankCard
            "5610591081018250",
            // Diners Club
            "30569309025904",
            "38520000023237",
            // Discover
            "6011111111111117",
            "6011000990139424",
            // JCB
            "3530111333300000",
            "3566002020360505",
            // MasterCard
            "5555555555554444",
            "5105105105105100",
            // Visa
            "4111111111111111",
            "4012888888881881",
            "4222222222222",
        ];
        for credit_card in credit_cards {
            println!("credit card input: {}", credit_card);
            assert!(is_valid(credit_card, &DIGITS));

            let (split_credit_card, last_digit) = credit_card.split_at(credit_card.len() - 1);
            let mut wrong_credit_card = split_credit_card.to_string();
            wrong_credit_card
                .push_str(&((last_digit.parse::<u32>().unwrap() + 1) % 10).to_string());

            println!("wrong credit card input: {}", wrong_credit_card);
            assert!(!is_valid(&wrong_credit_card, &DIGITS));
        }
    }

    #[test]
    fn reference_values() {
        assert_eq!(checksum("7894", &DIGITS), Ok(6));
        assert_eq!(check_digit("7894", &DIGITS), Ok('9'));
        assert!(is_valid("78949", &DIGITS));

        let hex = Alphabet::new("0123456789abcdef").unwrap();
        assert_eq!(checksum("1234", &hex), Ok(14));
        assert!(!is_valid("1234", &hex));
        assert_eq!(check_digit("1234", &hex), Ok('0'));
    }

    #[test]
    fn separators_are_not_skipped() {
        assert!(!is_valid("3782 822463 10005", &DIGITS));
        assert_eq!(
            checksum("3782 8", &DIGITS),
            Err(ChecksumError::InvalidSymbol(' '))
        );
        assert!(!is_valid("", &DIGITS));
    }

    #[test]
    fn undetected_transposition() {
        // swapping adjacent 0 and 9 keeps the sum
        assert!(is_valid("10900", &DIGITS));
        assert!(is_valid("19000", &DIGITS));
    }
}
