//! The Damm algorithm: a totally anti-symmetric quasigroup of order 10 that catches every single
//! digit error and every adjacent transposition.

use crate::checksum::{digit_value, ChecksumError};

const OPERATION_TABLE: [[u32; 10]; 10] = [
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];

/// Valid numbers have a checksum of 0.
pub fn checksum(digits: &str) -> Result<u32, ChecksumError> {
    digits.chars().try_fold(0, |interim, digit| {
        Ok(OPERATION_TABLE[interim as usize][digit_value(digit)? as usize])
    })
}

/// The table has a zero diagonal, so the interim digit is its own check digit.
pub fn check_digit(digits: &str) -> Result<char, ChecksumError> {
    let interim = checksum(digits)?;
    Ok(char::from(b'0' + interim as u8))
}

pub fn is_valid(digits: &str) -> bool {
    !digits.is_empty() && checksum(digits) == Ok(0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reference_values() {
        assert!(!is_valid("572"));
        assert_eq!(check_digit("572"), Ok('4'));
        assert!(is_valid("5724"));
        assert_eq!(checksum("57X"), Err(ChecksumError::InvalidSymbol('X')));
    }

    #[test]
    fn detects_adjacent_transpositions() {
        let valid = "5724";
        let digits: Vec<char> = valid.chars().collect();
        for idx in 0..digits.len() - 1 {
            if digits[idx] == digits[idx + 1] {
                continue;
            }
            let mut swapped = digits.clone();
            swapped.swap(idx, idx + 1);
            let swapped: String = swapped.into_iter().collect();
            println!("testing for input {swapped}");
            assert!(!is_valid(&swapped));
        }
    }
}
