//! The Verhoeff dihedral group check digit over decimal digits.

use crate::checksum::{digit_value, ChecksumError};

const MULT_TABLE: [[u32; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const PERM_TABLE: [[u32; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Valid numbers have a checksum of 0.
pub fn checksum(digits: &str) -> Result<u32, ChecksumError> {
    let mut check = 0;
    for (idx, digit) in digits.chars().rev().enumerate() {
        let digit = digit_value(digit)?;
        check = MULT_TABLE[check as usize][PERM_TABLE[idx % 8][digit as usize] as usize];
    }
    Ok(check)
}

pub fn check_digit(digits: &str) -> Result<char, ChecksumError> {
    let check = checksum(&format!("{digits}0"))?;
    let inverse = MULT_TABLE[check as usize]
        .iter()
        .position(|value| *value == 0)
        .unwrap_or_default();
    Ok(char::from(b'0' + inverse as u8))
}

pub fn is_valid(digits: &str) -> bool {
    !digits.is_empty() && checksum(digits) == Ok(0)
}
