//! ISO 7064 hybrid systems Mod N+1,N (Mod 11,10 over digits, Mod 37,36 over alphanumerics).

use crate::alphabet::Alphabet;
use crate::checksum::{symbol_values, ChecksumError};

pub fn checksum(symbols: &str, alphabet: &Alphabet) -> Result<u32, ChecksumError> {
    let modulus = alphabet.modulus();
    symbol_values(symbols, alphabet).try_fold(modulus / 2, |state, value| {
        Ok((product(state, modulus) + value?) % modulus)
    })
}

pub fn check_digit(symbols: &str, alphabet: &Alphabet) -> Result<char, ChecksumError> {
    let modulus = alphabet.modulus();
    let state = checksum(symbols, alphabet)?;
    Ok(alphabet.symbol_for(modulus + 1 - product(state, modulus)))
}

pub fn is_valid(symbols: &str, alphabet: &Alphabet) -> bool {
    !symbols.is_empty() && checksum(symbols, alphabet) == Ok(1)
}

/// `(state or N) * 2 mod (N + 1)`, where a zero state counts as N.
fn product(state: u32, modulus: u32) -> u32 {
    let state = if state == 0 { modulus } else { state };
    (state * 2) % (modulus + 1)
}
