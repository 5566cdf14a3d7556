use std::fmt;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("An alphabet needs at least two symbols")]
    TooShort,

    #[error("The symbol {0:?} appears more than once in the alphabet")]
    DuplicateSymbol(char),
}

/// An ordered set of distinct symbols. The position of a symbol is its value and the number of
/// symbols is the modulus used by the checksum algorithms.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet<'a> {
    symbols: &'a str,
    len: usize,
}

pub const DIGITS: Alphabet<'static> = Alphabet::from_static("0123456789");
/// Digits with `X` standing for ten (ISO 7064 Mod 11,2, ISBN-10, ISSN).
pub const DIGITS_X: Alphabet<'static> = Alphabet::from_static("0123456789X");
pub const ALPHANUMERIC: Alphabet<'static> =
    Alphabet::from_static("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");
/// Alphanumerics with `*` as the 37th symbol (ISO 7064 Mod 37,2).
pub const ALPHANUMERIC_STAR: Alphabet<'static> =
    Alphabet::from_static("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*");

impl Alphabet<'static> {
    /// Builds an alphabet out of a constant ASCII string. Misuse is reported when the constant
    /// is evaluated, so a bad alphabet never makes it past compilation.
    pub const fn from_static(symbols: &'static str) -> Self {
        let bytes = symbols.as_bytes();
        assert!(bytes.len() >= 2, "an alphabet needs at least two symbols");
        let mut i = 0;
        while i < bytes.len() {
            assert!(bytes[i].is_ascii(), "static alphabets must be ASCII");
            let mut j = i + 1;
            while j < bytes.len() {
                assert!(bytes[i] != bytes[j], "duplicate symbol in alphabet");
                j += 1;
            }
            i += 1;
        }
        Alphabet {
            symbols,
            len: bytes.len(),
        }
    }
}

impl<'a> Alphabet<'a> {
    pub fn new(symbols: &'a str) -> Result<Self, AlphabetError> {
        let mut len = 0;
        for (idx, symbol) in symbols.chars().enumerate() {
            if symbols.chars().skip(idx + 1).any(|other| other == symbol) {
                return Err(AlphabetError::DuplicateSymbol(symbol));
            }
            len += 1;
        }
        if len < 2 {
            return Err(AlphabetError::TooShort);
        }
        Ok(Alphabet { symbols, len })
    }

    pub fn modulus(&self) -> u32 {
        self.len as u32
    }

    pub fn as_str(&self) -> &'a str {
        self.symbols
    }

    pub fn index_of(&self, symbol: char) -> Option<u32> {
        if self.symbols.is_ascii() {
            if !symbol.is_ascii() {
                return None;
            }
            return self
                .symbols
                .as_bytes()
                .iter()
                .position(|b| *b == symbol as u8)
                .map(|idx| idx as u32);
        }
        self.symbols
            .chars()
            .position(|c| c == symbol)
            .map(|idx| idx as u32)
    }

    /// The symbol at `index`, which must be below the modulus.
    pub fn symbol(&self, index: u32) -> Option<char> {
        if self.symbols.is_ascii() {
            return self
                .symbols
                .as_bytes()
                .get(index as usize)
                .map(|b| *b as char);
        }
        self.symbols.chars().nth(index as usize)
    }

    /// The symbol whose value is `value mod N`.
    pub fn symbol_for(&self, value: u32) -> char {
        match self.symbol(value % self.modulus()) {
            Some(symbol) => symbol,
            None => unreachable!("the index is always below the number of symbols"),
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }
}

impl fmt::Debug for Alphabet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.symbols).finish()
    }
}
