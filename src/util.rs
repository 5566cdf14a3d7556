/// Maps look-alike Unicode characters to their ASCII counterpart.
fn normalize_char(c: char) -> char {
    match c {
        '\u{058A}' | '\u{05BE}' | '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}'
        | '\u{2014}' | '\u{2015}' | '\u{2043}' | '\u{2212}' | '\u{FE63}' | '\u{FF0D}' => '-',
        '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => ' ',
        '\u{00B7}' | '\u{2022}' | '\u{2024}' | '\u{2027}' | '\u{30FB}' | '\u{FF0E}' => '.',
        '\u{2044}' | '\u{2215}' | '\u{FF0F}' => '/',
        '\u{FF0C}' | '\u{3001}' => ',',
        '\u{FF1A}' => ':',
        '\u{FF10}'..='\u{FF19}' => char::from(b'0' + (c as u32 - 0xFF10) as u8),
        _ => c,
    }
}

/// Normalizes Unicode separators and digits to ASCII and removes every character of
/// `separators`.
pub fn clean(number: &str, separators: &str) -> String {
    number
        .chars()
        .map(normalize_char)
        .filter(|c| !separators.contains(*c))
        .collect()
}

/// Non-empty and only ASCII digits.
pub fn is_digits(number: &str) -> bool {
    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
}

/// Splits a number into its body and its last character (usually the check symbol).
pub fn split_check(number: &str) -> Option<(&str, char)> {
    let check = number.chars().next_back()?;
    Some((&number[..number.len() - check.len_utf8()], check))
}
