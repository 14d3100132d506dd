//! Digit glyph transliteration between Latin and Persian numerals.

use crate::consts::{LATIN_DIGITS, PERSIAN_DIGITS};

/// Replaces every ASCII digit in `text` with its Persian glyph.
/// All other characters, Persian letters included, are copied through untouched.
pub fn to_persian_digits(text: &str) -> String {
    log::trace!("to_persian_digits: {} bytes", text.len());
    text.chars().map(persian_digit).collect()
}

/// Replaces every Persian digit glyph in `text` with its ASCII digit.
/// Arabic-Indic digits (U+0660..=U+0669) are a different script and are left alone.
pub fn to_latin_digits(text: &str) -> String {
    log::trace!("to_latin_digits: {} bytes", text.len());
    text.chars().map(latin_digit).collect()
}

#[inline]
fn persian_digit(c: char) -> char {
    // `to_digit` only accepts ASCII digits for radix 10
    c.to_digit(10).map_or(c, |d| PERSIAN_DIGITS[d as usize])
}

#[inline]
fn latin_digit(c: char) -> char {
    PERSIAN_DIGITS
        .iter()
        .position(|&p| p == c)
        .map_or(c, |i| LATIN_DIGITS[i])
}
