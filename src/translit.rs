// src/translit.rs
//! Character transliteration — the normalization stage of the pipeline
//!
//! Every input character has a defined mapping: letters uppercase, digits
//! expand to words, everything else maps to nothing. No error conditions.

use std::borrow::Cow;

use crate::consts::DIGIT_WORDS;

/// Transliterate a single character to zero or more uppercase letters.
///
/// - ASCII letter → its uppercase form (one character)
/// - ASCII digit → the spelled-out English word (`'3'` → `"THREE"`)
/// - anything else → the empty string (the character is dropped)
pub fn transliterate_char(c: char) -> Cow<'static, str> {
    if c.is_ascii_alphabetic() {
        return Cow::Owned(c.to_ascii_uppercase().to_string());
    }
    if c.is_ascii_digit() {
        let digit = (c as u8 - b'0') as usize;
        return Cow::Borrowed(DIGIT_WORDS[digit]);
    }
    Cow::Borrowed("")
}

/// Transliterate a whole input, concatenating per-character outputs in order.
///
/// Post-condition: every byte of the result is in `b'A'..=b'Z'`.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        out.push_str(&transliterate_char(c));
    }
    out
}
