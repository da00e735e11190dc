// src/caesar.rs
//! Caesar shift transform over normalized (uppercase-only) text

use crate::consts::{ALPHABET_LEN, ALPHABET_START};
use crate::enums::Mode;
use crate::key::CipherKey;

/// Shift every letter of `text` by `key`, wrapping within ['A','Z'].
///
/// `text` is expected to be normalized (uppercase letters only); any other
/// character passes through unchanged rather than corrupting the stream.
pub fn transform(text: &str, key: CipherKey, mode: Mode) -> String {
    let shift = match mode {
        Mode::Encrypt => i16::from(key.value()),
        Mode::Decrypt => -i16::from(key.value()),
    };
    text.chars().map(|c| shift_letter(c, shift)).collect()
}

/// Encrypt normalized text with `key`
#[inline]
pub fn encrypt(text: &str, key: CipherKey) -> String {
    transform(text, key, Mode::Encrypt)
}

/// Decrypt normalized text with `key`
#[inline]
pub fn decrypt(text: &str, key: CipherKey) -> String {
    transform(text, key, Mode::Decrypt)
}

fn shift_letter(c: char, shift: i16) -> char {
    if !c.is_ascii_uppercase() {
        return c;
    }
    let pos = i16::from(c as u8 - ALPHABET_START);
    // Floor-style modulo: decrypting can make the intermediate negative.
    let wrapped = (pos + shift).rem_euclid(i16::from(ALPHABET_LEN)) as u8;
    (ALPHABET_START + wrapped) as char
}
