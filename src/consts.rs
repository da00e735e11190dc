// src/consts.rs
//! Shared constants — alphabet parameters and the digit word table

/// Number of letters in the cipher alphabet
pub const ALPHABET_LEN: u8 = 26;

/// First letter of the cipher alphabet
pub const ALPHABET_START: u8 = b'A';

/// English words for the ASCII digits, indexed by digit value.
// A lookup table rather than a match cascade so all 10 cases are
// verifiable at a glance.
pub const DIGIT_WORDS: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

/// Default config file name, overridable via `CLASSIC_CIPHER_CONFIG`
pub const DEFAULT_CONFIG_PATH: &str = "cipher-config.toml";
