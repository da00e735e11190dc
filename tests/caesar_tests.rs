// tests/caesar_tests.rs
use std::str::FromStr;

use classic_cipher::{decrypt, encrypt, transform, CipherKey, CoreError, Mode};

#[test]
fn test_key_zero_is_identity() {
    let text = "ATTACKATDAWN";
    assert_eq!(encrypt(text, CipherKey::IDENTITY), text);
    assert_eq!(decrypt(text, CipherKey::IDENTITY), text);
}

#[test]
fn test_roundtrip_for_every_key() {
    let text = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
    for shift in 0..26 {
        let key = CipherKey::new(shift);
        assert_eq!(decrypt(&encrypt(text, key), key), text, "key {shift}");
    }
}

#[test]
fn test_wraparound_at_alphabet_boundary() {
    let one = CipherKey::new(1);
    assert_eq!(encrypt("Z", one), "A");
    assert_eq!(decrypt("A", one), "Z");
    assert_eq!(encrypt("XYZ", CipherKey::new(3)), "ABC");
}

#[test]
fn test_known_vectors() {
    let three = CipherKey::new(3);
    assert_eq!(encrypt("HELLOONETWOTHREE", three), "KHOORRQHWZRWKUHH");
    // A(0)-2=-2→24='Y', B(1)-2=-1→25='Z', C(2)-2=0→'A'
    assert_eq!(decrypt("ABC", CipherKey::new(2)), "YZA");
}

#[test]
fn test_transform_modes_are_inverses() {
    let key = CipherKey::new(13);
    let shifted = transform("NORMALIZED", key, Mode::Encrypt);
    assert_eq!(transform(&shifted, key, Mode::Decrypt), "NORMALIZED");
}

#[test]
fn test_key_normalization_uses_floor_modulo() {
    assert_eq!(CipherKey::new(26), CipherKey::new(0));
    assert_eq!(CipherKey::new(27).value(), 1);
    assert_eq!(CipherKey::new(-1), CipherKey::new(25));
    // Below -26 still lands in range
    assert_eq!(CipherKey::new(-53).value(), 25);
    assert_eq!(CipherKey::new(-260).value(), 0);
    for shift in -100..100 {
        assert!(CipherKey::new(shift).value() < 26);
    }
}

#[test]
fn test_negative_key_shifts_like_its_normalized_form() {
    assert_eq!(
        encrypt("HELLO", CipherKey::new(-3)),
        encrypt("HELLO", CipherKey::new(23))
    );
}

#[test]
fn test_key_parsing() {
    assert_eq!(CipherKey::from_str("7").unwrap().value(), 7);
    assert_eq!(CipherKey::from_str("-3").unwrap().value(), 23);
    assert_eq!(CipherKey::from_str(" 12 ").unwrap().value(), 12);

    for bad in ["abc", "", "1.5", "5x"] {
        assert!(matches!(
            CipherKey::from_str(bad),
            Err(CoreError::InvalidKey(_))
        ));
    }
}

#[test]
fn test_non_uppercase_passes_through_unchanged() {
    // Contract violation input is not corrupted further
    assert_eq!(encrypt("A B", CipherKey::new(1)), "B C");
}
