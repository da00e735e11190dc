// src/key.rs
//! Bounded Caesar shift key
//!
//! A `CipherKey` is always in [0, 25]: construction reduces any integer
//! with floor-style modulo, so negative shifts of any magnitude land in
//! range (`-1` → 25, `-53` → 25).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::ALPHABET_LEN;
use crate::error::CoreError;

/// Caesar shift magnitude, held in [0, 25] by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct CipherKey(u8);

impl CipherKey {
    /// Key 0 — the identity transform
    pub const IDENTITY: CipherKey = CipherKey(0);

    /// Build a key from any integer, reducing modulo 26.
    // rem_euclid, not %: the result must be non-negative for any input.
    pub fn new(shift: i64) -> Self {
        Self(shift.rem_euclid(i64::from(ALPHABET_LEN)) as u8)
    }

    /// The normalized shift value, guaranteed in [0, 25]
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<i64> for CipherKey {
    fn from(shift: i64) -> Self {
        Self::new(shift)
    }
}

impl From<CipherKey> for i64 {
    fn from(key: CipherKey) -> Self {
        i64::from(key.0)
    }
}

impl FromStr for CipherKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let shift: i64 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidKey(s.to_string()))?;
        Ok(Self::new(shift))
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
