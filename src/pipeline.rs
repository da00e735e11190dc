// src/pipeline.rs
//! Transform pipeline — transliterate, then optionally shift

use serde::{Deserialize, Serialize};

use crate::caesar::transform;
use crate::enums::Mode;
use crate::key::CipherKey;
use crate::translit::transliterate;

/// A validated cipher selection: which direction, with which key.
///
/// Built by the collaborator (CLI/config) before the core runs; key range
/// and direction exclusivity are enforced there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherRequest {
    pub key: CipherKey,
    pub mode: Mode,
}

/// Run the full pipeline over one input.
///
/// Transliterates `raw`, then applies the Caesar transform if a cipher was
/// requested. Pure; a single pass per stage.
pub fn process(raw: &str, cipher: Option<CipherRequest>) -> String {
    let normalized = transliterate(raw);
    match cipher {
        Some(request) => transform(&normalized, request.key, request.mode),
        None => normalized,
    }
}
