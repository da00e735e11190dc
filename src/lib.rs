// src/lib.rs
//! classic-cipher — alphanumeric transliteration + classical Caesar shift
//!
//! The pipeline has two stages:
//! - Transliteration: letters pass through uppercased, digits become
//!   spelled-out words, everything else is dropped
//! - Caesar transform: shift each letter by a bounded key, wrapping
//!   within the 26-letter alphabet
//!
//! Both stages are pure; all I/O lives in `file_ops` and the binary.

pub mod caesar;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod file_ops;
pub mod key;
pub mod pipeline;
pub mod translit;

// Re-export everything users need at the crate root
pub use caesar::{decrypt, encrypt, transform};
pub use config::load as load_config;
pub use enums::{Mode, WriteMode};
pub use error::CoreError;
pub use file_ops::{read_input, write_output};
pub use key::CipherKey;
pub use pipeline::{process, CipherRequest};
pub use translit::{transliterate, transliterate_char};

pub type Result<T> = std::result::Result<T, CoreError>;
