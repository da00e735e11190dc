// src/file_ops.rs
//! Input/output plumbing around the transform pipeline
//!
//! The core operates on in-memory strings only; this module owns reading
//! the whole input (file or stdin) and writing the result (file or stdout).

use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::enums::WriteMode;
use crate::error::CoreError;

/// Read the whole input into one string.
///
/// Reads from `path` when given, otherwise drains stdin to EOF.
pub fn read_input(path: Option<&Path>) -> Result<String, CoreError> {
    match path {
        Some(p) => Ok(std::fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write the transformed text plus a trailing newline.
///
/// Writes to `path` when given (created if missing; truncated on
/// `Overwrite`, extended on `Append`), otherwise to stdout.
pub fn write_output(path: Option<&Path>, text: &str, mode: WriteMode) -> Result<(), CoreError> {
    match path {
        Some(p) => {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .append(mode == WriteMode::Append)
                .truncate(mode == WriteMode::Overwrite)
                .open(p)?;
            writeln!(file, "{text}")?;
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            writeln!(stdout.lock(), "{text}")?;
            Ok(())
        }
    }
}
