// src/bin/classic_cipher.rs
//! classic-cipher CLI — reads text, normalizes it, optionally shifts it

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use classic_cipher::{
    load_config, process, read_input, write_output, CipherKey, CipherRequest, Mode, WriteMode,
};

#[derive(Parser, Debug)]
#[command(
    name = "classic-cipher",
    version,
    about = "Encrypts/decrypts input alphanumeric text using a classical Caesar cipher"
)]
struct Cli {
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Read text to be processed from FILE (stdin if not supplied)"
    )]
    input: Option<PathBuf>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write processed text to FILE (stdout if not supplied)"
    )]
    output: Option<PathBuf>,

    #[arg(
        short = 'k',
        long = "key",
        value_name = "N",
        allow_negative_numbers = true,
        help = "Caesar shift key; any integer, reduced modulo 26"
    )]
    key: Option<CipherKey>,

    #[arg(
        short = 'e',
        long = "encrypt",
        conflicts_with = "decrypt",
        help = "Encrypt the transliterated text"
    )]
    encrypt: bool,

    #[arg(short = 'd', long = "decrypt", help = "Decrypt the transliterated text")]
    decrypt: bool,

    #[arg(long, help = "Append to the output file instead of overwriting it")]
    append: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config();

    let mode = if cli.encrypt {
        Some(Mode::Encrypt)
    } else if cli.decrypt {
        Some(Mode::Decrypt)
    } else {
        None
    };
    let key = cli.key.unwrap_or(config.cipher.default_key);
    let request = mode.map(|mode| CipherRequest { key, mode });

    let write_mode = if cli.append {
        WriteMode::Append
    } else {
        config.output.write_mode()
    };

    let raw = read_input(cli.input.as_deref()).with_context(|| match &cli.input {
        Some(path) => format!("problem reading file '{}'", path.display()),
        None => "problem reading stdin".to_string(),
    })?;
    info!(bytes = raw.len(), "input read");

    let transformed = process(&raw, request);

    write_output(cli.output.as_deref(), &transformed, write_mode).with_context(
        || match &cli.output {
            Some(path) => format!("problem writing file '{}'", path.display()),
            None => "problem writing stdout".to_string(),
        },
    )?;
    info!(
        letters = transformed.len(),
        ciphered = request.is_some(),
        "output written"
    );

    Ok(())
}
