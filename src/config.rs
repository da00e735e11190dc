// src/config.rs
//! Configuration — lazy-loaded global config with TOML + env override

use std::sync::OnceLock;

use serde::Deserialize;

use crate::consts::DEFAULT_CONFIG_PATH;
use crate::enums::WriteMode;
use crate::key::CipherKey;

/// Global config — loaded once at startup
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub cipher: CipherDefaults,
    pub output: OutputDefaults,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CipherDefaults {
    /// Shift used when `--key` is not passed; any integer, reduced mod 26
    pub default_key: CipherKey,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputDefaults {
    /// Append to existing output files instead of overwriting them
    pub append: bool,
}

impl OutputDefaults {
    pub fn write_mode(&self) -> WriteMode {
        if self.append {
            WriteMode::Append
        } else {
            WriteMode::Overwrite
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if the file is missing
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path = std::env::var("CLASSIC_CIPHER_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if std::path::Path::new(&config_path).exists() {
            let content = std::fs::read_to_string(&config_path)
                .expect("Failed to read cipher config file");
            toml::from_str(&content).expect("Invalid TOML in cipher config file")
        } else {
            Config::default()
        }
    })
}
