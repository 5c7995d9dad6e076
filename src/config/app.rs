use super::defaults::*;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use crate::core::Result;
use crate::enums::LengthPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_lengths")]
    pub lengths: Lengths,
    #[serde(default = "default_logging")]
    pub logging: Logging,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lengths {
    #[serde(default)]
    pub policy: LengthPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Logging {
    #[serde(default = "default_fingerprint_layouts")]
    pub fingerprint_layouts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lengths: default_lengths(),
            logging: default_logging(),
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parse a TOML document; missing sections take their defaults
pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Read the config file named by `AEAD_BUFFERS_CONFIG` (or the default file)
///
/// A missing file is not an error: built-in defaults are returned.
pub fn try_load() -> Result<Config> {
    let config_path = std::env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "config file not found, using defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&config_path)?;
    parse(&content)
}

/// Global config: loaded once, falls back to defaults on any error
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        try_load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "unusable config, using built-in defaults");
            Config::default()
        })
    })
}
