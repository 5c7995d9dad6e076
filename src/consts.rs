// src/consts.rs
//! Shared constants: config locations and logging knobs

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "AEAD_BUFFERS_CONFIG";

/// Config file looked up in the working directory when the env var is unset
pub const DEFAULT_CONFIG_FILE: &str = "aead-buffers.toml";

/// Number of hex characters of a BLAKE3 fingerprint shown in log events
pub const FINGERPRINT_LOG_HEX: usize = 16;
