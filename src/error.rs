// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Offsets do not satisfy `0 <= tag_pos <= nonce_pos <= len`
    #[error("invalid layout: tag_pos={tag_pos}, nonce_pos={nonce_pos}, buffer length={len}")]
    InvalidLayout {
        tag_pos: i64,
        nonce_pos: i64,
        len: usize,
    },

    #[error("length mismatch: declared {declared} bytes, data holds {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error(
        "AEAD parameter mismatch: tag {actual_tag} (expected {expected_tag}), \
         nonce {actual_nonce} (expected {expected_nonce})"
    )]
    ParamsMismatch {
        expected_tag: usize,
        actual_tag: usize,
        expected_nonce: usize,
        actual_nonce: usize,
    },

    #[error("unknown key algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Build an `InvalidLayout` from unsigned offsets
    pub(crate) fn layout(tag_pos: usize, nonce_pos: usize, len: usize) -> Self {
        CoreError::InvalidLayout {
            tag_pos: saturating_i64(tag_pos),
            nonce_pos: saturating_i64(nonce_pos),
            len,
        }
    }
}

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
