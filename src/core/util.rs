//! Small utility functions used across the core module
//!
//! Hashing and text representations of non-secret bytes.
//! Keep this light; if it grows, split further.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use blake3::Hasher;

use crate::consts::FINGERPRINT_LOG_HEX;

/// Compute BLAKE3 hash and return as lowercase hex string
pub fn blake3_hex(data: &[u8]) -> String {
    Hasher::new().update(data).finalize().to_hex().to_string()
}

/// Shortened BLAKE3 hex used in log events
pub(crate) fn short_fingerprint(data: &[u8]) -> String {
    let mut hex = blake3_hex(data);
    hex.truncate(FINGERPRINT_LOG_HEX);
    hex
}

/// Multiple string representations of non-secret bytes for export/display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn representations(data: &[u8]) -> BufferRepr {
    BufferRepr {
        hex: hex::encode(data),
        base64: STANDARD.encode(data),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(data),
    }
}
