// src/core/params.rs
//! Nonce and tag lengths of an AEAD construction
//!
//! Fixed per algorithm, not per message. The engine consults these when it
//! decides where the split points of an [`EncryptedBuffer`] fall.
//!
//! [`EncryptedBuffer`]: crate::core::EncryptedBuffer

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::core::byte_buffer::ByteBuffer;
use crate::core::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AeadParams {
    nonce_length: usize,
    tag_length: usize,
}

impl AeadParams {
    pub const fn new(nonce_length: usize, tag_length: usize) -> Self {
        Self {
            nonce_length,
            tag_length,
        }
    }

    #[inline]
    pub const fn nonce_length(&self) -> usize {
        self.nonce_length
    }

    #[inline]
    pub const fn tag_length(&self) -> usize {
        self.tag_length
    }

    /// Bytes added on top of the ciphertext: tag + nonce
    ///
    /// `None` when the sum does not fit in `usize`.
    #[inline]
    pub const fn overhead(&self) -> Option<usize> {
        self.nonce_length.checked_add(self.tag_length)
    }

    /// Parse the engine's `{"nonce_length": .., "tag_length": ..}` shape
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fresh random nonce of `nonce_length` bytes
    pub fn random_nonce(&self) -> ByteBuffer {
        let mut nonce = vec![0u8; self.nonce_length];
        rand::rng().fill_bytes(&mut nonce);
        ByteBuffer::from_bytes(nonce)
    }
}
