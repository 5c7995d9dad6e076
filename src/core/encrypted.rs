// src/core/encrypted.rs
//! AEAD output packed as `ciphertext || tag || nonce`
//!
//! One contiguous buffer plus two split points. Every view is a borrowed
//! slice of the same storage, so the ciphertext is never copied out of the
//! engine's output.
//!
//! ```text
//! 0            tag_pos          nonce_pos          len
//! | ciphertext |       tag      |       nonce      |
//! ```

use crate::config;
use crate::core::params::AeadParams;
use crate::core::util::{blake3_hex, short_fingerprint};
use crate::core::Result;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncryptedBuffer {
    buffer: Vec<u8>,
    tag_pos: usize,
    nonce_pos: usize,
}

impl EncryptedBuffer {
    /// Wrap an engine buffer, rejecting offsets outside
    /// `0 <= tag_pos <= nonce_pos <= buffer.len()`
    pub fn new(buffer: Vec<u8>, tag_pos: usize, nonce_pos: usize) -> Result<Self> {
        if tag_pos > nonce_pos || nonce_pos > buffer.len() {
            tracing::debug!(
                tag_pos,
                nonce_pos,
                len = buffer.len(),
                "rejected encrypted buffer layout"
            );
            return Err(CoreError::layout(tag_pos, nonce_pos, buffer.len()));
        }

        let encrypted = Self {
            buffer,
            tag_pos,
            nonce_pos,
        };
        encrypted.trace_layout();
        Ok(encrypted)
    }

    /// Same as [`EncryptedBuffer::new`] for engines that hand over signed
    /// offsets; negative values are an invalid layout
    pub fn from_signed_offsets(buffer: Vec<u8>, tag_pos: i64, nonce_pos: i64) -> Result<Self> {
        match (usize::try_from(tag_pos), usize::try_from(nonce_pos)) {
            (Ok(tag), Ok(nonce)) => Self::new(buffer, tag, nonce),
            _ => {
                tracing::debug!(tag_pos, nonce_pos, "rejected negative layout offsets");
                Err(CoreError::InvalidLayout {
                    tag_pos,
                    nonce_pos,
                    len: buffer.len(),
                })
            }
        }
    }

    /// Concatenate the three parts into one buffer
    pub fn from_parts(ciphertext: &[u8], tag: &[u8], nonce: &[u8]) -> Self {
        let mut buffer = Vec::with_capacity(ciphertext.len() + tag.len() + nonce.len());
        buffer.extend_from_slice(ciphertext);
        buffer.extend_from_slice(tag);
        buffer.extend_from_slice(nonce);

        let encrypted = Self {
            buffer,
            tag_pos: ciphertext.len(),
            nonce_pos: ciphertext.len() + tag.len(),
        };
        encrypted.trace_layout();
        encrypted
    }

    /// Take the trailing `tag_length + nonce_length` bytes as tag and nonce
    pub fn with_params(buffer: Vec<u8>, params: &AeadParams) -> Result<Self> {
        let len = buffer.len();
        let overhead = match params.overhead() {
            Some(overhead) if overhead <= len => overhead,
            overhead => {
                tracing::debug!(
                    len,
                    nonce_length = params.nonce_length(),
                    tag_length = params.tag_length(),
                    "buffer shorter than AEAD overhead"
                );
                return Err(CoreError::layout(
                    len.saturating_sub(overhead.unwrap_or(usize::MAX)),
                    len.saturating_sub(params.nonce_length()),
                    len,
                ));
            }
        };
        let tag_pos = len - overhead;
        let nonce_pos = tag_pos + params.tag_length();
        Self::new(buffer, tag_pos, nonce_pos)
    }

    #[inline]
    pub fn ciphertext(&self) -> &[u8] {
        &self.buffer[..self.tag_pos]
    }

    #[inline]
    pub fn tag(&self) -> &[u8] {
        &self.buffer[self.tag_pos..self.nonce_pos]
    }

    #[inline]
    pub fn nonce(&self) -> &[u8] {
        &self.buffer[self.nonce_pos..]
    }

    /// Ciphertext with the tag appended, as most decrypt calls expect it
    #[inline]
    pub fn ciphertext_and_tag(&self) -> &[u8] {
        &self.buffer[..self.nonce_pos]
    }

    /// `[ciphertext, tag, nonce]`
    pub fn parts(&self) -> [&[u8]; 3] {
        [self.ciphertext(), self.tag(), self.nonce()]
    }

    #[inline]
    pub fn tag_pos(&self) -> usize {
        self.tag_pos
    }

    #[inline]
    pub fn nonce_pos(&self) -> usize {
        self.nonce_pos
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Confirm the tag and nonce widths match an AEAD construction
    pub fn check_params(&self, params: &AeadParams) -> Result<()> {
        let actual_tag = self.tag().len();
        let actual_nonce = self.nonce().len();
        if actual_tag != params.tag_length() || actual_nonce != params.nonce_length() {
            return Err(CoreError::ParamsMismatch {
                expected_tag: params.tag_length(),
                actual_tag,
                expected_nonce: params.nonce_length(),
                actual_nonce,
            });
        }
        Ok(())
    }

    /// BLAKE3 hex of the whole buffer
    pub fn fingerprint(&self) -> String {
        blake3_hex(&self.buffer)
    }

    fn trace_layout(&self) {
        if !tracing::enabled!(tracing::Level::TRACE) {
            return;
        }
        if config::load().logging.fingerprint_layouts {
            tracing::trace!(
                ciphertext = self.tag_pos,
                tag = self.nonce_pos - self.tag_pos,
                nonce = self.buffer.len() - self.nonce_pos,
                fingerprint = %short_fingerprint(&self.buffer),
                "encrypted buffer layout"
            );
        } else {
            tracing::trace!(
                ciphertext = self.tag_pos,
                tag = self.nonce_pos - self.tag_pos,
                nonce = self.buffer.len() - self.nonce_pos,
                "encrypted buffer layout"
            );
        }
    }
}

impl AsRef<[u8]> for EncryptedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.buffer
    }
}
