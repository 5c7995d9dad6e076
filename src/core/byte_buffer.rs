// src/core/byte_buffer.rs
//! Non-secret, length-tagged byte buffers
//!
//! The declared `len` is kept apart from the data so that an engine can
//! hand over an output buffer whose allocation is larger than the requested
//! size. `from_bytes` is the self-consistent path.

use crate::config;
use crate::core::secret_buffer::SecretBuffer;
use crate::core::util::{representations, BufferRepr};
use crate::core::Result;
use crate::enums::LengthPolicy;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ByteBuffer {
    len: usize,
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Store `len` and `data` as given
    ///
    /// A mismatch is reported according to the configured [`LengthPolicy`]
    /// but never rejected; use [`ByteBuffer::try_new`] for that. The config
    /// is only consulted when the lengths differ.
    pub fn new(len: usize, data: Vec<u8>) -> Self {
        if len != data.len() {
            report_mismatch("ByteBuffer", len, data.len(), config::load().lengths.policy);
        }
        Self { len, data }
    }

    /// Permissive constructor with an explicit policy instead of the config
    pub fn with_policy(len: usize, data: Vec<u8>, policy: LengthPolicy) -> Self {
        report_mismatch("ByteBuffer", len, data.len(), policy);
        Self { len, data }
    }

    pub fn try_new(len: usize, data: Vec<u8>) -> Result<Self> {
        check_len(len, data.len())?;
        Ok(Self { len, data })
    }

    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            len: data.len(),
            data,
        }
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self::from_bytes(data.to_vec())
    }

    /// Declared length
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// `true` when the declared length matches the data
    pub fn is_consistent(&self) -> bool {
        self.len == self.data.len()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn representations(&self) -> BufferRepr {
        representations(&self.data)
    }

    /// Mark these bytes as secret. There is no way back.
    pub fn into_secret(self) -> SecretBuffer {
        SecretBuffer::from_parts_unchecked(self.len, self.data)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

pub(crate) fn check_len(declared: usize, actual: usize) -> Result<()> {
    if declared != actual {
        return Err(CoreError::LengthMismatch { declared, actual });
    }
    Ok(())
}

pub(crate) fn report_mismatch(kind: &str, declared: usize, actual: usize, policy: LengthPolicy) {
    if declared == actual {
        return;
    }
    match policy {
        LengthPolicy::Trust => {}
        LengthPolicy::Warn => {
            tracing::warn!(kind, declared, actual, "declared length differs from data length")
        }
    }
}
