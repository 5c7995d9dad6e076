// src/core/secret_buffer.rs
//! Length-tagged buffers holding sensitive material
//!
//! Same shape as [`ByteBuffer`](crate::core::ByteBuffer) but a separate
//! type: functions taking a `SecretBuffer` cannot be handed plain bytes by
//! accident, and the other way round. The bytes live in a secure-gate
//! wrapper and are zeroized on drop. No `Clone`, no hex/base64 helpers,
//! and `Debug` shows lengths only.

use std::fmt;

use crate::aliases::SecretBytes;
use crate::config;
use crate::core::byte_buffer::{check_len, report_mismatch};
use crate::core::Result;
use crate::enums::LengthPolicy;

pub struct SecretBuffer {
    len: usize,
    data: SecretBytes,
}

impl SecretBuffer {
    /// Store `len` and `data` as given; mismatches follow the length policy
    pub fn new(len: usize, data: Vec<u8>) -> Self {
        if len != data.len() {
            report_mismatch(
                "SecretBuffer",
                len,
                data.len(),
                config::load().lengths.policy,
            );
        }
        Self::from_parts_unchecked(len, data)
    }

    pub fn with_policy(len: usize, data: Vec<u8>, policy: LengthPolicy) -> Self {
        report_mismatch("SecretBuffer", len, data.len(), policy);
        Self::from_parts_unchecked(len, data)
    }

    pub fn try_new(len: usize, data: Vec<u8>) -> Result<Self> {
        check_len(len, data.len())?;
        Ok(Self::from_parts_unchecked(len, data))
    }

    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self::from_parts_unchecked(data.len(), data)
    }

    pub(crate) fn from_parts_unchecked(len: usize, data: Vec<u8>) -> Self {
        Self {
            len,
            data: SecretBytes::new(data),
        }
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

    pub fn is_consistent(&self) -> bool {
        self.len == self.expose_secret().len()
    }

    /// Borrow the secret bytes. Callers must not log or persist them.
    #[inline]
    pub fn expose_secret(&self) -> &[u8] {
        self.data.expose_secret()
    }
}

impl From<Vec<u8>> for SecretBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBuffer")
            .field("len", &self.len)
            .field("data", &format_args!("[REDACTED; {}]", self.expose_secret().len()))
            .finish()
    }
}
