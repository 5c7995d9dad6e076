// src/lib.rs
//! aead-buffers: byte buffers exchanged with an AEAD engine
//!
//! Features:
//! - `ByteBuffer` / `SecretBuffer` as distinct, non-interchangeable types
//! - `EncryptedBuffer`: `ciphertext || tag || nonce` with zero-copy views
//! - `AeadParams` and the `LocalKeyHandle<K>` shape
//! - secure-gate backed zeroization of secret bytes

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use crate::config::load as load_config;
pub use crate::core::{
    AeadParams, BufferRepr, ByteBuffer, EncryptedBuffer, LocalKeyHandle, Result as CoreResult,
    SecretBuffer,
};
pub use crate::enums::{KeyAlg, LengthPolicy};
pub use crate::error::CoreError;
