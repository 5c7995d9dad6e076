// src/core/mod.rs
pub mod byte_buffer;
pub mod encrypted;
pub mod key_handle;
pub mod params;
pub mod secret_buffer;
pub mod util;

pub use byte_buffer::ByteBuffer;
pub use encrypted::EncryptedBuffer;
pub use key_handle::LocalKeyHandle;
pub use params::AeadParams;
pub use secret_buffer::SecretBuffer;
pub use util::*;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
