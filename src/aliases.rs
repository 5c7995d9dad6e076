// src/aliases.rs
//! Re-exports secure-gate's secret wrapper types
//!
//! `SecretBytes` is the backing store of every `SecretBuffer`; it zeroizes
//! its contents when dropped.

pub use secure_gate::dynamic_alias;

// Dynamic secrets
dynamic_alias!(SecretBytes, Vec<u8>); // key material, plaintext
