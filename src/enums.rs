// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the enums that cross the engine boundary or are
//! chosen in configuration: key algorithm tags and the length policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Key algorithm tag carried by a [`LocalKeyHandle`](crate::core::LocalKeyHandle)
///
/// The string forms are the ones the cryptographic engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum KeyAlg {
    #[serde(rename = "a128gcm")]
    A128Gcm,
    #[serde(rename = "a256gcm")]
    A256Gcm,
    #[serde(rename = "a128cbchs256")]
    A128CbcHs256,
    #[serde(rename = "a256cbchs512")]
    A256CbcHs512,
    #[serde(rename = "a128kw")]
    A128Kw,
    #[serde(rename = "a256kw")]
    A256Kw,
    #[serde(rename = "bls12381g1")]
    Bls12_381G1,
    #[serde(rename = "bls12381g2")]
    Bls12_381G2,
    #[serde(rename = "bls12381g1g2")]
    Bls12_381G1G2,
    #[serde(rename = "c20p")]
    Chacha20C20P,
    #[serde(rename = "xc20p")]
    Chacha20XC20P,
    #[serde(rename = "ed25519")]
    Ed25519,
    #[serde(rename = "x25519")]
    X25519,
    #[serde(rename = "k256")]
    K256,
    #[serde(rename = "p256")]
    P256,
    #[serde(rename = "p384")]
    P384,
}

impl KeyAlg {
    pub const ALL: [KeyAlg; 16] = [
        KeyAlg::A128Gcm,
        KeyAlg::A256Gcm,
        KeyAlg::A128CbcHs256,
        KeyAlg::A256CbcHs512,
        KeyAlg::A128Kw,
        KeyAlg::A256Kw,
        KeyAlg::Bls12_381G1,
        KeyAlg::Bls12_381G2,
        KeyAlg::Bls12_381G1G2,
        KeyAlg::Chacha20C20P,
        KeyAlg::Chacha20XC20P,
        KeyAlg::Ed25519,
        KeyAlg::X25519,
        KeyAlg::K256,
        KeyAlg::P256,
        KeyAlg::P384,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAlg::A128Gcm => "a128gcm",
            KeyAlg::A256Gcm => "a256gcm",
            KeyAlg::A128CbcHs256 => "a128cbchs256",
            KeyAlg::A256CbcHs512 => "a256cbchs512",
            KeyAlg::A128Kw => "a128kw",
            KeyAlg::A256Kw => "a256kw",
            KeyAlg::Bls12_381G1 => "bls12381g1",
            KeyAlg::Bls12_381G2 => "bls12381g2",
            KeyAlg::Bls12_381G1G2 => "bls12381g1g2",
            KeyAlg::Chacha20C20P => "c20p",
            KeyAlg::Chacha20XC20P => "xc20p",
            KeyAlg::Ed25519 => "ed25519",
            KeyAlg::X25519 => "x25519",
            KeyAlg::K256 => "k256",
            KeyAlg::P256 => "p256",
            KeyAlg::P384 => "p384",
        }
    }
}

impl fmt::Display for KeyAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyAlg {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyAlg::ALL
            .iter()
            .copied()
            .find(|alg| alg.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownAlgorithm(s.to_owned()))
    }
}

/// What the permissive buffer constructors do when the declared length
/// differs from the data they are handed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Store as given, say nothing
    Trust,
    /// Store as given, emit a warning event
    #[default]
    Warn,
}
