// src/core/key_handle.rs
//! Shape of a key handle owned by the cryptographic engine
//!
//! `inner` is whatever the engine uses to refer to its key state. This
//! crate stores it and hands it back, nothing more.

use crate::enums::KeyAlg;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalKeyHandle<K> {
    alg: KeyAlg,
    inner: K,
    ephemeral: bool,
}

impl<K> LocalKeyHandle<K> {
    pub fn new(alg: KeyAlg, inner: K, ephemeral: bool) -> Self {
        Self {
            alg,
            inner,
            ephemeral,
        }
    }

    #[inline]
    pub fn alg(&self) -> KeyAlg {
        self.alg
    }

    #[inline]
    pub fn inner(&self) -> &K {
        &self.inner
    }

    /// Single-use key that is never persisted
    #[inline]
    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }

    pub fn into_inner(self) -> K {
        self.inner
    }

    /// Swap the engine payload, keeping algorithm and ephemeral flag
    pub fn map_inner<U>(self, f: impl FnOnce(K) -> U) -> LocalKeyHandle<U> {
        LocalKeyHandle {
            alg: self.alg,
            inner: f(self.inner),
            ephemeral: self.ephemeral,
        }
    }
}
