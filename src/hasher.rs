//! `core::hash::Hasher` adapter
//! ============================
//! Lets SUCHOI drive `HashMap`/`HashSet` bucket selection.  Input may arrive
//! in any number of `write` calls; the octet position is carried across
//! calls, so chunked input digests exactly like [`crate::suchoi`] over the
//! concatenation.

use core::hash::{BuildHasherDefault, Hasher};

use crate::absorb;

/// Streaming SUCHOI state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuchoiHasher {
    state: u32,
    // octets absorbed so far
    len: usize,
}

impl SuchoiHasher {
    /// Fresh hasher; [`digest`](Self::digest) of an untouched hasher is `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `bytes` into the state.
    pub fn update(&mut self, bytes: &[u8]) {
        for &octet in bytes {
            self.state = absorb(self.state, octet, self.len);
            self.len = self.len.wrapping_add(1);
        }
    }

    /// The 32‑bit digest of everything written so far.
    pub fn digest(&self) -> u32 {
        self.state
    }

    /// Octets absorbed so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True until the first octet is absorbed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Hasher for SuchoiHasher {
    /// Zero‑extends the 32‑bit digest.
    fn finish(&self) -> u64 {
        self.state as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

/// `BuildHasher` producing fresh [`SuchoiHasher`]s.  SUCHOI is unseeded, so
/// every hasher starts from the zero state.
pub type SuchoiBuildHasher = BuildHasherDefault<SuchoiHasher>;

#[cfg(feature = "std")]
pub type SuchoiHashMap<K, V> = std::collections::HashMap<K, V, SuchoiBuildHasher>;
#[cfg(feature = "std")]
pub type SuchoiHashSet<T> = std::collections::HashSet<T, SuchoiBuildHasher>;
