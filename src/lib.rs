//! SUCHOI — 32‑bit Hash for Tiny Processors
//! ========================================
//! A **non‑cryptographic 32‑bit hash** for spreading keys over hash tables on
//! processors without hardware divide/modulo.  Runtime and bucket
//! distribution are competitive with Adler‑32, using only XOR, rotate and a
//! 16‑entry table lookup per nibble.
//!
//! ## Construction
//! * 32‑bit state, initialised to zero
//! * every input octet is split into two nibbles; each nibble XORs one
//!   entry of a 16 × 32‑bit S‑box ([`sbox::SBOX`], the digits of π) into the
//!   state, followed by a 1‑bit rotation
//! * after every 16 octets the state is re‑mixed by the keyed
//!   [`permute::shapashnik`] permutation, keyed with the state itself
//!
//! The S‑box, as wide as the state, flips about half of the output bits for a
//! single flipped input bit.  Rotation keeps successive identical octets from
//! cancelling each other out; after 16 octets rotation alone no longer does,
//! hence the permutation.
//!
//! ---
//! **Security NOTE:** this is *not* a cryptographic hash.  Collisions can be
//! constructed on purpose; use it for hash tables, not for authentication.

#![no_std]

#[cfg(feature = "std")]
extern crate std;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::vec::Vec;

pub mod adler32;
pub mod bits;
pub mod codec;
#[cfg(feature = "std")]
pub mod distribution;
pub mod hasher;
pub mod permute;
pub mod sbox;

pub use codec::{int_to_octets, octets_to_int};
#[cfg(feature = "std")]
pub use hasher::{SuchoiHashMap, SuchoiHashSet};
pub use hasher::{SuchoiBuildHasher, SuchoiHasher};

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Octets folded between two permutation steps.  A 64‑bit state would
/// need 32.
pub const PERMUTE_INTERVAL: usize = 16;

// ---------------------------------------------------------------------------
// Hot path
// ---------------------------------------------------------------------------

/// Folds one octet into `state`.  `index` is the 0‑based position of the
/// octet in the whole message.
#[inline(always)]
pub(crate) fn absorb(state: u32, octet: u8, index: usize) -> u32 {
    let mut st = state ^ sbox::lookup(octet >> 4);
    st = st.rotate_right(1);
    st ^= sbox::lookup(octet & 0xF);
    st = st.rotate_right(1);
    if index % PERMUTE_INTERVAL == PERMUTE_INTERVAL - 1 {
        // rotation can no longer prevent xor‑cancellation
        st = permute::shapashnik(st, st);
    }
    st
}

// ---------------------------------------------------------------------------
// Public hashing API
// ---------------------------------------------------------------------------

/// Compute the **SUCHOI** digest of `input`.
///
/// * Deterministic and unseeded: equal inputs always give equal digests.
/// * The empty input hashes to `0`.
/// * `no_std`, heap‑free and reentrant.
///
/// ```
/// assert_eq!(suchoi::suchoi(b""), 0);
/// assert_eq!(suchoi::suchoi(b"hallo welt"), 0x85A1_2475);
/// ```
pub fn suchoi(input: &[u8]) -> u32 {
    input
        .iter()
        .enumerate()
        .fold(0u32, |state, (i, &octet)| absorb(state, octet, i))
}

/// Hash many independent messages in **parallel** using Rayon (feature `parallel`).
#[cfg(feature = "parallel")]
pub fn suchoi_batch(messages: &[&[u8]]) -> Vec<u32> {
    messages.par_iter().map(|m| suchoi(m)).collect()
}
