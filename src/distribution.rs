//! Bucket‑distribution harness
//! ==========================
//! Hashes a key set into an open hash table of `table_size` buckets and
//! histograms the resulting chain lengths.  Comparing two hash functions on
//! the same keys shows which one spreads them more evenly; an ideal hash
//! produces about [`BucketHistogram::expected_collisions`] colliding pairs.
//!
//! Chain lengths are tracked in saturating `u8` counters, so every chain
//! of 255 or more keys lands in the last histogram slot.

use rand::Rng;
use std::vec;
use std::vec::Vec;

/// Histogram slots: one per representable chain length.
pub const MAX_CHAIN: usize = 256;

/// How many buckets ended up with each chain length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketHistogram {
    counts: [u32; MAX_CHAIN],
    buckets: Vec<u8>,
    keys: usize,
}

impl BucketHistogram {
    /// Hash every key with `hash` and histogram the chain lengths of a table
    /// with `table_size` buckets (bucket index = `hash % table_size`).
    ///
    /// # Panics
    /// If `table_size` is zero.
    pub fn build<F, I, K>(hash: F, keys: I, table_size: usize) -> Self
    where
        F: Fn(&[u8]) -> u32,
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        assert!(table_size > 0, "table_size must be non-zero");
        let mut buckets = vec![0u8; table_size];
        let mut n = 0usize;
        for key in keys {
            let index = hash(key.as_ref()) as usize % table_size;
            buckets[index] = buckets[index].saturating_add(1);
            n += 1;
        }

        let mut counts = [0u32; MAX_CHAIN];
        for &len in buckets.iter() {
            counts[len as usize] += 1;
        }
        Self {
            counts,
            buckets,
            keys: n,
        }
    }

    /// Buckets holding exactly `chain_len` keys (`0` when out of range).
    pub fn count(&self, chain_len: usize) -> u32 {
        self.counts.get(chain_len).copied().unwrap_or(0)
    }

    /// All histogram slots, indexed by chain length.
    pub fn counts(&self) -> &[u32; MAX_CHAIN] {
        &self.counts
    }

    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Keys hashed into the table.
    pub fn keys(&self) -> usize {
        self.keys
    }

    /// Length of the longest chain (saturated at 255).
    pub fn longest_chain(&self) -> usize {
        self.counts.iter().rposition(|&c| c > 0).unwrap_or(0)
    }

    /// Number of colliding key pairs: Σ len·(len−1)/2 over all buckets.
    pub fn collisions(&self) -> u64 {
        self.buckets
            .iter()
            .map(|&len| {
                let len = len as u64;
                len * len.saturating_sub(1) / 2
            })
            .sum()
    }

    /// Colliding pairs expected from a uniformly random hash.
    pub fn expected_collisions(&self) -> f64 {
        let n = self.keys as f64;
        n * (n - 1.0) / (2.0 * self.table_size() as f64)
    }
}

/// `count` random keys, each of random length in `0..max_len` with random
/// contents.
///
/// # Panics
/// If `max_len` is zero.
pub fn random_keys<R: Rng>(rng: &mut R, count: usize, max_len: usize) -> Vec<Vec<u8>> {
    assert!(max_len > 0, "max_len must be non-zero");
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..max_len);
            let mut key = vec![0u8; len];
            rng.fill(key.as_mut_slice());
            key
        })
        .collect()
}
