//! Adler‑32 checksum, kept as the speed and distribution baseline that
//! SUCHOI is measured against.

/// Largest prime below 2^16.
pub const MOD_ADLER: u32 = 65521;

/// Adler‑32 of `data`: two 16‑bit running sums packed as `b << 16 | a`.
pub fn adler32(data: &[u8]) -> u32 {
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    for &byte in data {
        a = (a + byte as u32) % MOD_ADLER;
        b = (b + a) % MOD_ADLER;
    }
    (b << 16) | a
}
