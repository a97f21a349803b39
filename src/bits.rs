//! Bit primitives
//! ==============
//! Rotation, bit swapping and bit‑similarity counting on 32‑bit words.
//! The digest needs only [`rotate`]; the counters exist to measure the
//! avalanche behaviour in tests and benchmarks.

/// Circular left rotation of `word` by `count` bits.
///
/// `count` is taken modulo 32, so a rotation by `0` (or `32`) returns `word`
/// unchanged.
#[inline(always)]
pub fn rotate(word: u32, count: u32) -> u32 {
    word.rotate_left(count)
}

/// Returns `word` with bits `pos1` and `pos2` exchanged (bit 0 = LSB).
///
/// # Panics
/// If a position is outside `0..32`.
pub fn swap_bits(word: u32, pos1: u32, pos2: u32) -> u32 {
    assert!(pos1 < 32 && pos2 < 32, "bit positions must be in 0..32");
    let b1 = (word >> pos1) & 1;
    let b2 = (word >> pos2) & 1;
    // xor with both stencils flips the pair iff the bits differ
    let x = b1 ^ b2;
    word ^ ((x << pos1) | (x << pos2))
}

/// Number of bit positions at which `a` and `b` are **equal**, in `0..=32`.
///
/// Despite the name this is a similarity count: `bit_diff(w, w) == 32`.
/// Use [`bit_distance`] for the Hamming distance.
#[inline]
pub fn bit_diff(a: u32, b: u32) -> u32 {
    (!(a ^ b)).count_ones()
}

/// Hamming distance between `a` and `b`: `32 - bit_diff(a, b)`.
#[inline]
pub fn bit_distance(a: u32, b: u32) -> u32 {
    (a ^ b).count_ones()
}
