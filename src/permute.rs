//! SHAPASHNIK permutation
//! =====================
//! Keyed permutation on a 32‑bit word.  Each of the ten rounds swaps the two
//! 16‑bit halves and rotates left by the low three key bits; the key itself
//! advances by a 3‑bit rotation per round.  No early exit, no data‑dependent
//! branches.

use crate::bits::rotate;

/// Number of half‑swap/rotate rounds.
pub const ROUNDS: usize = 10;

/// Key bits consumed per round.
const KEY_MASK: u32 = 0x7;
/// Key rotation between rounds.
const KEY_STEP: u32 = 3;

/// One round: swap halves, rotate by `key & 7`.
#[inline(always)]
fn round(x: u32, key: u32) -> u32 {
    let swapped = (x << 16) | (x >> 16);
    rotate(swapped, key & KEY_MASK)
}

/// Apply the permutation to `input` under `key`.
///
/// For a fixed key this is a bijection on `u32`.  The digest calls it with
/// the state as both value and key.
pub fn shapashnik(input: u32, key: u32) -> u32 {
    let mut x = input;
    let mut k = key;
    for _ in 0..ROUNDS {
        x = round(x, k);
        k = rotate(k, KEY_STEP);
    }
    x
}
