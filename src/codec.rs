//! Little‑endian octet codec for persisting digests.

/// Split `word` into four octets, least significant first.
#[inline]
pub fn int_to_octets(word: u32) -> [u8; 4] {
    word.to_le_bytes()
}

/// Inverse of [`int_to_octets`].
#[inline]
pub fn octets_to_int(octets: [u8; 4]) -> u32 {
    u32::from_le_bytes(octets)
}
