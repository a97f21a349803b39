//! Diffusion table.

/// The leading hex digits of π's fractional part, read as sixteen 32‑bit
/// words.  Used as an S‑box: one entry per nibble value.
/// *Changing this table changes the hash*.
// row n holds entries 4n .. 4n+3
pub const SBOX: [u32; 16] = [
    0x243F_6A88, 0x85A3_08D3, 0x3198_A2E0, 0x3707_344A, //
    0x4093_8222, 0x99F3_1D00, 0x82EF_A98E, 0xC4E6_C894, //
    0x5282_1E63, 0x8D01_377B, 0xE546_6CF3, 0x4E90_C6CC, //
    0x0AC2_9B7C, 0x97C5_0DD3, 0xF84D_5B5B, 0x5470_9179,
];

/// S‑box entry for the low four bits of `nibble`.
#[inline(always)]
pub fn lookup(nibble: u8) -> u32 {
    SBOX[(nibble & 0xF) as usize]
}
