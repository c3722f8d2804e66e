//! Tail-biting rate-1/2 convolutional encoder for the protected frame parts.
//! PAS 0001-2 6.1.2 and 6.2.2
//!
//! For message bits b[i] (indices taken cyclically over the block) the coded
//! output is
//!   c[2i]     = b[i] ^ b[i-1] ^ b[i-2]
//!   c[2i + 1] = b[i] ^ b[i-2]
//! The encoder builds this word-wise: every message bit is packed twice into a
//! word, which is then XORed with copies of itself rotated by one and two
//! bit pairs. Only one copy of the one-pair rotation is kept.

/// Longest block that fits the packing word
pub const MAX_BLOCK_BITS: usize = 63;

/// Selects the even position of each bit pair
const EVEN_BITS: u128 = 0x5555_5555_5555_5555_5555_5555_5555_5555;

/// Pack bits, duplicating each bit into a pair. bits[0] lands in the lowest pair.
#[inline]
fn pack_2x(bits: &[u8]) -> u128 {
    bits.iter().rev().fold(0u128, |val, &bit| (val << 2) | ((bit & 1) as u128 * 0b11))
}

/// Rotate the lowest `width` bits of `val` towards the MSB by `shift` bits
#[inline]
fn rotl(val: u128, shift: u32, width: u32) -> u128 {
    let mask = (1u128 << width) - 1;
    ((val << shift) | (val >> (width - shift))) & mask
}

/// Encode `bits` into `2 * bits.len()` coded bits in `out`, one bit per byte.
/// Panics if the block is longer than MAX_BLOCK_BITS or shorter than 2 bits, or if `out` is too short.
pub fn encode_tail_biting(bits: &[u8], out: &mut [u8]) {
    assert!(bits.len() >= 2 && bits.len() <= MAX_BLOCK_BITS, "encode_tail_biting: invalid block length {}", bits.len());
    assert!(out.len() >= 2 * bits.len(), "encode_tail_biting: out too short");

    let width = 2 * bits.len() as u32;
    let data = pack_2x(bits);

    // Data shifted by one and two bit pairs, wrapping around the block end
    let data_1 = rotl(data, 2, width) & EVEN_BITS;
    let data_2 = rotl(data, 4, width);

    let coded = data ^ data_1 ^ data_2;
    for (k, bit) in out[..width as usize].iter_mut().enumerate() {
        *bit = ((coded >> k) & 1) as u8;
    }
}
