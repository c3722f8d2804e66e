//! Bit access helpers for TETRAPOL frames.
//!
//! Two bit orders are in use. Higher-layer data (and `get_bits`) counts bits
//! MSB first, so bit 0 is the MSB of the first byte. Frame buffers produced by
//! `pack_bits` hold their first bit in the LSB of the first byte.

use crate::FrameCodecErr;

/// CRC-16 CCITT generator, x^16 + x^12 + x^5 + 1
pub const FCS_GEN_POLY: u16 = 0x1021;
/// Residue left in the register after running the CRC over data and complemented FCS
pub const FCS_OK: u16 = 0x1d0f;

/// Read `len` bits (1..=32) from `data`, MSB first, starting `skip` bits from the start.
/// `len + skip` must not exceed the bit length of `data`.
#[inline]
pub fn get_bits(len: usize, data: &[u8], skip: usize) -> u32 {
    debug_assert!((1..=32).contains(&len), "get_bits: invalid len {}", len);

    // Collect all bytes touched, including extra bits at begin/end
    let mut r: u64 = 0;
    for &byte in &data[skip / 8..(skip + len + 7) / 8] {
        r = (r << 8) | byte as u64;
    }
    // Drop extra bits at end, then mask extra bits at beginning
    r >>= 7 - ((len + skip - 1) % 8);
    (r & (u32::MAX >> (32 - len)) as u64) as u32
}

/// Pack one-bit-per-byte values from `bits` into `bytes`, starting at bit offset `offs`.
/// The first bit of a byte is its LSB. Bits are ORed into the output, so `bytes`
/// must be zeroed beforehand; this allows several disjoint packs into one buffer.
pub fn pack_bits(bytes: &mut [u8], bits: &[u8], offs: usize, nbits: usize) {
    for (i, &bit) in bits[..nbits].iter().enumerate() {
        let pos = offs + i;
        bytes[pos / 8] |= (bit & 1) << (pos % 8);
    }
}

/// Inverse of `pack_bits`: write `nbits` bits starting at bit offset `offs` of `bytes`
/// into `bits`, one bit per byte.
pub fn unpack_bits(bytes: &[u8], bits: &mut [u8], offs: usize, nbits: usize) {
    for (i, bit) in bits[..nbits].iter_mut().enumerate() {
        let pos = offs + i;
        *bit = (bytes[pos / 8] >> (pos % 8)) & 1;
    }
}

#[inline]
fn get_nth_bit(input: &[u8], bit: usize) -> u16 {
    let byte = bit / 8;
    let bit_in_byte = 7 - (bit % 8);
    ((input[byte] >> bit_in_byte) & 1) as u16
}

/// CRC-16 CCITT over `number_bits` bits of a byte stream, MSB first.
/// `crc` is the initial register value, the updated register is returned.
pub fn crc16_ccitt_bytes(mut crc: u16, input: &[u8], number_bits: usize) -> u16 {
    for i in 0..number_bits {
        crc ^= get_nth_bit(input, i) << 15;
        if (crc & 0x8000) != 0 {
            crc = (crc << 1) ^ FCS_GEN_POLY;
        } else {
            crc <<= 1;
        }
    }
    crc
}

/// Compute the frame check sequence over the first `nbits` bits of `data` (MSB first).
/// The value is transmitted as is, MSB first, directly after the protected bits.
pub fn compute_fcs(data: &[u8], nbits: usize) -> u16 {
    !crc16_ccitt_bytes(0xffff, data, nbits)
}

/// Check the FCS of a block packed into bytes, MSB first.
/// `nbits` is the length of the block including the trailing 16 bit FCS,
/// not necessarily a multiple of 8.
pub fn check_fcs(data: &[u8], nbits: usize) -> bool {
    if nbits < 16 {
        tracing::warn!("check_fcs: block of {} bits too short to hold FCS", nbits);
        return false;
    }
    crc16_ccitt_bytes(0xffff, data, nbits) == FCS_OK
}

/// Parse a string of '0'/'1' characters into a one-bit-per-byte vector
pub fn bits_from_bitstr(bitstr: &str) -> Result<Vec<u8>, FrameCodecErr> {
    bitstr
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(FrameCodecErr::InvalidBitChar { found: other }),
        })
        .collect()
}

/// Render a one-bit-per-byte slice as a string of '0'/'1' characters
pub fn bits_to_bitstr(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b & 1 == 1 { '1' } else { '0' }).collect()
}

/// Parse a hex string (whitespace allowed between digits) into bytes
pub fn bytes_from_hex(hex: &str) -> Result<Vec<u8>, FrameCodecErr> {
    let digits = hex
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(FrameCodecErr::InvalidHexChar { found: c }))
        .collect::<Result<Vec<u8>, _>>()?;

    if digits.len() % 2 != 0 {
        return Err(FrameCodecErr::InconsistentLength {
            expected: digits.len() + 1,
            found: digits.len(),
        });
    }
    Ok(digits.chunks_exact(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

/// Render bytes as a lowercase hex string without separators
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
