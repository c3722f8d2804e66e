//! Differential line code over the transmitted bit stream, sync byte included.
//! PAS 0001-2 6.1.5.2 and 6.2.5.2
//!
//! Bits are taken in stream order, LSB of each byte first. Every output bit is
//! the XOR of the input bit and the input bit before it. The bit before the
//! first one of a frame is the last bit of the previous frame, so both sides
//! carry it across calls and frames must be processed in transmission order.

use super::frame_consts::{FRAME_BYTES, FRAME_HDR, WIRE_FRAME_BYTES};

/// Line encoder state: the last bit of the previously encoded input
#[derive(Clone, Copy, Debug, Default)]
pub struct LineEncoder {
    carry: u8,
}

impl LineEncoder {
    #[inline]
    pub fn new() -> Self {
        Self { carry: 0 }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.carry = 0;
    }

    #[inline]
    pub fn carry(&self) -> u8 {
        self.carry
    }

    /// Line-encode `data` in place, continuing from the previous call
    pub fn encode(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            let top = *byte >> 7;
            *byte ^= (*byte << 1) | self.carry;
            self.carry = top;
        }
    }
}

/// Line decoder state: the last decoded bit
#[derive(Clone, Copy, Debug, Default)]
pub struct LineDecoder {
    carry: u8,
}

impl LineDecoder {
    #[inline]
    pub fn new() -> Self {
        Self { carry: 0 }
    }

    #[inline]
    pub fn carry(&self) -> u8 {
        self.carry
    }

    /// Undo the line code in place, continuing from the previous call
    pub fn decode(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            let mut val = 0u8;
            for b in 0..8 {
                let bit = ((*byte >> b) & 1) ^ self.carry;
                self.carry = bit;
                val |= bit << b;
            }
            *byte = val;
        }
    }

    /// Undo the line code of one wire frame and strip the sync byte.
    /// Returns None if the sync byte does not match, the carry is advanced anyway.
    pub fn decode_wire(&mut self, wire: &[u8; WIRE_FRAME_BYTES]) -> Option<[u8; FRAME_BYTES]> {
        let mut buf = *wire;
        self.decode(&mut buf);
        if buf[0] != FRAME_HDR {
            tracing::debug!("decode_wire: bad sync byte 0x{:02x}", buf[0]);
            return None;
        }

        let mut out = [0u8; FRAME_BYTES];
        out.copy_from_slice(&buf[1..]);
        Some(out)
    }
}
