//! Core utilities for the TETRAPOL physical-frame codec
//!
//! This crate provides fundamental types and utilities used across the codec:
//! - Bit access helpers for packed and one-bit-per-byte buffers
//! - Radio band, frame type and channel direction enums
//! - The codec error type
//! - Logging setup and debug macros

pub mod bit_utils;
pub mod codec_err;
pub mod debug;
pub mod direction;
pub mod phy_types;

// Re-export commonly used items
pub use bit_utils::{check_fcs, get_bits, pack_bits, unpack_bits};
pub use codec_err::FrameCodecErr;
pub use direction::Direction;
pub use phy_types::*;

/// Scrambling constant of a physical channel, valid range is `0..=MAX_SCR`
pub type Scr = u8;

/// Highest valid scrambling constant. The scrambling sequence has period 127.
pub const MAX_SCR: Scr = 126;

/// Checks that `scr` lies within the valid SCR range
pub fn validate_scr(scr: Scr) -> Result<Scr, FrameCodecErr> {
    if scr > MAX_SCR {
        return Err(FrameCodecErr::InvalidScr { value: scr as u32 });
    }
    Ok(scr)
}
