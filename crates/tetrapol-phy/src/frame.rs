use core::fmt;

use tetrapol_core::FrameType;
use tetrapol_core::bit_utils::bits_to_bitstr;

pub use crate::components::frame_consts::{FRAME_BYTES, FRAME_DATA_LEN, FRAME_HDR, WIRE_FRAME_BYTES};

/// Size of the message bit blob, large enough for a voice frame
pub const FRAME_BLOB_LEN: usize = 126;

/// Decoded bits of a data frame, discriminator, payload, CRC and padding
pub const DATA_FRAME_BITS: usize = 76;

/// Decoded bits of a voice frame, protected part plus raw codec bits
pub const VOICE_FRAME_BITS: usize = 126;

/// Message bits protected by the rate-1/2 code in the first frame part
pub const PHASE1_BITS: usize = 26;

/// Message bits protected by the rate-1/2 code in the second part of a data frame
pub const PHASE2_BITS: usize = 50;

/// Data frame payload, between discriminator and CRC
pub const DATA_PAYLOAD_BITS: usize = 68;
/// Bits covered by the CRC-5 of a data frame, discriminator included
pub const DATA_CRC_SPAN: usize = 69;
pub const DATA_CRC_BITS: usize = 5;
pub const DATA_PADDING_BITS: usize = 2;

/// Voice frame protected header, between discriminator and CRC
pub const VOICE_HEADER_BITS: usize = 22;
/// Bits covered by the CRC-3 of a voice frame, discriminator included
pub const VOICE_CRC_SPAN: usize = 23;
pub const VOICE_CRC_BITS: usize = 3;
/// Raw voice codec bits, not protected by any code
pub const VOICE_PAYLOAD_BITS: usize = 100;

/// Outcome of decoding a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameStatus {
    #[default]
    Ok,
    /// FEC succeeded but the CRC, or the discriminator of a requested frame type, does not match
    CrcMismatch,
    /// Too many bits were corrected by the Viterbi decoder, CRC was not checked
    FecUncorrectable,
    /// The requested frame type cannot be decoded
    Unsupported,
}

impl FrameStatus {
    /// Numeric broken code: 0 ok, -1 CRC mismatch, 1 FEC failure, -2 unsupported
    pub fn code(&self) -> i32 {
        match self {
            FrameStatus::Ok => 0,
            FrameStatus::CrcMismatch => -1,
            FrameStatus::FecUncorrectable => 1,
            FrameStatus::Unsupported => -2,
        }
    }
}

impl fmt::Display for FrameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameStatus::Ok => write!(f, "ok"),
            FrameStatus::CrcMismatch => write!(f, "crc mismatch"),
            FrameStatus::FecUncorrectable => write!(f, "fec uncorrectable"),
            FrameStatus::Unsupported => write!(f, "unsupported frame type"),
        }
    }
}

/// A decoded frame, or a frame to be encoded. Message bits are stored one bit per byte.
///
/// Data frame layout:   d | payload (68) | crc5 (5) | padding (2)
/// Voice frame layout:  d | header (22) | crc3 (3) | codec bits (100)
///
/// `d` is the discriminator bit, 1 for data and 0 for voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub fr_type: FrameType,
    pub status: FrameStatus,
    /// Total Viterbi distance over all decoded parts
    pub bits_fixed: u32,
    /// Error counter, equal to `bits_fixed` for the Viterbi pipeline
    pub syndromes: u32,
    pub blob: [u8; FRAME_BLOB_LEN],
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            fr_type: FrameType::Auto,
            status: FrameStatus::Ok,
            bits_fixed: 0,
            syndromes: 0,
            blob: [0; FRAME_BLOB_LEN],
        }
    }
}

impl Frame {
    /// Data frame to be encoded. Discriminator, CRC and padding are set by the encoder.
    pub fn new_data(payload: &[u8; DATA_PAYLOAD_BITS]) -> Self {
        let mut fr = Frame { fr_type: FrameType::Data, ..Default::default() };
        fr.blob[0] = 1;
        fr.blob[1..DATA_CRC_SPAN].copy_from_slice(payload);
        fr
    }

    /// Voice frame to be encoded. Discriminator and CRC are set by the encoder.
    pub fn new_voice(header: &[u8; VOICE_HEADER_BITS], payload: &[u8; VOICE_PAYLOAD_BITS]) -> Self {
        let mut fr = Frame { fr_type: FrameType::Voice, ..Default::default() };
        fr.blob[1..VOICE_CRC_SPAN].copy_from_slice(header);
        fr.blob[PHASE1_BITS..VOICE_FRAME_BITS].copy_from_slice(payload);
        fr
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == FrameStatus::Ok
    }

    /// Discriminator bit as decoded
    #[inline]
    pub fn discriminator(&self) -> u8 {
        self.blob[0]
    }

    /// Message bits of the frame, 76 for data frames and 126 otherwise
    pub fn message_bits(&self) -> &[u8] {
        match self.fr_type {
            FrameType::Data => &self.blob[..DATA_FRAME_BITS],
            _ => &self.blob[..VOICE_FRAME_BITS],
        }
    }

    /// Bits covered by the frame CRC, discriminator included
    pub fn crc_data(&self) -> &[u8] {
        match self.fr_type {
            FrameType::Data => &self.blob[..DATA_CRC_SPAN],
            _ => &self.blob[..VOICE_CRC_SPAN],
        }
    }

    /// CRC bits as stored in the frame
    pub fn crc(&self) -> &[u8] {
        match self.fr_type {
            FrameType::Data => &self.blob[DATA_CRC_SPAN..DATA_CRC_SPAN + DATA_CRC_BITS],
            _ => &self.blob[VOICE_CRC_SPAN..VOICE_CRC_SPAN + VOICE_CRC_BITS],
        }
    }

    /// Data payload, without the discriminator
    #[inline]
    pub fn data_payload(&self) -> &[u8] {
        &self.blob[1..DATA_CRC_SPAN]
    }

    /// Padding after the CRC of a data frame, expected to be zero
    #[inline]
    pub fn data_padding(&self) -> &[u8] {
        &self.blob[DATA_CRC_SPAN + DATA_CRC_BITS..DATA_FRAME_BITS]
    }

    /// Protected voice header, without the discriminator
    #[inline]
    pub fn voice_header(&self) -> &[u8] {
        &self.blob[1..VOICE_CRC_SPAN]
    }

    /// Raw voice codec bits
    #[inline]
    pub fn voice_payload(&self) -> &[u8] {
        &self.blob[PHASE1_BITS..VOICE_FRAME_BITS]
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frame {{ type: {:?}, status: {} ({}), bits_fixed: {}, bits: {} }}",
            self.fr_type,
            self.status,
            self.status.code(),
            self.bits_fixed,
            bits_to_bitstr(self.message_bits())
        )
    }
}
