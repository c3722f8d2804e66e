//! PHY-layer types that are used across the codec, config and tools
//!
//! These live in tetrapol-core so the config crate can deserialize them
//! without depending on the frame codec itself.

use serde::Deserialize;

use crate::FrameCodecErr;

/// Radio band of a physical channel. Selects interleaving tables and
/// whether differential precoding is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Band {
    #[default]
    Vhf = 1,
    Uhf = 2,
}

impl TryFrom<u8> for Band {
    type Error = FrameCodecErr;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Band::Vhf),
            2 => Ok(Band::Uhf),
            _ => Err(FrameCodecErr::InvalidBand { value: value as u32 }),
        }
    }
}

/// Frame type, as requested from a decoder or carried by a frame.
/// The value of the discriminator bit is 0 for voice and 1 for data frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum FrameType {
    /// Determine the type from the decoded discriminator bit
    #[default]
    Auto,
    Voice,
    Data,
    /// High-rate data frame, not handled by this codec
    HrData,
}

impl FrameType {
    /// Resolves a frame type from the discriminator bit
    #[inline]
    pub fn from_discriminator(d: u8) -> Self {
        if d & 1 == 1 { FrameType::Data } else { FrameType::Voice }
    }

    /// Discriminator bit value, for the two types that carry one
    #[inline]
    pub fn discriminator(&self) -> Option<u8> {
        match self {
            FrameType::Voice => Some(0),
            FrameType::Data => Some(1),
            _ => None,
        }
    }

    /// True for the types a decoder can be configured with
    #[inline]
    pub fn is_decodable(&self) -> bool {
        matches!(self, FrameType::Auto | FrameType::Voice | FrameType::Data)
    }
}
