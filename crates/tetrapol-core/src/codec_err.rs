use core::fmt;

use crate::FrameType;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FrameCodecErr {
    InvalidBand { value: u32 },
    InvalidScr { value: u32 },
    UnsupportedFrameType { fr_type: FrameType },
    InconsistentLength { expected: usize, found: usize },
    InvalidBitChar { found: char },
    InvalidHexChar { found: char },
    /// Line decoded wire frame does not start with the sync byte
    MissingSync,
}

impl fmt::Display for FrameCodecErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameCodecErr::InvalidBand { value } => write!(f, "invalid band {}", value),
            FrameCodecErr::InvalidScr { value } => write!(f, "invalid scrambling constant {}, expected 0..=126", value),
            FrameCodecErr::UnsupportedFrameType { fr_type } => write!(f, "frame type {:?} not supported", fr_type),
            FrameCodecErr::InconsistentLength { expected, found } => {
                write!(f, "inconsistent length, expected {} found {}", expected, found)
            }
            FrameCodecErr::InvalidBitChar { found } => write!(f, "invalid character `{}`, only '0' or '1' allowed", found),
            FrameCodecErr::InvalidHexChar { found } => write!(f, "invalid hex character `{}`", found),
            FrameCodecErr::MissingSync => write!(f, "sync byte not found in wire frame"),
        }
    }
}

impl std::error::Error for FrameCodecErr {}

/// Checks whether a length matches the expected value. If not, returns FrameCodecErr::InconsistentLength
#[macro_export]
macro_rules! expect_len {
    ($found:expr, $expected:expr) => {{
        let found = $found;
        let expected = $expected;
        if found == expected {
            Ok(())
        } else {
            Err($crate::FrameCodecErr::InconsistentLength { expected, found })
        }
    }};
}
