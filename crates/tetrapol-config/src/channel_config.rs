use tetrapol_core::{Band, Direction, FrameCodecErr, FrameType, Scr, validate_scr};

/// Physical channel parameters shared by decoder and encoder
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelConfig {
    pub band: Band,
    /// Scrambling constant, 0 means unscrambled
    pub scr: Scr,
    /// Frame type requested from the decoder. Auto resolves it per frame.
    pub frame_type: FrameType,
    /// Only used by the encoder
    pub direction: Direction,
}

impl ChannelConfig {
    pub fn validate(&self) -> Result<(), FrameCodecErr> {
        validate_scr(self.scr)?;
        if !self.frame_type.is_decodable() {
            return Err(FrameCodecErr::UnsupportedFrameType { fr_type: self.frame_type });
        }
        Ok(())
    }
}

/// Complete configuration of a frame tool run
#[derive(Debug, Clone, Default)]
pub struct CodecConfig {
    /// Optional verbose log file
    pub debug_log: Option<String>,
    pub channel: ChannelConfig,
}
