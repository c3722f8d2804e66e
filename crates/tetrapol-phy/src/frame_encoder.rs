use tetrapol_core::bit_utils::bytes_to_hex;
use tetrapol_core::{Band, Direction, FrameCodecErr, FrameType, Scr, pack_bits, validate_scr};

use crate::components::line_code::LineEncoder;
use crate::components::{convenc, crc, diff_precod, interleaver, scrambler};
use crate::frame::{
    DATA_CRC_BITS, DATA_CRC_SPAN, DATA_FRAME_BITS, FRAME_BYTES, FRAME_DATA_LEN, FRAME_HDR, Frame, PHASE1_BITS,
    VOICE_CRC_BITS, VOICE_CRC_SPAN, VOICE_FRAME_BITS, WIRE_FRAME_BYTES,
};

/// Encoder for frames of one physical channel.
///
/// The line code is continuous over the transmitted stream, so the encoder keeps
/// the last bit of each frame for the next one. Frames must be encoded in
/// transmission order, one producer per encoder.
#[derive(Debug, Clone)]
pub struct FrameEncoder {
    band: Band,
    scr: Scr,
    dir: Direction,
    line: LineEncoder,
}

impl FrameEncoder {
    pub fn new(band: Band, scr: Scr, dir: Direction) -> Result<Self, FrameCodecErr> {
        let scr = validate_scr(scr)?;
        tracing::debug!("FrameEncoder::new band {:?} scr {} {}", band, scr, dir);
        Ok(Self { band, scr, dir, line: LineEncoder::new() })
    }

    #[inline]
    pub fn get_scr(&self) -> Scr {
        self.scr
    }

    pub fn set_scr(&mut self, scr: Scr) -> Result<(), FrameCodecErr> {
        self.scr = validate_scr(scr)?;
        Ok(())
    }

    #[inline]
    pub fn band(&self) -> Band {
        self.band
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Encode a frame into a 20 byte wire unit, sync byte included and line coded.
    /// Discriminator, CRC and padding bits of `fr` are filled in.
    /// Only data and voice frames can be encoded, other types fail and leave the encoder untouched.
    pub fn encode(&mut self, fr: &mut Frame) -> Result<[u8; WIRE_FRAME_BYTES], FrameCodecErr> {
        let coded = match fr.fr_type {
            FrameType::Data => encode_data(fr),
            FrameType::Voice => encode_voice(fr),
            fr_type => return Err(FrameCodecErr::UnsupportedFrameType { fr_type }),
        };

        let mut fr_data = [0u8; FRAME_DATA_LEN];
        interleaver::frame_interleave(&mut fr_data, &coded, interleaver::interleave_table(self.band, fr.fr_type));
        if self.band == Band::Uhf {
            diff_precod::frame_diff_enc(&mut fr_data);
        }

        let mut fr_bytes = [0u8; FRAME_BYTES];
        pack_bits(&mut fr_bytes, &fr_data, 0, FRAME_DATA_LEN);
        scrambler::frame_scramble(&mut fr_bytes, self.scr);

        let mut wire = [0u8; WIRE_FRAME_BYTES];
        wire[0] = FRAME_HDR;
        wire[1..].copy_from_slice(&fr_bytes);
        self.line.encode(&mut wire);

        tracing::trace!("encode {:?}: wire {}", fr.fr_type, bytes_to_hex(&wire));
        Ok(wire)
    }
}

/// Fill in discriminator, CRC-5 and padding, then protect all 76 bits with the rate-1/2 code
fn encode_data(fr: &mut Frame) -> [u8; FRAME_DATA_LEN] {
    fr.blob[0] = 1;
    let crc = crc::mk_crc5(fr.crc_data());
    fr.blob[DATA_CRC_SPAN..DATA_CRC_SPAN + DATA_CRC_BITS].copy_from_slice(&crc);
    fr.blob[DATA_CRC_SPAN + DATA_CRC_BITS..DATA_FRAME_BITS].fill(0);

    let mut coded = [0u8; FRAME_DATA_LEN];
    let (coded1, coded2) = coded.split_at_mut(2 * PHASE1_BITS);
    convenc::encode_tail_biting(&fr.blob[..PHASE1_BITS], coded1);
    convenc::encode_tail_biting(&fr.blob[PHASE1_BITS..DATA_FRAME_BITS], coded2);
    coded
}

/// Fill in discriminator and CRC-3, protect the first 26 bits, codec bits are sent as they are
fn encode_voice(fr: &mut Frame) -> [u8; FRAME_DATA_LEN] {
    fr.blob[0] = 0;
    let crc = crc::mk_crc3(fr.crc_data());
    fr.blob[VOICE_CRC_SPAN..VOICE_CRC_SPAN + VOICE_CRC_BITS].copy_from_slice(&crc);

    let mut coded = [0u8; FRAME_DATA_LEN];
    convenc::encode_tail_biting(&fr.blob[..PHASE1_BITS], &mut coded[..2 * PHASE1_BITS]);
    coded[2 * PHASE1_BITS..].copy_from_slice(&fr.blob[PHASE1_BITS..VOICE_FRAME_BITS]);
    coded
}
