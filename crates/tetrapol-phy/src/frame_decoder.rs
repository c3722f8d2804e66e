use tetrapol_core::bit_utils::bits_to_bitstr;
use tetrapol_core::{Band, FrameCodecErr, FrameType, Scr, assert_warn, unpack_bits, validate_scr};

use crate::components::{crc, diff_precod, interleaver, scrambler, viterbi};
use crate::frame::{FRAME_BYTES, FRAME_DATA_LEN, Frame, FrameStatus, PHASE1_BITS, PHASE2_BITS, VOICE_PAYLOAD_BITS};

/// First frame part is considered broken when the Viterbi decoder corrects this many bits
pub const PHASE1_MAX_ERRS: u32 = 6;

/// Second part of a data frame is considered broken when the Viterbi decoder corrects this many bits
pub const PHASE2_MAX_ERRS: u32 = 11;

/// Decoder for frames of one physical channel.
///
/// Decoding is stateless apart from the channel configuration, so `decode` takes `&self`
/// and a decoder may be shared between threads. Changing the SCR requires `&mut self`.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    band: Band,
    scr: Scr,
    fr_type: FrameType,
}

impl FrameDecoder {
    pub fn new(band: Band, scr: Scr, fr_type: FrameType) -> Result<Self, FrameCodecErr> {
        let scr = validate_scr(scr)?;
        tracing::debug!("FrameDecoder::new band {:?} scr {} fr_type {:?}", band, scr, fr_type);
        Ok(Self { band, scr, fr_type })
    }

    /// Reconfigure the decoder for another channel. On error the decoder is left unchanged.
    pub fn reset(&mut self, band: Band, scr: Scr, fr_type: FrameType) -> Result<(), FrameCodecErr> {
        self.scr = validate_scr(scr)?;
        self.band = band;
        self.fr_type = fr_type;
        Ok(())
    }

    #[inline]
    pub fn get_scr(&self) -> Scr {
        self.scr
    }

    pub fn set_scr(&mut self, scr: Scr) -> Result<(), FrameCodecErr> {
        let scr = validate_scr(scr)?;
        if scr != self.scr {
            tracing::debug!("FrameDecoder: scr {} -> {}", self.scr, scr);
        }
        self.scr = scr;
        Ok(())
    }

    #[inline]
    pub fn band(&self) -> Band {
        self.band
    }

    /// Requested frame type
    #[inline]
    pub fn fr_type(&self) -> FrameType {
        self.fr_type
    }

    /// Decode a frame given as one bit per byte, sync byte and line code already removed.
    /// Every outcome is reported through `Frame::status`.
    pub fn decode(&self, fr_data: &[u8; FRAME_DATA_LEN]) -> Frame {
        let mut fr = Frame::default();

        if !self.fr_type.is_decodable() {
            tracing::debug!("decode: frame type {:?} not supported", self.fr_type);
            fr.fr_type = self.fr_type;
            fr.status = FrameStatus::Unsupported;
            return fr;
        }

        let mut fr_data_tmp = [0u8; FRAME_DATA_LEN];
        scrambler::frame_descramble(&mut fr_data_tmp, fr_data, self.scr);
        if self.band == Band::Uhf {
            diff_precod::frame_diff_dec(&mut fr_data_tmp);
        }
        tracing::trace!("decode: descrambled {}", bits_to_bitstr(&fr_data_tmp));

        // Phase 1, common to all frame types. It carries the discriminator bit.
        let mut fr_data_deint = [0u8; FRAME_DATA_LEN];
        interleaver::frame_deinterleave1(&mut fr_data_deint, &fr_data_tmp, self.band);
        let f1 = viterbi::frame_viterbi(&mut fr.blob[..PHASE1_BITS], &fr_data_deint[..2 * PHASE1_BITS]);
        fr.bits_fixed += f1;
        let mut broken = f1 >= PHASE1_MAX_ERRS;

        fr.fr_type = match self.fr_type {
            FrameType::Auto => FrameType::from_discriminator(fr.blob[0]),
            fr_type => fr_type,
        };
        tracing::trace!(
            "decode: phase1 {} dist {} type {:?}",
            bits_to_bitstr(&fr.blob[..PHASE1_BITS]),
            f1,
            fr.fr_type
        );

        // Phase 2, table depends on the resolved frame type
        interleaver::frame_deinterleave2(&mut fr_data_deint, &fr_data_tmp, self.band, fr.fr_type);
        let raw2 = &fr_data_deint[2 * PHASE1_BITS..];
        if !broken && fr.fr_type != FrameType::Voice {
            let f2 = viterbi::frame_viterbi(&mut fr.blob[PHASE1_BITS..PHASE1_BITS + PHASE2_BITS], raw2);
            fr.bits_fixed += f2;
            broken = f2 >= PHASE2_MAX_ERRS;
            tracing::trace!("decode: phase2 dist {}", f2);
        } else {
            fr.blob[PHASE1_BITS..PHASE1_BITS + VOICE_PAYLOAD_BITS].copy_from_slice(raw2);
        }
        fr.syndromes = fr.bits_fixed;

        if broken {
            tracing::debug!("decode: broken frame, {} bits fixed", fr.bits_fixed);
            fr.status = FrameStatus::FecUncorrectable;
            return fr;
        }

        fr.status = if check_crc(&fr) { FrameStatus::Ok } else { FrameStatus::CrcMismatch };
        if fr.status == FrameStatus::CrcMismatch {
            tracing::debug!("decode: crc mismatch, type {:?}", fr.fr_type);
        } else if fr.fr_type == FrameType::Data {
            let padding = fr.data_padding();
            assert_warn!(padding.iter().all(|&b| b == 0), "nonzero padding {:?} in data frame", padding);
        }
        fr
    }

    /// Decode a frame packed into bytes, first bit in the LSB
    pub fn decode_bytes(&self, fr_bytes: &[u8; FRAME_BYTES]) -> Frame {
        let mut fr_data = [0u8; FRAME_DATA_LEN];
        unpack_bits(fr_bytes, &mut fr_data, 0, FRAME_DATA_LEN);
        self.decode(&fr_data)
    }
}

/// Check the discriminator bit against the frame type, then the type's CRC
fn check_crc(fr: &Frame) -> bool {
    if fr.fr_type.discriminator() != Some(fr.discriminator()) {
        return false;
    }

    match fr.fr_type {
        FrameType::Data => crc::mk_crc5(fr.crc_data()) == fr.crc(),
        FrameType::Voice => crc::mk_crc3(fr.crc_data()) == fr.crc(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{DATA_CRC_BITS, DATA_CRC_SPAN};

    #[test]
    fn test_new_rejects_bad_scr() {
        assert_eq!(
            FrameDecoder::new(Band::Vhf, 127, FrameType::Auto).unwrap_err(),
            FrameCodecErr::InvalidScr { value: 127 }
        );
        let mut fd = FrameDecoder::new(Band::Uhf, 126, FrameType::Data).unwrap();
        assert!(fd.set_scr(200).is_err());
        assert_eq!(fd.get_scr(), 126);
        fd.set_scr(3).unwrap();
        assert_eq!(fd.get_scr(), 3);
    }

    #[test]
    fn test_reset() {
        let mut fd = FrameDecoder::new(Band::Vhf, 0, FrameType::Auto).unwrap();
        fd.reset(Band::Uhf, 17, FrameType::Voice).unwrap();
        assert_eq!((fd.band(), fd.get_scr(), fd.fr_type()), (Band::Uhf, 17, FrameType::Voice));
        assert!(fd.reset(Band::Vhf, 255, FrameType::Auto).is_err());
        assert_eq!(fd.band(), Band::Uhf);
    }

    #[test]
    fn test_unsupported_type() {
        let fd = FrameDecoder::new(Band::Vhf, 0, FrameType::HrData).unwrap();
        let fr = fd.decode(&[0u8; FRAME_DATA_LEN]);
        assert_eq!(fr.status, FrameStatus::Unsupported);
        assert_eq!(fr.status.code(), -2);
    }

    #[test]
    fn test_all_zero_frame() {
        // The all-zero code word decodes to all-zero bits: a voice frame whose CRC-3 is wrong
        let fd = FrameDecoder::new(Band::Vhf, 0, FrameType::Auto).unwrap();
        let fr = fd.decode(&[0u8; FRAME_DATA_LEN]);
        assert_eq!(fr.fr_type, FrameType::Voice);
        assert_eq!(fr.bits_fixed, 0);
        assert_eq!(fr.status, FrameStatus::CrcMismatch);
    }

    #[test]
    fn test_check_crc() {
        let mut payload = [0u8; 68];
        payload[4] = 1;
        let mut fr = Frame::new_data(&payload);
        let crc = crc::mk_crc5(fr.crc_data());
        fr.blob[DATA_CRC_SPAN..DATA_CRC_SPAN + DATA_CRC_BITS].copy_from_slice(&crc);
        assert!(check_crc(&fr));

        // Discriminator says data, requested voice
        fr.fr_type = FrameType::Voice;
        assert!(!check_crc(&fr));

        fr.fr_type = FrameType::Data;
        fr.blob[5] = 0;
        assert!(!check_crc(&fr));
    }
}
