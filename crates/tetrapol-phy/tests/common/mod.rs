#![allow(dead_code)]

use tetrapol_core::{Band, Direction, FrameType, Scr, unpack_bits};
use tetrapol_phy::components::{convenc, interleaver, scrambler};
use tetrapol_phy::frame::{FRAME_BLOB_LEN, FRAME_DATA_LEN};
use tetrapol_phy::{Frame, FrameDecoder, FrameEncoder, LineDecoder};

pub fn random_bits<const N: usize>() -> [u8; N] {
    std::array::from_fn(|_| rand::random_range(0..2))
}

/// Transmitter and receiver of one channel, connected back to back.
/// The receiver undoes the line code the way a demodulator would.
pub struct Link {
    pub enc: FrameEncoder,
    pub line_dec: LineDecoder,
    pub dec: FrameDecoder,
}

impl Link {
    pub fn new(band: Band, scr: Scr, rx_type: FrameType) -> Self {
        Self {
            enc: FrameEncoder::new(band, scr, Direction::Dl).unwrap(),
            line_dec: LineDecoder::new(),
            dec: FrameDecoder::new(band, scr, rx_type).unwrap(),
        }
    }

    /// Encode a frame and return the received bits, one bit per byte
    pub fn transmit(&mut self, fr: &mut Frame) -> [u8; FRAME_DATA_LEN] {
        let wire = self.enc.encode(fr).unwrap();
        let fr_bytes = self.line_dec.decode_wire(&wire).expect("sync byte lost");
        let mut bits = [0u8; FRAME_DATA_LEN];
        unpack_bits(&fr_bytes, &mut bits, 0, FRAME_DATA_LEN);
        bits
    }
}

/// Build the received bits of a VHF frame from message bits as they are, without
/// touching discriminator or CRC. Lets tests produce frames with a bad CRC.
pub fn raw_vhf_frame(scr: Scr, fr_type: FrameType, blob: &[u8; FRAME_BLOB_LEN]) -> [u8; FRAME_DATA_LEN] {
    let mut coded = [0u8; FRAME_DATA_LEN];
    let (coded1, coded2) = coded.split_at_mut(52);
    convenc::encode_tail_biting(&blob[..26], coded1);
    if fr_type == FrameType::Data {
        convenc::encode_tail_biting(&blob[26..76], coded2);
    } else {
        coded2.copy_from_slice(&blob[26..126]);
    }

    let mut fr_data = [0u8; FRAME_DATA_LEN];
    interleaver::frame_interleave(&mut fr_data, &coded, interleaver::interleave_table(Band::Vhf, fr_type));

    // Scrambling is a plain XOR with the sequence
    let mut out = [0u8; FRAME_DATA_LEN];
    scrambler::frame_descramble(&mut out, &fr_data, scr);
    out
}

/// Flip bits of a received VHF frame at the given positions after deinterleaving.
/// Scrambling is linear, so this works for any SCR.
pub fn flip_deinterleaved(bits: &mut [u8; FRAME_DATA_LEN], fr_type: FrameType, positions: &[usize]) {
    let table = interleaver::interleave_table(Band::Vhf, fr_type);
    for &j in positions {
        bits[table[j] as usize] ^= 1;
    }
}
