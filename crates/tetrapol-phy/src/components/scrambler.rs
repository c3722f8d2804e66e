//! Scrambling/unscrambling of the 152 frame bits
//! See PAS 0001-2 6.1.5.1, 6.2.5.1 and 6.3.4.1
//!
//! SCR 0 means the channel is not scrambled.

use tetrapol_core::Scr;

use super::frame_consts::{FRAME_BYTES, FRAME_DATA_LEN, SCRAMB_PERIOD, SCRAMB_TABLE, SCRAMB_TABLES};

/// Descramble a received frame, one bit per byte. Bit k is XORed with
/// sequence bit (k + scr) mod 127, since received frames are not aligned
/// to the sequence on byte boundaries.
pub fn frame_descramble(fr_data_tmp: &mut [u8; FRAME_DATA_LEN], fr_data: &[u8; FRAME_DATA_LEN], scr: Scr) {
    if scr == 0 {
        fr_data_tmp.copy_from_slice(fr_data);
        return;
    }

    let scr = scr as usize;
    for (k, (out, &bit)) in fr_data_tmp.iter_mut().zip(fr_data.iter()).enumerate() {
        *out = bit ^ SCRAMB_TABLE[(k + scr) % SCRAMB_PERIOD];
    }
}

/// Scramble a frame packed into bytes (first bit in LSB), in place.
/// Works on whole bytes: the sub-byte phase `scr % 8` selects the table,
/// `scr / 8` is the byte offset into it.
pub fn frame_scramble(fr_data: &mut [u8; FRAME_BYTES], scr: Scr) {
    if scr == 0 {
        return;
    }

    let scr_table = &SCRAMB_TABLES[(scr % 8) as usize];
    let offs = (scr / 8) as usize;
    for (byte, &s) in fr_data.iter_mut().zip(scr_table[offs..].iter()) {
        *byte ^= s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrapol_core::{MAX_SCR, pack_bits, unpack_bits};

    #[test]
    fn test_scr_zero_is_noop() {
        let bits: [u8; FRAME_DATA_LEN] = std::array::from_fn(|i| (i % 3 == 0) as u8);
        let mut out = [0u8; FRAME_DATA_LEN];
        frame_descramble(&mut out, &bits, 0);
        assert_eq!(out, bits);

        let mut bytes = [0x5au8; FRAME_BYTES];
        frame_scramble(&mut bytes, 0);
        assert_eq!(bytes, [0x5au8; FRAME_BYTES]);
    }

    #[test]
    fn test_descramble_inverts_scramble() {
        // Byte tables and bit table are two representations of one sequence
        for scr in 0..=MAX_SCR {
            let bits: [u8; FRAME_DATA_LEN] = std::array::from_fn(|_| rand::random_range(0..2));
            let mut bytes = [0u8; FRAME_BYTES];
            pack_bits(&mut bytes, &bits, 0, FRAME_DATA_LEN);

            frame_scramble(&mut bytes, scr);
            let mut scrambled = [0u8; FRAME_DATA_LEN];
            unpack_bits(&bytes, &mut scrambled, 0, FRAME_DATA_LEN);
            if scr != 0 {
                assert_ne!(scrambled, bits, "scr {}", scr);
            }

            let mut descrambled = [0u8; FRAME_DATA_LEN];
            frame_descramble(&mut descrambled, &scrambled, scr);
            assert_eq!(descrambled, bits, "scr {}", scr);
        }
    }

    #[test]
    fn test_descramble_zero_frame_yields_sequence() {
        let zeros = [0u8; FRAME_DATA_LEN];
        let mut out = [0u8; FRAME_DATA_LEN];
        frame_descramble(&mut out, &zeros, 5);
        assert_eq!(&out[..8], &SCRAMB_TABLE[5..13]);
        // sequence wraps after 127 bits
        assert_eq!(out[122], SCRAMB_TABLE[0]);
    }
}
