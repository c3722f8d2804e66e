use super::frame_consts::{DIFF_PRECOD_UHF, FRAME_DATA_LEN};

/// Undo UHF differential precoding, one bit per byte. PAS 0001-2 6.1.4.2, 6.2.4.2
/// Runs from the last bit down, so each bit is combined with a still-precoded neighbour.
pub fn frame_diff_dec(fr_data: &mut [u8; FRAME_DATA_LEN]) {
    for j in (1..FRAME_DATA_LEN).rev() {
        fr_data[j] ^= fr_data[j - DIFF_PRECOD_UHF[j] as usize];
    }
}

/// Apply UHF differential precoding, one bit per byte.
/// Runs from the first bit up, so each bit is combined with an already precoded neighbour.
pub fn frame_diff_enc(fr_data: &mut [u8; FRAME_DATA_LEN]) {
    for j in 1..FRAME_DATA_LEN {
        fr_data[j] ^= fr_data[j - DIFF_PRECOD_UHF[j] as usize];
    }
}
