use tetrapol_core::{Band, FrameType};

use super::frame_consts::{
    FRAME_DATA_LEN, FRAME_DATA_LEN1, INTERLEAVE_DATA_UHF, INTERLEAVE_DATA_VHF, INTERLEAVE_VOICE_UHF, INTERLEAVE_VOICE_VHF,
};

/// Interleaving table for a band and frame type. Anything but data frames uses the voice table.
pub fn interleave_table(band: Band, fr_type: FrameType) -> &'static [u8; FRAME_DATA_LEN] {
    match (band, fr_type) {
        (Band::Vhf, FrameType::Data) => INTERLEAVE_DATA_VHF,
        (Band::Vhf, _) => &INTERLEAVE_VOICE_VHF,
        (Band::Uhf, FrameType::Data) => &INTERLEAVE_DATA_UHF,
        (Band::Uhf, _) => &INTERLEAVE_VOICE_UHF,
    }
}

/// Deinterleave the first part of a frame, common for data and voice frames
pub fn frame_deinterleave1(fr_data_deint: &mut [u8; FRAME_DATA_LEN], fr_data: &[u8; FRAME_DATA_LEN], band: Band) {
    let int_table = interleave_table(band, FrameType::Data);
    for j in 0..FRAME_DATA_LEN1 {
        fr_data_deint[j] = fr_data[int_table[j] as usize];
    }
}

/// Deinterleave the second part of a frame, which differs for data and voice frames
pub fn frame_deinterleave2(
    fr_data_deint: &mut [u8; FRAME_DATA_LEN],
    fr_data: &[u8; FRAME_DATA_LEN],
    band: Band,
    fr_type: FrameType,
) {
    let int_table = interleave_table(band, fr_type);
    for j in FRAME_DATA_LEN1..FRAME_DATA_LEN {
        fr_data_deint[j] = fr_data[int_table[j] as usize];
    }
}

/// Interleave a whole frame, scattering input bit j to output position int_table[j]
pub fn frame_interleave(out: &mut [u8; FRAME_DATA_LEN], input: &[u8; FRAME_DATA_LEN], int_table: &[u8; FRAME_DATA_LEN]) {
    for (j, &bit) in input.iter().enumerate() {
        out[int_table[j] as usize] = bit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(band: Band, fr_type: FrameType) {
        let data: [u8; FRAME_DATA_LEN] = std::array::from_fn(|_| rand::random_range(0..2));
        let mut tmp = [0u8; FRAME_DATA_LEN];
        let mut out = [0u8; FRAME_DATA_LEN];

        frame_interleave(&mut tmp, &data, interleave_table(band, fr_type));
        frame_deinterleave1(&mut out, &tmp, band);
        frame_deinterleave2(&mut out, &tmp, band, fr_type);
        assert_eq!(data, out, "{:?} {:?}", band, fr_type);
    }

    #[test]
    fn test_interleave_roundtrip() {
        for band in [Band::Vhf, Band::Uhf] {
            for fr_type in [FrameType::Data, FrameType::Voice] {
                roundtrip(band, fr_type);
            }
        }
    }

    #[test]
    fn test_interleave_positions() {
        // Use distinct values to follow single positions through the permutation
        let mut marker = [0u8; FRAME_DATA_LEN];
        marker[1] = 1;
        let mut out = [0u8; FRAME_DATA_LEN];
        frame_interleave(&mut out, &marker, interleave_table(Band::Vhf, FrameType::Voice));
        assert_eq!(out[76], 1);
        assert_eq!(out.iter().filter(|&&b| b == 1).count(), 1);

        let mut out = [0u8; FRAME_DATA_LEN];
        frame_interleave(&mut out, &marker, interleave_table(Band::Uhf, FrameType::Data));
        assert_eq!(out[77], 1);
    }

    #[test]
    fn test_table_selection() {
        assert!(std::ptr::eq(interleave_table(Band::Vhf, FrameType::Data), interleave_table(Band::Vhf, FrameType::Voice)));
        assert!(!std::ptr::eq(interleave_table(Band::Uhf, FrameType::Data), interleave_table(Band::Uhf, FrameType::Voice)));
        assert!(std::ptr::eq(interleave_table(Band::Uhf, FrameType::Auto), &INTERLEAVE_VOICE_UHF));
    }
}
