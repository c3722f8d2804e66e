//! Constant tables of the TETRAPOL physical frame: scrambling sequences,
//! UHF differential precoding offsets and interleaving permutations.
//! See PAS 0001-2 clauses 6.1 to 6.3.

/// Number of bits in a frame, sync byte excluded
pub const FRAME_DATA_LEN: usize = 152;

/// Number of bytes in a packed frame, sync byte excluded
pub const FRAME_BYTES: usize = FRAME_DATA_LEN / 8;

/// Synchronization byte leading every frame on the wire. PAS 0001-2 6.1.5.2, 6.2.5.2
pub const FRAME_HDR: u8 = 0x46;

/// Bytes in a frame on the wire, sync byte included
pub const WIRE_FRAME_BYTES: usize = FRAME_BYTES + 1;

/// Raw bits of the first frame part, decodable before the frame type is known
pub const FRAME_DATA_LEN1: usize = 52;

/// Period of the scrambling sequence
pub const SCRAMB_PERIOD: usize = 127;

/// Length of each byte-wise scrambling table: one frame plus room for `scr / 8` up to 15
pub const SCRAMB_TABLE_BYTES: usize = 19 + 16;

/// Scrambling sequence, one bit per entry. Maximal length LFSR with all-ones seed,
/// s[k] = s[k-1] ^ s[k-7].
pub static SCRAMB_TABLE: [u8; SCRAMB_PERIOD] = scramb_sequence::<SCRAMB_PERIOD>();

/// The scrambling sequence repacked into bytes for encoding, one table per sub-byte phase.
/// Byte `j` of table `phase` holds s[8j + phase .. 8j + phase + 8], first bit in the LSB.
pub static SCRAMB_TABLES: [[u8; SCRAMB_TABLE_BYTES]; 8] = scramb_byte_tables();

const fn scramb_sequence<const N: usize>() -> [u8; N] {
    let mut s = [0u8; N];
    let mut k = 0;
    while k < N {
        s[k] = if k < 7 { 1 } else { s[k - 1] ^ s[k - 7] };
        k += 1;
    }
    s
}

const fn scramb_byte_tables() -> [[u8; SCRAMB_TABLE_BYTES]; 8] {
    let s = scramb_sequence::<{ (SCRAMB_TABLE_BYTES + 1) * 8 }>();
    let mut tables = [[0u8; SCRAMB_TABLE_BYTES]; 8];
    let mut phase = 0;
    while phase < 8 {
        let mut j = 0;
        while j < SCRAMB_TABLE_BYTES {
            let mut val = 0u8;
            let mut b = 0;
            while b < 8 {
                val |= s[8 * j + phase + b] << b;
                b += 1;
            }
            tables[phase][j] = val;
            j += 1;
        }
        phase += 1;
    }
    tables
}

/// UHF differential precoding: bit j is XORed with bit j - DIFF_PRECOD_UHF[j].
/// Offset is 2 at positions 7, 10, .., 76 and 83, 86, .., 149, and 1 elsewhere.
pub static DIFF_PRECOD_UHF: [u8; FRAME_DATA_LEN] = [
      1,   1,   1,   1,   1,   1,   1,   2,
      1,   1,   2,   1,   1,   2,   1,   1,
      2,   1,   1,   2,   1,   1,   2,   1,
      1,   2,   1,   1,   2,   1,   1,   2,
      1,   1,   2,   1,   1,   2,   1,   1,
      2,   1,   1,   2,   1,   1,   2,   1,
      1,   2,   1,   1,   2,   1,   1,   2,
      1,   1,   2,   1,   1,   2,   1,   1,
      2,   1,   1,   2,   1,   1,   2,   1,
      1,   2,   1,   1,   2,   1,   1,   1,
      1,   1,   1,   2,   1,   1,   2,   1,
      1,   2,   1,   1,   2,   1,   1,   2,
      1,   1,   2,   1,   1,   2,   1,   1,
      2,   1,   1,   2,   1,   1,   2,   1,
      1,   2,   1,   1,   2,   1,   1,   2,
      1,   1,   2,   1,   1,   2,   1,   1,
      2,   1,   1,   2,   1,   1,   2,   1,
      1,   2,   1,   1,   2,   1,   1,   2,
      1,   1,   2,   1,   1,   2,   1,   1,
];

/// PAS 0001-2 6.1.3.1, k = 19 * p[j % 8] + (3 * (j / 8)) % 19 with p = [0, 4, 2, 6, 1, 5, 3, 7]
pub static INTERLEAVE_VOICE_VHF: [u8; FRAME_DATA_LEN] = [
      0,  76,  38, 114,  19,  95,  57, 133,
      3,  79,  41, 117,  22,  98,  60, 136,
      6,  82,  44, 120,  25, 101,  63, 139,
      9,  85,  47, 123,  28, 104,  66, 142,
     12,  88,  50, 126,  31, 107,  69, 145,
     15,  91,  53, 129,  34, 110,  72, 148,
     18,  94,  56, 132,  37, 113,  75, 151,
      2,  78,  40, 116,  21,  97,  59, 135,
      5,  81,  43, 119,  24, 100,  62, 138,
      8,  84,  46, 122,  27, 103,  65, 141,
     11,  87,  49, 125,  30, 106,  68, 144,
     14,  90,  52, 128,  33, 109,  71, 147,
     17,  93,  55, 131,  36, 112,  74, 150,
      1,  77,  39, 115,  20,  96,  58, 134,
      4,  80,  42, 118,  23,  99,  61, 137,
      7,  83,  45, 121,  26, 102,  64, 140,
     10,  86,  48, 124,  29, 105,  67, 143,
     13,  89,  51, 127,  32, 108,  70, 146,
     16,  92,  54, 130,  35, 111,  73, 149,
];

/// PAS 0001-2 6.1.4.1
pub static INTERLEAVE_VOICE_UHF: [u8; FRAME_DATA_LEN] = [
      1,  77,  38, 114,  20,  96,  59, 135,
      3,  79,  41, 117,  23,  99,  62, 138,
      5,  81,  44, 120,  26, 102,  65, 141,
      8,  84,  47, 123,  29, 105,  68, 144,
     11,  87,  50, 126,  32, 108,  71, 147,
     14,  90,  53, 129,  35, 111,  74, 150,
     17,  93,  56, 132,  37, 113,  73,   4,
      0,  76,  40, 119,  19,  95,  58, 137,
    151,  80,  42, 115,  24, 100,  60, 133,
     12,  88,  48, 121,  30, 106,  66, 139,
     18,  91,  51, 124,  28, 104,  67, 146,
     10,  89,  52, 131,  34, 110,  70, 149,
     13,  97,  57, 130,  36, 112,  75, 148,
      6,  82,  39, 116,  16,  92,  55, 134,
      2,  78,  43, 122,  22,  98,  61, 140,
      9,  85,  45, 118,  27, 103,  63, 136,
     15,  83,  46, 125,  25, 101,  64, 143,
      7,  86,  49, 128,  31, 107,  69, 142,
     21,  94,  54, 127,  33, 109,  72, 145,
];

/// PAS 0001-2 6.2.3.1, VHF data frames share the voice table
pub static INTERLEAVE_DATA_VHF: &[u8; FRAME_DATA_LEN] = &INTERLEAVE_VOICE_VHF;

/// PAS 0001-2 6.2.4.1
pub static INTERLEAVE_DATA_UHF: [u8; FRAME_DATA_LEN] = [
      1,  77,  38, 114,  20,  96,  59, 135,
      3,  79,  41, 117,  23,  99,  62, 138,
      5,  81,  44, 120,  26, 102,  65, 141,
      8,  84,  47, 123,  29, 105,  68, 144,
     11,  87,  50, 126,  32, 108,  71, 147,
     14,  90,  53, 129,  35, 111,  74, 150,
     17,  93,  56, 132,  37, 112,  76, 148,
      2,  88,  40, 115,  19,  97,  58, 133,
      4,  75,  43, 118,  22, 100,  61, 136,
      7,  85,  46, 121,  25, 103,  64, 139,
     10,  82,  49, 124,  28, 106,  67, 142,
     13,  91,  52, 127,  31, 109,  73, 145,
     16,  94,  55, 130,  34, 113,  70, 151,
      0,  80,  39, 116,  21,  95,  57, 134,
      6,  78,  42, 119,  24,  98,  60, 137,
      9,  83,  45, 122,  27, 101,  63, 140,
     12,  86,  48, 125,  30, 104,  66, 143,
     15,  89,  51, 128,  33, 107,  69, 146,
     18,  92,  54, 131,  36, 110,  72, 149,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(table: &[u8; FRAME_DATA_LEN]) -> bool {
        let mut seen = [false; FRAME_DATA_LEN];
        for &k in table.iter() {
            if seen[k as usize] {
                return false;
            }
            seen[k as usize] = true;
        }
        seen.iter().all(|&s| s)
    }

    #[test]
    fn test_scramb_sequence() {
        assert_eq!(&SCRAMB_TABLE[..16], &[1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1]);
        assert_eq!(&SCRAMB_TABLE[120..], &[1, 0, 0, 0, 0, 0, 0]);
        // maximal length sequence: 64 ones, 63 zeros
        assert_eq!(SCRAMB_TABLE.iter().filter(|&&b| b == 1).count(), 64);
    }

    #[test]
    fn test_scramb_byte_tables() {
        assert_eq!(&SCRAMB_TABLES[0][..4], &[0x7f, 0x95, 0xb9, 0x4b]);
        assert_eq!(&SCRAMB_TABLES[3][..4], &[0xaf, 0x32, 0x77, 0x69]);
        assert_eq!(&SCRAMB_TABLES[7][32..], &[0xca, 0xdc, 0xa5]);

        for phase in 0..8 {
            for j in 0..SCRAMB_TABLE_BYTES {
                for b in 0..8 {
                    let expected = SCRAMB_TABLE[(8 * j + phase + b) % SCRAMB_PERIOD];
                    assert_eq!((SCRAMB_TABLES[phase][j] >> b) & 1, expected, "phase {} byte {} bit {}", phase, j, b);
                }
            }
        }
    }

    #[test]
    fn test_diff_precod_offsets() {
        assert_eq!(DIFF_PRECOD_UHF.iter().filter(|&&o| o == 2).count(), 47);
        assert!(DIFF_PRECOD_UHF.iter().all(|&o| o == 1 || o == 2));
        assert_eq!(DIFF_PRECOD_UHF[7], 2);
        assert_eq!(DIFF_PRECOD_UHF[79], 1);
        assert_eq!(DIFF_PRECOD_UHF[83], 2);
    }

    #[test]
    fn test_interleave_tables_are_permutations() {
        assert!(is_permutation(&INTERLEAVE_VOICE_VHF));
        assert!(is_permutation(&INTERLEAVE_VOICE_UHF));
        assert!(is_permutation(INTERLEAVE_DATA_VHF));
        assert!(is_permutation(&INTERLEAVE_DATA_UHF));
    }

    #[test]
    fn test_interleave_voice_vhf_formula() {
        const P: [usize; 8] = [0, 4, 2, 6, 1, 5, 3, 7];
        for j in 0..FRAME_DATA_LEN {
            assert_eq!(INTERLEAVE_VOICE_VHF[j] as usize, 19 * P[j % 8] + (3 * (j / 8)) % 19);
        }
    }

    #[test]
    fn test_first_phase_shared_between_types() {
        // Bits needed before the frame type is known must not depend on it
        assert_eq!(&INTERLEAVE_VOICE_UHF[..52], &INTERLEAVE_DATA_UHF[..52]);
    }
}
