pub mod convenc;
pub mod crc;
pub mod diff_precod;
pub mod frame_consts;
pub mod interleaver;
pub mod line_code;
pub mod scrambler;
pub mod viterbi;
