//! TETRAPOL physical frame codec
//!
//! Turns the 152 bits of a received frame into message bits and back:
//! descrambling, UHF differential precoding, interleaving, tail-biting
//! convolutional code with Viterbi decoding and frame CRCs.

pub mod components;
pub mod frame;
pub mod frame_decoder;
pub mod frame_encoder;

pub use components::line_code::{LineDecoder, LineEncoder};
pub use frame::{Frame, FrameStatus};
pub use frame_decoder::FrameDecoder;
pub use frame_encoder::FrameEncoder;
