mod common;

use tetrapol_core::{Band, Direction, FrameType, MAX_SCR, debug};
use tetrapol_phy::{Frame, FrameDecoder, FrameEncoder, FrameStatus, LineDecoder};
use common::{Link, random_bits};

#[test]
fn test_zero_data_frame_vhf() {
    debug::setup_logging_verbose();
    let mut link = Link::new(Band::Vhf, 0, FrameType::Auto);

    let mut fr = Frame::new_data(&[0u8; 68]);
    let bits = link.transmit(&mut fr);
    let out = link.dec.decode(&bits);

    assert_eq!(out.status, FrameStatus::Ok);
    assert_eq!(out.status.code(), 0);
    assert_eq!(out.fr_type, FrameType::Data);
    assert_eq!(out.bits_fixed, 0);
    assert_eq!(out.data_payload(), &[0u8; 68][..]);
    assert_eq!(out.message_bits(), fr.message_bits());
}

#[test]
fn test_data_frames_all_bands_and_scr() {
    debug::setup_logging_verbose();
    for band in [Band::Vhf, Band::Uhf] {
        for scr in 0..=MAX_SCR {
            let mut link = Link::new(band, scr, FrameType::Auto);
            let mut fr = Frame::new_data(&random_bits::<68>());
            let bits = link.transmit(&mut fr);
            let out = link.dec.decode(&bits);

            assert!(out.is_ok(), "{:?} scr {}: {}", band, scr, out);
            assert_eq!(out.fr_type, FrameType::Data);
            assert_eq!(out.message_bits(), fr.message_bits(), "{:?} scr {}", band, scr);
        }
    }
}

#[test]
fn test_voice_frames_all_bands() {
    debug::setup_logging_verbose();
    for band in [Band::Vhf, Band::Uhf] {
        let scr = rand::random_range(0..=MAX_SCR);
        let mut link = Link::new(band, scr, FrameType::Auto);
        for _ in 0..10 {
            let mut fr = Frame::new_voice(&random_bits::<22>(), &random_bits::<100>());
            let bits = link.transmit(&mut fr);
            let out = link.dec.decode(&bits);

            assert!(out.is_ok(), "{:?} scr {}: {}", band, scr, out);
            assert_eq!(out.fr_type, FrameType::Voice);
            assert_eq!(out.voice_header(), fr.voice_header());
            assert_eq!(out.voice_payload(), fr.voice_payload());
            assert_eq!(out.crc(), fr.crc());
        }
    }
}

#[test]
fn test_mixed_stream_keeps_line_code_in_sync() {
    // The line code runs over the whole stream, every frame depends on the one before
    debug::setup_logging_verbose();
    let mut link = Link::new(Band::Uhf, 77, FrameType::Auto);
    for i in 0..50 {
        let mut fr = if rand::random::<bool>() {
            Frame::new_data(&random_bits::<68>())
        } else {
            Frame::new_voice(&random_bits::<22>(), &random_bits::<100>())
        };
        let bits = link.transmit(&mut fr);
        let out = link.dec.decode(&bits);
        assert!(out.is_ok(), "frame {}: {}", i, out);
        assert_eq!(out.fr_type, fr.fr_type);
        assert_eq!(out.message_bits(), fr.message_bits());
    }
}

#[test]
fn test_decode_bytes_matches_decode() {
    debug::setup_logging_verbose();
    let mut enc = FrameEncoder::new(Band::Uhf, 100, Direction::Dl).unwrap();
    let dec = FrameDecoder::new(Band::Uhf, 100, FrameType::Data).unwrap();
    let mut line_dec = LineDecoder::new();

    let mut fr = Frame::new_data(&random_bits::<68>());
    let wire = enc.encode(&mut fr).unwrap();
    let fr_bytes = line_dec.decode_wire(&wire).unwrap();

    let out = dec.decode_bytes(&fr_bytes);
    assert!(out.is_ok());
    assert_eq!(out.data_payload(), fr.data_payload());
}

#[test]
fn test_scr_change_mid_stream() {
    debug::setup_logging_verbose();
    let mut link = Link::new(Band::Vhf, 10, FrameType::Auto);
    let mut fr = Frame::new_data(&random_bits::<68>());
    let bits = link.transmit(&mut fr);
    assert!(link.dec.decode(&bits).is_ok());

    // Wrong SCR leaves a pseudo random error pattern, far beyond what the code corrects
    link.enc.set_scr(11).unwrap();
    let bits = link.transmit(&mut fr);
    assert_eq!(link.dec.decode(&bits).status, FrameStatus::FecUncorrectable);

    link.dec.set_scr(11).unwrap();
    assert!(link.dec.decode(&bits).is_ok());
}
