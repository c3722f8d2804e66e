use clap::{Parser, Subcommand};

use tetrapol_config::{CodecConfig, toml_config};
use tetrapol_core::bit_utils::{bits_from_bitstr, bits_to_bitstr, bytes_from_hex, bytes_to_hex};
use tetrapol_core::{Band, Direction, FrameCodecErr, FrameType, debug, expect_len, unpack_bits};
use tetrapol_phy::frame::{FRAME_BYTES, FRAME_DATA_LEN, WIRE_FRAME_BYTES};
use tetrapol_phy::{Frame, FrameDecoder, FrameEncoder, LineDecoder};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "TETRAPOL Frame Codec Tool",
    long_about = "Decodes or encodes a single TETRAPOL physical frame for a given channel configuration"
)]
struct Args {
    #[arg(short = 'c', long = "config", global = true, help = "TOML config with channel parameters")]
    config: Option<String>,

    #[arg(long, global = true, help = "Band, overrides config: [ vhf | uhf ]")]
    band: Option<String>,

    #[arg(long, global = true, help = "Scrambling constant 0..=126, overrides config")]
    scr: Option<u8>,

    #[arg(long = "type", global = true, help = "Requested frame type, overrides config: [ auto | data | voice ]")]
    fr_type: Option<String>,

    #[arg(long = "dir", global = true, help = "Direction, overrides config: [ dl | ul ]")]
    direction: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a frame given as hex
    Decode {
        #[arg(help = "19 byte frame, or 20 byte line coded wire frame with --wire")]
        hex: String,

        #[arg(long, help = "Input is a wire frame with sync byte and line code")]
        wire: bool,

        #[arg(long, default_value_t = 0, help = "Flip this many random bits before decoding")]
        flip: usize,
    },
    /// Encode a data or voice frame into a wire frame
    Encode {
        #[arg(long, conflicts_with = "voice", help = "68 payload bits of a data frame")]
        data: Option<String>,

        #[arg(long, help = "22 header bits followed by 100 codec bits of a voice frame")]
        voice: Option<String>,
    },
}

/// Load configuration file
fn load_config_from_toml(cfg_path: &str) -> CodecConfig {
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

fn exit_with(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}

/// Apply command line overrides on top of the config file
fn apply_overrides(cfg: &mut CodecConfig, args: &Args) -> Result<(), String> {
    if let Some(band) = &args.band {
        cfg.channel.band = match band.to_lowercase().as_str() {
            "vhf" | "1" => Band::Vhf,
            "uhf" | "2" => Band::Uhf,
            _ => return Err(format!("Unsupported band '{}'. Use: vhf, uhf", band)),
        };
    }
    if let Some(scr) = args.scr {
        cfg.channel.scr = scr;
    }
    if let Some(fr_type) = &args.fr_type {
        cfg.channel.frame_type = match fr_type.to_lowercase().as_str() {
            "auto" => FrameType::Auto,
            "data" => FrameType::Data,
            "voice" => FrameType::Voice,
            _ => return Err(format!("Unsupported frame type '{}'. Use: auto, data, voice", fr_type)),
        };
    }
    if let Some(dir) = &args.direction {
        cfg.channel.direction = match dir.to_lowercase().as_str() {
            "dl" | "downlink" => Direction::Dl,
            "ul" | "uplink" => Direction::Ul,
            _ => return Err(format!("Unsupported direction '{}'. Use: ul, dl", dir)),
        };
    }
    cfg.channel.validate().map_err(|e| e.to_string())
}

/// Parse the hex input into the inner 19 byte frame, undoing the line code of wire frames
fn parse_frame_bytes(hex: &str, wire: bool) -> Result<[u8; FRAME_BYTES], FrameCodecErr> {
    let bytes = bytes_from_hex(hex)?;
    if !wire {
        expect_len!(bytes.len(), FRAME_BYTES)?;
        let mut fr_bytes = [0u8; FRAME_BYTES];
        fr_bytes.copy_from_slice(&bytes);
        return Ok(fr_bytes);
    }

    expect_len!(bytes.len(), WIRE_FRAME_BYTES)?;
    let mut wire_bytes = [0u8; WIRE_FRAME_BYTES];
    wire_bytes.copy_from_slice(&bytes);
    LineDecoder::new().decode_wire(&wire_bytes).ok_or(FrameCodecErr::MissingSync)
}

fn run_decode(cfg: &CodecConfig, hex: &str, wire: bool, flip: usize) -> Result<(), FrameCodecErr> {
    let fr_bytes = parse_frame_bytes(hex, wire)?;
    let mut fr_data = [0u8; FRAME_DATA_LEN];
    unpack_bits(&fr_bytes, &mut fr_data, 0, FRAME_DATA_LEN);

    if flip > FRAME_DATA_LEN {
        return Err(FrameCodecErr::InconsistentLength { expected: FRAME_DATA_LEN, found: flip });
    }
    for k in rand::seq::index::sample(&mut rand::rng(), FRAME_DATA_LEN, flip).iter() {
        tracing::debug!("flipping bit {}", k);
        fr_data[k] ^= 1;
    }

    let ch = &cfg.channel;
    let decoder = FrameDecoder::new(ch.band, ch.scr, ch.frame_type)?;
    let fr = decoder.decode(&fr_data);

    println!("status:     {} ({})", fr.status.code(), fr.status);
    println!("type:       {:?}", fr.fr_type);
    println!("bits_fixed: {}", fr.bits_fixed);
    println!("bits:       {}", bits_to_bitstr(fr.message_bits()));
    Ok(())
}

fn run_encode(cfg: &CodecConfig, data: Option<&str>, voice: Option<&str>) -> Result<(), FrameCodecErr> {
    let mut fr = match (data, voice) {
        (Some(bitstr), None) => {
            let bits = bits_from_bitstr(bitstr)?;
            let mut payload = [0u8; 68];
            expect_len!(bits.len(), payload.len())?;
            payload.copy_from_slice(&bits);
            Frame::new_data(&payload)
        }
        (None, Some(bitstr)) => {
            let bits = bits_from_bitstr(bitstr)?;
            let mut header = [0u8; 22];
            let mut payload = [0u8; 100];
            expect_len!(bits.len(), header.len() + payload.len())?;
            header.copy_from_slice(&bits[..22]);
            payload.copy_from_slice(&bits[22..]);
            Frame::new_voice(&header, &payload)
        }
        _ => exit_with("encode needs exactly one of --data or --voice"),
    };

    let ch = &cfg.channel;
    let mut encoder = FrameEncoder::new(ch.band, ch.scr, ch.direction)?;
    let wire = encoder.encode(&mut fr)?;

    println!("bits: {}", bits_to_bitstr(fr.message_bits()));
    println!("wire: {}", bytes_to_hex(&wire));
    Ok(())
}

fn main() {
    eprintln!("[+] TETRAPOL Frame Codec tool");

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => load_config_from_toml(path),
        None => CodecConfig::default(),
    };
    if let Err(e) = apply_overrides(&mut cfg, &args) {
        exit_with(e);
    }
    let _log_guard = debug::setup_logging_default(cfg.debug_log.clone());
    tracing::debug!("channel: {:?}", cfg.channel);

    let result = match &args.command {
        Command::Decode { hex, wire, flip } => run_decode(&cfg, hex, *wire, *flip),
        Command::Encode { data, voice } => run_encode(&cfg, data.as_deref(), voice.as_deref()),
    };
    if let Err(e) = result {
        exit_with(e);
    }
}
