use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tetrapol_core::{Band, Direction, FrameType, Scr};
use toml::Value;

use super::channel_config::{ChannelConfig, CodecConfig};

/// Build `CodecConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<CodecConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.1";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref ch) = root.channel {
        if !ch.extra.is_empty() {
            return Err(format!("Unrecognized fields in channel: {:?}", sorted_keys(&ch.extra)).into());
        }
    }

    let mut cfg = CodecConfig {
        debug_log: root.debug_log,
        channel: ChannelConfig::default(),
    };
    if let Some(ch) = root.channel {
        apply_channel_patch(&mut cfg.channel, ch);
    }
    cfg.channel.validate()?;

    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

/// Build `CodecConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<CodecConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `CodecConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CodecConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let cfg = from_reader(r)?;
    Ok(cfg)
}

fn apply_channel_patch(dst: &mut ChannelConfig, ch: ChannelDto) {
    if let Some(v) = ch.band {
        dst.band = v;
    }
    if let Some(v) = ch.scr {
        dst.scr = v;
    }
    if let Some(v) = ch.frame_type {
        dst.frame_type = v;
    }
    if let Some(v) = ch.direction {
        dst.direction = v;
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    channel: Option<ChannelDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct ChannelDto {
    pub band: Option<Band>,
    pub scr: Option<Scr>,
    pub frame_type: Option<FrameType>,
    pub direction: Option<Direction>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}
