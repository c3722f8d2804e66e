use std::fmt;

use serde::Deserialize;

/// Physical channel direction, as seen from the base station
#[derive(Debug, Clone, PartialEq, Eq, Copy, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Direction {
    /// Downlink
    #[default]
    Dl,
    /// Uplink
    Ul,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Dl => write!(f, "downlink"),
            Direction::Ul => write!(f, "uplink"),
        }
    }
}
