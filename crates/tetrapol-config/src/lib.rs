//! TETRAPOL channel configuration
//!
//! This crate provides configuration loading for the frame codec tools:
//! - TOML configuration file parsing
//! - Channel configuration: band, scrambling constant, frame type and direction

pub mod channel_config;
pub mod toml_config;

pub use channel_config::*;
pub use toml_config::*;
