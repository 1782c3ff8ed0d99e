//! Configuration module for the instagram-downloader.
//!
//! This module handles:
//! - Loading the optional TOML configuration file
//! - Run mode selection
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{default_config_path, ClientConfig, Config, OptionsConfig, SessionConfig};
pub use modes::RunMode;
pub use validation::validate_config;
