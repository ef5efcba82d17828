//! Configuration handling for altergen

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::{Error, Result};

/// Load configuration from a TOML file
pub fn load_from_file(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))?;

    Ok(config)
}

/// Represents the complete altergen configuration
///
/// Configuration only affects the command-line layer; the parser and diff
/// generator take no configuration.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

/// Output generation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// "sql" or "json"
    pub format: String,
    /// Print the change summary after the statements
    pub summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "sql".to_string(),
            summary: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub format: String,
    pub stdout: bool,
}
