//! Logging utilities for altergen
//!
//! This module provides logging setup and configuration.

use std::fs::File;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Initialize logging based on configuration
pub fn init_logging(config: &Option<LoggingConfig>) -> Result<()> {
    let config = match config {
        Some(cfg) => cfg,
        None => return Ok(()), // No logging configuration, use defaults
    };

    // Parse log level
    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO, // Default to INFO
    };

    let env_filter = EnvFilter::from_default_env().add_directive(
        format!("altergen={}", level)
            .parse()
            .map_err(|e: tracing_subscriber::filter::ParseError| {
                Error::ConfigError(e.to_string())
            })?,
    );

    if let Some(file_path) = &config.file {
        // Ensure directory exists
        if let Some(parent) = Path::new(file_path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(file_path)?;

        if config.format.to_lowercase() == "json" {
            let subscriber = fmt::Subscriber::builder()
                .json()
                .with_env_filter(env_filter)
                .with_writer(file)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::ConfigError(e.to_string()))?;
        } else {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_writer(file)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::ConfigError(e.to_string()))?;
        }
    } else if config.stdout {
        if config.format.to_lowercase() == "json" {
            let subscriber = fmt::Subscriber::builder()
                .json()
                .with_env_filter(env_filter)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::ConfigError(e.to_string()))?;
        } else {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::ConfigError(e.to_string()))?;
        }
    }

    Ok(())
}
