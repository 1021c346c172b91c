//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read the config file
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// A field failed validation
    #[error("Invalid configuration for {field}: {message}")]
    Validation { field: String, message: String },
}
