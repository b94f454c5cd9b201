//! Error types for generator configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a generator configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Invalid data type override for '{schema_type}'")]
    InvalidDataType { schema_type: String },

    #[error("Invalid model package name: '{0}'")]
    InvalidModelPkg(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
