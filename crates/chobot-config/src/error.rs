//! Configuration loading errors.

use std::path::PathBuf;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The env file exists but could not be loaded
    #[error("Failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Name of the variable.
        var: String,
        /// Underlying error.
        #[source]
        source: std::num::ParseIntError,
    },

    /// Configuration validation error
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
