//! Error types for settings resolution.

use thiserror::Error;

/// Errors that can occur while resolving connection settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Settings file is not valid YAML or has unexpected fields.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A setting has a value that cannot be used.
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    /// No home directory to place the default database file in.
    #[error("could not determine the home directory")]
    HomeDirNotFound,
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
