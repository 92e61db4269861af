//! Error types for the workbench core
//!
//! Layout engine errors live next to the engine in
//! [`crate::parts::PartsLayoutError`]; this module holds the errors of the
//! persistence layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for the settings schema
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    /// Settings could not be written as TOML
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    /// No per-user configuration directory is known on this platform
    #[error("Could not determine the configuration directory")]
    NoConfigDir,

    /// A settings value is out of its allowed range
    #[error("Invalid value for {field}: {reason}")]
    Validation {
        /// Dotted path of the offending key
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
