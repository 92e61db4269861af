//! CLI error types and exit codes.

use workbench_core::error::ConfigError;
use workbench_core::parts::PartsLayoutError;
use workbench_core::tracing::TracingError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, logging or other non-layout errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Layout error - the layout or an id given on the command line was rejected
    pub const LAYOUT_ERROR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging setup error
    #[error("Logging error: {0}")]
    Logging(String),

    /// Layout operation or serialized layout rejected
    #[error("Layout error: {0}")]
    Layout(#[from] PartsLayoutError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<TracingError> for CliError {
    fn from(err: TracingError) -> Self {
        Self::Logging(err.to_string())
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, logging)
    /// - 2: Layout error (rejected operation, bad serialized layout, bad id)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Layout(_) | Self::InvalidArgument(_) => exit_codes::LAYOUT_ERROR,
            Self::Config(_) | Self::Logging(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
