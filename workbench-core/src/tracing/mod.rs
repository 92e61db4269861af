//! Tracing integration for structured logging
//!
//! This module wires the `tracing` crate into the workbench: a subscriber
//! set up once per process from a [`TracingConfig`], plus span and field
//! names shared by the layout engine and its hosts.

use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Crates whose events pass the default level filter
const FILTER_TARGETS: [&str; 2] = ["workbench_core", "workbench_cli"];

/// Global flag indicating whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Global tracing configuration
static TRACING_CONFIG: OnceLock<TracingConfig> = OnceLock::new();

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,

    /// Failed to create log file
    #[error("Failed to create log file: {0}")]
    FileCreationFailed(String),
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Tracing log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingLevel {
    /// Error level - only errors
    Error,
    /// Warn level - errors and warnings (default)
    #[default]
    Warn,
    /// Info level - errors, warnings, and info
    Info,
    /// Debug level - all above plus every layout mutation
    Debug,
    /// Trace level - all messages including traversal details
    Trace,
}

impl TracingLevel {
    /// Converts to tracing crate's Level
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Raises the level by `steps` notches, saturating at trace
    #[must_use]
    pub const fn raised_by(self, steps: u8) -> Self {
        let mut level = self;
        let mut remaining = steps;
        while remaining > 0 {
            level = match level {
                Self::Error => Self::Warn,
                Self::Warn => Self::Info,
                Self::Info => Self::Debug,
                Self::Debug | Self::Trace => Self::Trace,
            };
            remaining -= 1;
        }
        level
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Output destination for tracing logs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Output to stdout
    Stdout,
    /// Output to stderr
    #[default]
    Stderr,
    /// Output to a file, truncated on startup
    File {
        /// Path to the log file
        path: PathBuf,
    },
}

impl TracingOutput {
    /// Returns true for the standard streams, which get ANSI colors
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::File { .. })
    }

    /// Opens the destination for the event formatter
    ///
    /// A file destination is created, or truncated if it exists.
    ///
    /// # Errors
    ///
    /// Returns `TracingError::FileCreationFailed` if the file cannot be created.
    pub fn open_writer(&self) -> TracingResult<BoxMakeWriter> {
        match self {
            Self::Stdout => Ok(BoxMakeWriter::new(std::io::stdout)),
            Self::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
            Self::File { path } => File::create(path)
                .map(|file| BoxMakeWriter::new(Arc::new(file)))
                .map_err(|e| TracingError::FileCreationFailed(format!("{}: {e}", path.display()))),
        }
    }
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log level
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// Whether to include thread ids in events
    pub thread_ids: bool,
    /// Custom filter string (overrides level if set)
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a new tracing configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output destination
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Enables or disables thread ids
    #[must_use]
    pub const fn with_thread_ids(mut self, enabled: bool) -> Self {
        self.thread_ids = enabled;
        self
    }

    /// Sets a custom filter string
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Creates a configuration for development (debug level, stdout)
    #[must_use]
    pub const fn development() -> Self {
        Self {
            level: TracingLevel::Debug,
            output: TracingOutput::Stdout,
            thread_ids: true,
            filter: None,
        }
    }

    /// Creates a configuration for production (warn level, stderr)
    #[must_use]
    pub const fn production() -> Self {
        Self {
            level: TracingLevel::Warn,
            output: TracingOutput::Stderr,
            thread_ids: false,
            filter: None,
        }
    }

    /// Returns the filter directive this configuration installs
    #[must_use]
    pub fn filter_directive(&self) -> String {
        self.filter.clone().unwrap_or_else(|| {
            FILTER_TARGETS
                .iter()
                .map(|target| format!("{target}={}", self.level))
                .collect::<Vec<_>>()
                .join(",")
        })
    }
}

/// Initializes the tracing subscriber with the given configuration
///
/// Must run once, before the first layout operation. Later calls fail with
/// `TracingError::AlreadyInitialized` and leave the installed subscriber
/// as it is.
///
/// # Errors
///
/// Returns an error if tracing is already initialized, the filter directive
/// does not parse, the log file cannot be created, or another global
/// subscriber was installed behind our back.
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if is_tracing_initialized() {
        return Err(TracingError::AlreadyInitialized);
    }

    let directive = config.filter_directive();
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| TracingError::InitializationFailed(format!("{directive}: {e}")))?;
    let events = tracing_subscriber::fmt::layer()
        .with_thread_ids(config.thread_ids)
        .with_ansi(config.output.is_terminal())
        .with_writer(config.output.open_writer()?);

    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }
    let _ = TRACING_CONFIG.set(config.clone());
    tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    tracing::debug!(directive = %directive, "Tracing initialized");
    Ok(())
}

/// Checks if tracing has been initialized
#[must_use]
pub fn is_tracing_initialized() -> bool {
    TRACING_INITIALIZED.load(Ordering::SeqCst)
}

/// Gets the current tracing configuration (if initialized)
#[must_use]
pub fn get_tracing_config() -> Option<&'static TracingConfig> {
    TRACING_CONFIG.get()
}

/// Macro for creating operation spans with standard fields
///
/// # Examples
///
/// ```ignore
/// use workbench_core::trace_operation;
///
/// let _span = trace_operation!("config.load", path = %path.display());
/// ```
#[macro_export]
macro_rules! trace_operation {
    ($name:expr) => {
        ::tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        ::tracing::info_span!($name, $($field)*)
    };
}

/// Macro for creating debug-level operation spans
///
/// Similar to `trace_operation!` but at debug level, used for every layout
/// mutation.
#[macro_export]
macro_rules! trace_operation_debug {
    ($name:expr) => {
        ::tracing::debug_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        ::tracing::debug_span!($name, $($field)*)
    };
}

/// Standard span names for workbench operations
pub mod span_names {
    /// Part docking span
    pub const PARTS_ADD_PART: &str = "parts.add_part";
    /// Part removal span
    pub const PARTS_REMOVE_PART: &str = "parts.remove_part";
    /// View insertion span
    pub const PARTS_ADD_VIEW: &str = "parts.add_view";
    /// View move span
    pub const PARTS_MOVE_VIEW: &str = "parts.move_view";
    /// View removal span
    pub const PARTS_REMOVE_VIEW: &str = "parts.remove_view";
    /// View activation span
    pub const PARTS_ACTIVATE_VIEW: &str = "parts.activate_view";
    /// Part activation span
    pub const PARTS_ACTIVATE_PART: &str = "parts.activate_part";
    /// Adjacent view activation span
    pub const PARTS_ACTIVATE_ADJACENT_VIEW: &str = "parts.activate_adjacent_view";
    /// Split ratio update span
    pub const PARTS_SET_SPLIT_RATIO: &str = "parts.set_split_ratio";
    /// Layout reset span
    pub const PARTS_CLEAR: &str = "parts.clear";
    /// Configuration load span
    pub const CONFIG_LOAD: &str = "config.load";
    /// Configuration save span
    pub const CONFIG_SAVE: &str = "config.save";
    /// One CLI command invocation
    pub const CLI_COMMAND: &str = "cli.command";
}
