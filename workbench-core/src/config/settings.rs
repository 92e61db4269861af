//! Workbench settings
//!
//! Stored as TOML:
//!
//! ```toml
//! [layout]
//! root_part_id = "main"
//! null_if_empty = true
//!
//! [logging]
//! level = "warn"
//! # filter = "workbench_core=trace"
//! # file = "/tmp/workbench.log"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::parts::{ActivationHistory, DEFAULT_ROOT_PART_ID, SerializeOptions};
use crate::tracing::{TracingConfig, TracingLevel, TracingOutput};

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchSettings {
    /// Layout engine settings
    pub layout: LayoutSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Layout engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Id given to the root part of a new or cleared layout
    pub root_part_id: String,
    /// Serialize an empty layout as nothing
    pub null_if_empty: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            root_part_id: DEFAULT_ROOT_PART_ID.to_string(),
            null_if_empty: true,
        }
    }
}

impl LayoutSettings {
    /// Creates an activation history that names root parts per these settings
    #[must_use]
    pub fn activation_history(&self) -> ActivationHistory {
        ActivationHistory::with_root_part_id(self.root_part_id.clone())
    }

    /// Returns serialization options per these settings
    #[must_use]
    pub fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions::new().with_null_if_empty(self.null_if_empty)
    }
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level for workbench crates
    pub level: TracingLevel,
    /// Custom filter directive, overrides `level`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Log file; stderr when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LoggingSettings {
    /// Builds the tracing configuration these settings describe
    #[must_use]
    pub fn to_tracing_config(&self) -> TracingConfig {
        let output = self
            .file
            .clone()
            .map_or(TracingOutput::Stderr, |path| TracingOutput::File { path });
        let config = TracingConfig::new()
            .with_level(self.level)
            .with_output(output);
        match &self.filter {
            Some(filter) => config.with_filter(filter.clone()),
            None => config,
        }
    }
}
