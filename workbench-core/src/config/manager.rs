//! Settings persistence

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::tracing::span_names;

use super::settings::WorkbenchSettings;

/// Directory name below the platform configuration directory
const APP_DIR: &str = "workbench";

/// File name of the settings file
pub const SETTINGS_FILE: &str = "settings.toml";

/// Loads and saves [`WorkbenchSettings`] as TOML
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the per-user configuration directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has no such directory.
    pub fn new() -> ConfigResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(APP_DIR);
        Ok(Self::with_config_dir(config_dir))
    }

    /// Creates a manager for an explicit directory
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the configuration directory
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the path of the settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings, falling back to defaults when no file exists
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_settings(&self) -> ConfigResult<WorkbenchSettings> {
        let path = self.settings_path();
        let _span = crate::trace_operation_debug!(span_names::CONFIG_LOAD, path = %path.display())
            .entered();

        if !path.exists() {
            tracing::debug!("No settings file, using defaults");
            return Ok(WorkbenchSettings::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let settings: WorkbenchSettings =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::validate_settings(&settings)?;
        Ok(settings)
    }

    /// Saves settings, creating the configuration directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or cannot be written.
    pub fn save_settings(&self, settings: &WorkbenchSettings) -> ConfigResult<()> {
        let path = self.settings_path();
        let _span = crate::trace_operation_debug!(span_names::CONFIG_SAVE, path = %path.display())
            .entered();

        Self::validate_settings(settings)?;
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })?;
        let content =
            toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(&path, content).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Settings saved");
        Ok(())
    }

    /// Validates settings values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid key.
    pub fn validate_settings(settings: &WorkbenchSettings) -> ConfigResult<()> {
        let root_part_id = &settings.layout.root_part_id;
        if root_part_id.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "layout.root_part_id".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if root_part_id.trim() != root_part_id {
            return Err(ConfigError::Validation {
                field: "layout.root_part_id".to_string(),
                reason: "must not start or end with whitespace".to_string(),
            });
        }
        if let Some(filter) = &settings.logging.filter
            && filter.trim().is_empty()
        {
            return Err(ConfigError::Validation {
                field: "logging.filter".to_string(),
                reason: "must not be empty when set".to_string(),
            });
        }
        Ok(())
    }
}
