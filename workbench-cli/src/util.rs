//! Shared utility functions used across command modules.

use std::path::Path;
use std::sync::Arc;

use workbench_core::config::{ConfigManager, WorkbenchSettings};
use workbench_core::parts::{ActivationHistory, PartsLayout};

use crate::cli::LayoutArg;
use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads settings from the optional custom config directory.
pub fn load_settings(config_path: Option<&Path>) -> Result<WorkbenchSettings, CliError> {
    let settings = create_config_manager(config_path)?
        .load_settings()
        .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))?;
    Ok(settings)
}

/// Restores the layout passed on the command line, or an empty one.
///
/// Activations recorded in `history` are the only ones the layout sees.
pub fn open_layout(
    layout: &LayoutArg,
    history: Arc<ActivationHistory>,
) -> Result<PartsLayout, CliError> {
    let serialized = layout
        .layout
        .as_deref()
        .map(str::trim)
        .filter(|serialized| !serialized.is_empty());
    Ok(PartsLayout::from_serialized(history, serialized)?)
}

/// Creates the activation history the settings describe.
pub fn new_history(settings: &WorkbenchSettings) -> Arc<ActivationHistory> {
    Arc::new(settings.layout.activation_history())
}

/// Prints the serialized layout, or nothing for an empty layout when
/// `null_if_empty` is set.
pub fn print_layout(layout: &PartsLayout, settings: &WorkbenchSettings) -> Result<(), CliError> {
    match layout.serialize(&settings.layout.serialize_options())? {
        Some(serialized) => println!("{serialized}"),
        None => tracing::info!("Layout is empty, nothing to print"),
    }
    Ok(())
}
