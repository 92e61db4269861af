//! View commands: add, move, remove, activate.

use workbench_core::config::WorkbenchSettings;
use workbench_core::parts::RemoveViewOptions;

use crate::cli::LayoutArg;
use crate::error::CliError;
use crate::util::{new_history, open_layout, print_layout};

/// Add view command handler
pub fn cmd_add_view(
    settings: &WorkbenchSettings,
    layout: &LayoutArg,
    part_id: &str,
    view_id: &str,
    index: Option<usize>,
) -> Result<(), CliError> {
    let layout = open_layout(layout, new_history(settings))?;
    print_layout(&layout.add_view(part_id, view_id, index)?, settings)
}

/// Move view command handler
pub fn cmd_move_view(
    settings: &WorkbenchSettings,
    layout: &LayoutArg,
    view_id: &str,
    target_part_id: &str,
    index: Option<usize>,
) -> Result<(), CliError> {
    let layout = open_layout(layout, new_history(settings))?;
    print_layout(&layout.move_view(view_id, target_part_id, index)?, settings)
}

/// Remove view command handler
///
/// `history` lists views oldest activation first; it decides which view
/// becomes active when the removed view was active.
pub fn cmd_remove_view(
    settings: &WorkbenchSettings,
    layout: &LayoutArg,
    view_id: &str,
    keep_part: bool,
    history: &[String],
) -> Result<(), CliError> {
    let activations = new_history(settings);
    activations.record_all(history.iter().map(String::as_str));
    let layout = open_layout(layout, activations)?;

    let options = RemoveViewOptions {
        prevent_part_removal: keep_part,
    };
    print_layout(&layout.remove_view(view_id, options)?, settings)
}

/// Activate view command handler
pub fn cmd_activate_view(
    settings: &WorkbenchSettings,
    layout: &LayoutArg,
    view_id: &str,
) -> Result<(), CliError> {
    let layout = open_layout(layout, new_history(settings))?;
    print_layout(&layout.activate_view(view_id)?, settings)
}

/// Activate adjacent view command handler
pub fn cmd_activate_adjacent_view(
    settings: &WorkbenchSettings,
    layout: &LayoutArg,
    view_id: &str,
) -> Result<(), CliError> {
    let layout = open_layout(layout, new_history(settings))?;
    print_layout(&layout.activate_adjacent_view(view_id)?, settings)
}
