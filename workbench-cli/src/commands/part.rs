//! Part commands: add, remove, activate.

use workbench_core::config::WorkbenchSettings;
use workbench_core::parts::{Align, ReferencePart};

use crate::cli::LayoutArg;
use crate::error::CliError;
use crate::util::{new_history, open_layout, print_layout};

/// Parameters for the add-part command
pub struct AddPartParams<'a> {
    pub part_id: &'a str,
    pub align: Align,
    pub relative_to: Option<&'a str>,
    pub ratio: Option<f64>,
}

/// Add part command handler
pub fn cmd_add_part(
    settings: &WorkbenchSettings,
    layout: &LayoutArg,
    params: AddPartParams<'_>,
) -> Result<(), CliError> {
    let layout = open_layout(layout, new_history(settings))?;

    let mut reference = ReferencePart::new(params.align);
    if let Some(relative_to) = params.relative_to {
        reference = reference.relative_to(relative_to);
    }
    if let Some(ratio) = params.ratio {
        reference = reference.with_ratio(ratio);
    }

    let layout = layout.add_part(params.part_id, &reference)?;
    print_layout(&layout, settings)
}

/// Remove part command handler
pub fn cmd_remove_part(
    settings: &WorkbenchSettings,
    layout: &LayoutArg,
    part_id: &str,
) -> Result<(), CliError> {
    let layout = open_layout(layout, new_history(settings))?;
    if layout.parts().len() == 1 && layout.find_part(part_id).is_some() {
        tracing::warn!(part_id, "The last part of a layout cannot be removed");
    }
    print_layout(&layout.remove_part(part_id)?, settings)
}

/// Activate part command handler
pub fn cmd_activate_part(
    settings: &WorkbenchSettings,
    layout: &LayoutArg,
    part_id: &str,
) -> Result<(), CliError> {
    let layout = open_layout(layout, new_history(settings))?;
    print_layout(&layout.activate_part(part_id)?, settings)
}
