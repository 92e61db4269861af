//! Diff command.

use workbench_core::config::WorkbenchSettings;
use workbench_core::parts::LayoutDiff;

use crate::cli::LayoutArg;
use crate::error::CliError;
use crate::format::render_diff;
use crate::util::{new_history, open_layout};

/// Diff command handler
pub fn cmd_diff(settings: &WorkbenchSettings, old: &str, new: &str) -> Result<(), CliError> {
    let history = new_history(settings);
    let old = open_layout(
        &LayoutArg {
            layout: Some(old.to_string()),
        },
        history.clone(),
    )?;
    let new = open_layout(
        &LayoutArg {
            layout: Some(new.to_string()),
        },
        history,
    )?;

    println!("{}", render_diff(&LayoutDiff::between(&old, &new)));
    Ok(())
}
