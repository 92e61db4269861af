//! Show layout command.

use workbench_core::config::WorkbenchSettings;

use crate::cli::{LayoutArg, OutputFormat};
use crate::error::CliError;
use crate::format::render_tree;
use crate::util::{new_history, open_layout};

/// Show layout command handler
pub fn cmd_show(
    settings: &WorkbenchSettings,
    layout: &LayoutArg,
    format: OutputFormat,
) -> Result<(), CliError> {
    let layout = open_layout(layout, new_history(settings))?;

    match format {
        OutputFormat::Text => {
            println!("{}", render_tree(&layout));
            println!();
            println!("Parts: {}", layout.parts().len());
            println!("Views: {}", layout.view_ids().len());
            println!("Depth: {}", layout.tree().depth());
        }
        OutputFormat::Json => println!("{}", layout.to_json_pretty()?),
    }
    Ok(())
}
