//! Set split ratio command.

use uuid::Uuid;
use workbench_core::config::WorkbenchSettings;
use workbench_core::parts::NodeId;

use crate::cli::LayoutArg;
use crate::error::CliError;
use crate::util::{new_history, open_layout, print_layout};

/// Set ratio command handler
pub fn cmd_set_ratio(
    settings: &WorkbenchSettings,
    layout: &LayoutArg,
    node_id: &str,
    ratio: f64,
) -> Result<(), CliError> {
    let node_id = Uuid::parse_str(node_id)
        .map(NodeId)
        .map_err(|e| CliError::InvalidArgument(format!("'{node_id}' is not a node id: {e}")))?;
    let layout = open_layout(layout, new_history(settings))?;
    print_layout(&layout.set_split_ratio(node_id, ratio)?, settings)
}
