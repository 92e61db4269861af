//! Command handler modules for the CLI.

mod diff;
mod part;
mod ratio;
mod show;
mod view;

use workbench_core::config::WorkbenchSettings;
use workbench_core::tracing::span_names;

use crate::cli::{Commands, LayoutArg};
use crate::error::CliError;
use crate::util::{new_history, open_layout, print_layout};

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(settings: &WorkbenchSettings, command: Commands) -> Result<(), CliError> {
    let _span =
        workbench_core::trace_operation!(span_names::CLI_COMMAND, command = command.name())
            .entered();
    match command {
        Commands::New => cmd_new(settings),
        Commands::Show { layout, format } => show::cmd_show(settings, &layout, format),
        Commands::AddPart {
            layout,
            part_id,
            align,
            relative_to,
            ratio,
        } => part::cmd_add_part(
            settings,
            &layout,
            part::AddPartParams {
                part_id: &part_id,
                align: align.into(),
                relative_to: relative_to.as_deref(),
                ratio,
            },
        ),
        Commands::RemovePart { layout, part_id } => {
            part::cmd_remove_part(settings, &layout, &part_id)
        }
        Commands::ActivatePart { layout, part_id } => {
            part::cmd_activate_part(settings, &layout, &part_id)
        }
        Commands::AddView {
            layout,
            part_id,
            view_id,
            index,
        } => view::cmd_add_view(settings, &layout, &part_id, &view_id, index),
        Commands::MoveView {
            layout,
            view_id,
            target_part_id,
            index,
        } => view::cmd_move_view(settings, &layout, &view_id, &target_part_id, index),
        Commands::RemoveView {
            layout,
            view_id,
            keep_part,
            history,
        } => view::cmd_remove_view(settings, &layout, &view_id, keep_part, &history),
        Commands::ActivateView { layout, view_id } => {
            view::cmd_activate_view(settings, &layout, &view_id)
        }
        Commands::ActivateAdjacentView { layout, view_id } => {
            view::cmd_activate_adjacent_view(settings, &layout, &view_id)
        }
        Commands::SetRatio {
            layout,
            node_id,
            ratio,
        } => ratio::cmd_set_ratio(settings, &layout, &node_id, ratio),
        Commands::Clear { layout } => cmd_clear(settings, &layout),
        Commands::Diff { old, new } => diff::cmd_diff(settings, &old, &new),
    }
}

/// New layout command handler
fn cmd_new(settings: &WorkbenchSettings) -> Result<(), CliError> {
    let layout = open_layout(&LayoutArg::default(), new_history(settings))?;
    print_layout(&layout, settings)
}

/// Clear layout command handler
fn cmd_clear(settings: &WorkbenchSettings, layout: &LayoutArg) -> Result<(), CliError> {
    let layout = open_layout(layout, new_history(settings))?;
    print_layout(&layout.clear(), settings)
}
