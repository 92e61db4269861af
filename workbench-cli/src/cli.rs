//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use workbench_core::parts::Align;

/// Workbench command-line interface for editing parts layouts
#[derive(Parser)]
#[command(name = "workbench-cli")]
#[command(author, version, about = "Workbench parts layout command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Serialized layout to operate on
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArg {
    /// Serialized layout; an empty layout is used when omitted
    #[arg(short, long, env = "WORKBENCH_LAYOUT")]
    pub layout: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the serialized form of an empty layout
    #[command(about = "Create an empty layout")]
    New,

    /// Render a layout
    #[command(about = "Render a layout as a tree or as JSON")]
    Show {
        #[command(flatten)]
        layout: LayoutArg,

        /// Output format
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,
    },

    /// Dock a new part
    #[command(about = "Dock a new empty part next to a part, a tree node or the whole layout")]
    AddPart {
        #[command(flatten)]
        layout: LayoutArg,

        /// Id of the new part
        part_id: String,

        /// Side to dock on
        #[arg(short, long, value_enum)]
        align: AlignArg,

        /// Part or tree node id to dock next to (the whole layout if omitted)
        #[arg(short = 'r', long)]
        relative_to: Option<String>,

        /// Share of the new part, between 0 and 1
        #[arg(long)]
        ratio: Option<f64>,
    },

    /// Remove a part
    #[command(about = "Remove a part (the last part is kept)")]
    RemovePart {
        #[command(flatten)]
        layout: LayoutArg,

        /// Part to remove
        part_id: String,
    },

    /// Add a view to a part
    #[command(about = "Add a view to a part and activate it")]
    AddView {
        #[command(flatten)]
        layout: LayoutArg,

        /// Part receiving the view
        part_id: String,

        /// Id of the new view
        view_id: String,

        /// Tab position (appended if omitted)
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Move a view to a part
    #[command(about = "Move a view to a position in a part")]
    MoveView {
        #[command(flatten)]
        layout: LayoutArg,

        /// View to move
        view_id: String,

        /// Part receiving the view
        target_part_id: String,

        /// Tab position (appended if omitted)
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Remove a view
    #[command(about = "Remove a view, removing its part if it becomes empty")]
    RemoveView {
        #[command(flatten)]
        layout: LayoutArg,

        /// View to remove
        view_id: String,

        /// Keep the part even if it becomes empty
        #[arg(long)]
        keep_part: bool,

        /// Views in activation order, oldest first
        #[arg(long, value_delimiter = ',')]
        history: Vec<String>,
    },

    /// Activate a view
    #[command(about = "Activate a view and its part")]
    ActivateView {
        #[command(flatten)]
        layout: LayoutArg,

        /// View to activate
        view_id: String,
    },

    /// Activate a part
    #[command(about = "Activate a part")]
    ActivatePart {
        #[command(flatten)]
        layout: LayoutArg,

        /// Part to activate
        part_id: String,
    },

    /// Activate the tab next to a view
    #[command(about = "Activate the view following (or else preceding) a view")]
    ActivateAdjacentView {
        #[command(flatten)]
        layout: LayoutArg,

        /// Reference view
        view_id: String,
    },

    /// Change a split ratio
    #[command(about = "Set the split ratio of a tree node")]
    SetRatio {
        #[command(flatten)]
        layout: LayoutArg,

        /// Tree node id
        node_id: String,

        /// Share of the first child, between 0 and 1
        ratio: f64,
    },

    /// Reset a layout
    #[command(about = "Replace a layout with a single empty part")]
    Clear {
        #[command(flatten)]
        layout: LayoutArg,
    },

    /// Compare two layouts
    #[command(about = "List parts and views that differ between two layouts")]
    Diff {
        /// Older serialized layout
        old: String,

        /// Newer serialized layout
        new: String,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Show { .. } => "show",
            Self::AddPart { .. } => "add-part",
            Self::RemovePart { .. } => "remove-part",
            Self::AddView { .. } => "add-view",
            Self::MoveView { .. } => "move-view",
            Self::RemoveView { .. } => "remove-view",
            Self::ActivateView { .. } => "activate-view",
            Self::ActivatePart { .. } => "activate-part",
            Self::ActivateAdjacentView { .. } => "activate-adjacent-view",
            Self::SetRatio { .. } => "set-ratio",
            Self::Clear { .. } => "clear",
            Self::Diff { .. } => "diff",
        }
    }
}

/// Output format for `show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented tree
    #[default]
    Text,
    /// Layout document as JSON
    Json,
}

/// Docking side
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignArg {
    /// Left of the reference
    Left,
    /// Right of the reference
    Right,
    /// Above the reference
    Top,
    /// Below the reference
    Bottom,
}

impl From<AlignArg> for Align {
    fn from(value: AlignArg) -> Self {
        match value {
            AlignArg::Left => Self::Left,
            AlignArg::Right => Self::Right,
            AlignArg::Top => Self::Top,
            AlignArg::Bottom => Self::Bottom,
        }
    }
}
