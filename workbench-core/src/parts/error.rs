//! Error types for parts layout operations
//!
//! Every failure of the layout engine is a precondition violation by the
//! caller: an unknown id, a duplicate id, an out-of-range ratio or a
//! serialized layout that cannot be trusted.

use super::tree::MAX_TREE_DEPTH;
use super::types::NodeId;

/// Errors that can occur during parts layout operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PartsLayoutError {
    /// The specified part was not found.
    #[error("part not found: {0}")]
    PartNotFound(String),

    /// No part contains the specified view.
    #[error("no part contains view: {0}")]
    ViewNotFound(String),

    /// The specified tree node was not found.
    #[error("tree node not found: {0}")]
    NodeNotFound(NodeId),

    /// The reference element of a docking operation was not found.
    #[error("no part or tree node with id: {0}")]
    ElementNotFound(String),

    /// A part with this id is already part of the layout.
    #[error("part id must be unique, the layout already contains part '{0}'")]
    DuplicatePart(String),

    /// A view with this id is already part of the layout.
    #[error("view '{view_id}' is already contained in part '{part_id}'")]
    DuplicateView {
        /// The view that was added twice.
        view_id: String,
        /// The part already holding the view.
        part_id: String,
    },

    /// Split ratio outside of the closed interval [0, 1].
    #[error("invalid split ratio: {0} (must be between 0.0 and 1.0)")]
    InvalidRatio(f64),

    /// Docking would nest parts deeper than the layout supports.
    #[error("layout tree depth {0} exceeds the maximum of {max}", max = MAX_TREE_DEPTH)]
    TreeTooDeep(usize),

    /// The active part does not exist in the tree.
    #[error("active part '{0}' is not contained in the layout")]
    InvalidActivePart(String),

    /// A part's active view is not one of its views.
    #[error("active view '{view_id}' of part '{part_id}' is not one of its views")]
    InvalidActiveView {
        /// The part with the dangling active view.
        part_id: String,
        /// The active view id.
        view_id: String,
    },

    /// The layout could not be written as a layout document.
    #[error("failed to encode layout: {0}")]
    Encode(String),

    /// The serialized layout is not valid base64.
    #[error("failed to decode serialized layout: {0}")]
    Decode(String),

    /// The decoded layout is not a valid layout document.
    #[error("failed to parse serialized layout: {0}")]
    Parse(String),

    /// The layout document describes an inconsistent tree.
    #[error("corrupt layout: {0}")]
    Corrupt(String),
}

/// Result type for parts layout operations.
pub type PartsLayoutResult<T> = Result<T, PartsLayoutError>;
