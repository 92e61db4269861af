//! Tiling parts layout
//!
//! This module provides the layout engine of the workbench: a binary tree
//! that tiles the window into docked parts, each part stacking an ordered
//! list of views as tabs.
//!
//! # Tree Structure
//!
//! ```text
//!                 TreeNode (row, 0.25)
//!                /                    \
//!      TreeNode (column, 0.5)       Part "main"
//!        /            \
//!   Part "left"   Part "bottom"
//!   [view.1]      [view.2, view.3]
//! ```
//!
//! Every inner node splits its area between two children along a
//! direction; `ratio` is the share of the first child.
//!
//! # Architecture
//!
//! - **Immutable layouts**: every operation returns a new [`PartsLayout`]
//! - **Arena storage**: parts and nodes live in maps keyed by id, parent links are ids
//! - **Host accessor**: activation history and root part naming come from the host
//! - **Portable form**: layouts serialize to a URL-safe base64 JSON document
//!
//! # Module Structure
//!
//! - `types` - Identifiers and enums (`NodeId`, `ElementId`, `Align`, `Direction`)
//! - `tree` - Tree storage and traversal (`LayoutTree`, `Part`, `TreeNode`)
//! - `layout` - Layout operations (`PartsLayout`)
//! - `accessor` - Host collaborator (`PartsLayoutAccessor`, `ActivationHistory`)
//! - `codec` - Serialized form
//! - `diff` - Structural comparison (`LayoutDiff`)
//! - `error` - Error types (`PartsLayoutError`)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use workbench_core::parts::{
//!     ActivationHistory, Align, PartsLayout, ReferencePart, SerializeOptions,
//! };
//!
//! let history = Arc::new(ActivationHistory::new());
//! let layout = PartsLayout::new(history.clone());
//! assert!(layout.is_empty());
//!
//! let layout = layout
//!     .add_part("left", &ReferencePart::new(Align::Left).with_ratio(0.25))
//!     .unwrap()
//!     .add_view("left", "view.1", None)
//!     .unwrap();
//!
//! let serialized = layout.serialize(&SerializeOptions::new()).unwrap().unwrap();
//! let restored = PartsLayout::deserialize(history, &serialized).unwrap();
//! assert_eq!(restored, layout);
//! ```

mod accessor;
mod codec;
mod diff;
mod error;
mod layout;
mod tree;
mod types;

pub use accessor::{ActivationHistory, DEFAULT_ROOT_PART_ID, PartsLayoutAccessor};
pub use codec::{is_node_shaped, is_part_shaped};
pub use diff::{LayoutDiff, MovedView};
pub use error::{PartsLayoutError, PartsLayoutResult};
pub use layout::{PartsLayout, ReferencePart, RemoveViewOptions, SerializeOptions};
pub use tree::{
    DEFAULT_SPLIT_RATIO, FindOptions, LayoutTree, MAX_SPLIT_RATIO, MAX_TREE_DEPTH,
    MIN_SPLIT_RATIO, Part, TreeElement, TreeNode, validate_depth, validate_ratio,
};
pub use types::{Align, ChildSlot, Direction, ElementId, NodeId};
