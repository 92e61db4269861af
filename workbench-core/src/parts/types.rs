//! Core type definitions for the parts layout
//!
//! This module contains the identifier types and small enums shared by
//! the tree, the layout engine and the serializer.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tree node.
///
/// Tree nodes are created by the engine whenever a part is docked next to
/// another element, so their ids are generated rather than caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Creates a new random node ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to an element of the layout tree.
///
/// Parts and tree nodes live in separate id spaces, so a link to a child
/// or to the root has to say which kind of element it points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// A leaf part, identified by its caller-supplied id.
    Part(String),
    /// An internal tree node.
    Node(NodeId),
}

impl ElementId {
    /// Returns the part id if this refers to a part.
    #[must_use]
    pub fn as_part(&self) -> Option<&str> {
        match self {
            Self::Part(id) => Some(id),
            Self::Node(_) => None,
        }
    }

    /// Returns the node id if this refers to a tree node.
    #[must_use]
    pub const fn as_node(&self) -> Option<NodeId> {
        match self {
            Self::Part(_) => None,
            Self::Node(id) => Some(*id),
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Part(id) => write!(f, "Part({id})"),
            Self::Node(id) => write!(f, "Node({id})"),
        }
    }
}

/// Arrangement of the two children of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Children side by side, `child1` on the left.
    Row,
    /// Children stacked, `child1` on top.
    Column,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// Side of the reference element on which a new part is docked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Dock to the left of the reference element.
    Left,
    /// Dock to the right of the reference element.
    Right,
    /// Dock above the reference element.
    Top,
    /// Dock below the reference element.
    Bottom,
}

impl Align {
    /// Returns the split direction produced by docking on this side.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Left | Self::Right => Direction::Row,
            Self::Top | Self::Bottom => Direction::Column,
        }
    }

    /// Returns true if the new part becomes the first child of the split.
    #[must_use]
    pub const fn places_first(self) -> bool {
        matches!(self, Self::Left | Self::Top)
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

impl std::str::FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(format!("unknown alignment: {other}")),
        }
    }
}

/// Slot of a child within its parent tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSlot {
    /// Left or top child.
    First,
    /// Right or bottom child.
    Second,
}
