//! Workbench Core Library
//!
//! This crate provides the tiling layout engine of a workbench shell: parts
//! docked into a binary split tree, views stacked as tabs inside parts, and
//! a portable serialized form for persisting the arrangement.
//!
//! # Crate Structure
//!
//! - [`parts`] - Layout tree, operations, serialization and diffing
//! - [`config`] - Settings and persistence
//! - [`tracing`] - Structured logging setup
//! - [`error`] - Configuration errors

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod parts;
pub mod tracing;

pub use config::{ConfigManager, LayoutSettings, LoggingSettings, WorkbenchSettings};
pub use error::{ConfigError, ConfigResult};
pub use parts::{
    ActivationHistory, Align, Direction, ElementId, LayoutDiff, LayoutTree, NodeId, Part,
    PartsLayout, PartsLayoutAccessor, PartsLayoutError, PartsLayoutResult, ReferencePart,
    RemoveViewOptions, SerializeOptions, TreeNode,
};
pub use crate::tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
};
