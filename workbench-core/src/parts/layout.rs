//! Parts layout engine
//!
//! [`PartsLayout`] is an immutable value: every operation returns a new
//! layout and leaves the receiver untouched. Internally each operation
//! takes a deep working copy of the tree and edits that copy in place.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use workbench_core::parts::{ActivationHistory, Align, PartsLayout, ReferencePart};
//!
//! let layout = PartsLayout::new(Arc::new(ActivationHistory::new()));
//! let layout = layout
//!     .add_part("left", &ReferencePart::new(Align::Left).relative_to("main").with_ratio(0.25))
//!     .unwrap()
//!     .add_view("main", "view.1", None)
//!     .unwrap();
//!
//! assert_eq!(layout.parts().len(), 2);
//! assert_eq!(layout.active_part_id(), "main");
//! assert_eq!(layout.view_ids(), ["view.1"]);
//! ```

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use super::accessor::PartsLayoutAccessor;
use super::codec;
use super::error::{PartsLayoutError, PartsLayoutResult};
use super::tree::{
    DEFAULT_SPLIT_RATIO, LayoutTree, Part, TreeNode, validate_depth, validate_ratio,
};
use super::types::{Align, ElementId, NodeId};
use crate::tracing::span_names;

/// Where to dock a new part.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePart {
    /// Part (or tree node) to dock next to. `None` docks next to the whole layout.
    pub relative_to: Option<String>,
    /// Side of the reference element.
    pub align: Align,
    /// Share of the new part, defaults to 0.5.
    pub ratio: Option<f64>,
}

impl ReferencePart {
    /// Docks on the given side of the whole layout.
    #[must_use]
    pub const fn new(align: Align) -> Self {
        Self {
            relative_to: None,
            align,
            ratio: None,
        }
    }

    /// Docks next to the given part or tree node instead of the whole layout.
    #[must_use]
    pub fn relative_to(mut self, element_id: impl Into<String>) -> Self {
        self.relative_to = Some(element_id.into());
        self
    }

    /// Sets the share of the new part.
    #[must_use]
    pub const fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = Some(ratio);
        self
    }
}

/// Options for [`PartsLayout::remove_view`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveViewOptions {
    /// Keep the part even if its last view is removed.
    pub prevent_part_removal: bool,
}

/// Options for [`PartsLayout::serialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Return `None` for a layout that is a single empty part (default `true`).
    pub null_if_empty: bool,
    /// Stamp to embed instead of a fresh random UUID.
    pub uuid: Option<String>,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            null_if_empty: true,
            uuid: None,
        }
    }
}

impl SerializeOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether an empty layout serializes to `None`.
    #[must_use]
    pub const fn with_null_if_empty(mut self, null_if_empty: bool) -> Self {
        self.null_if_empty = null_if_empty;
        self
    }

    /// Sets a fixed stamp.
    #[must_use]
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }
}

/// Arrangement of docked parts and the views stacked inside them.
///
/// # Invariants
///
/// - The tree contains at least one part
/// - The active part is contained in the tree
/// - Part ids are unique, and every view belongs to exactly one part
/// - Every split ratio lies in [0, 1]
/// - Parent links mirror the tree shape
#[derive(Clone)]
pub struct PartsLayout {
    tree: LayoutTree,
    active_part_id: String,
    accessor: Arc<dyn PartsLayoutAccessor>,
}

impl PartsLayout {
    /// Creates a layout with a single empty root part.
    ///
    /// The root part's id is supplied by the accessor.
    #[must_use]
    pub fn new(accessor: Arc<dyn PartsLayoutAccessor>) -> Self {
        let root_part_id = accessor.root_part_identity();
        Self {
            tree: LayoutTree::with_root_part(root_part_id.clone()),
            active_part_id: root_part_id,
            accessor,
        }
    }

    /// Restores a layout from its serialized form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be decoded, or if the decoded
    /// tree violates a layout invariant.
    pub fn deserialize(
        accessor: Arc<dyn PartsLayoutAccessor>,
        serialized: &str,
    ) -> PartsLayoutResult<Self> {
        let (tree, active_part_id) = codec::decode(serialized)?;
        if tree.find_part(&active_part_id).is_none() {
            return Err(PartsLayoutError::InvalidActivePart(active_part_id));
        }
        tracing::debug!(
            parts = tree.part_count(),
            active_part_id = %active_part_id,
            "Layout deserialized"
        );
        Ok(Self {
            tree,
            active_part_id,
            accessor,
        })
    }

    /// Restores a layout, or creates an empty one when nothing was serialized.
    ///
    /// # Errors
    ///
    /// Same as [`PartsLayout::deserialize`].
    pub fn from_serialized(
        accessor: Arc<dyn PartsLayoutAccessor>,
        serialized: Option<&str>,
    ) -> PartsLayoutResult<Self> {
        match serialized {
            Some(serialized) => Self::deserialize(accessor, serialized),
            None => Ok(Self::new(accessor)),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the id of the root element.
    #[must_use]
    pub const fn root(&self) -> &ElementId {
        self.tree.root()
    }

    /// Returns the underlying tree.
    #[must_use]
    pub const fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    /// Returns the accessor this layout was created with.
    #[must_use]
    pub fn accessor(&self) -> &Arc<dyn PartsLayoutAccessor> {
        &self.accessor
    }

    /// Returns the id of the active part.
    #[must_use]
    pub fn active_part_id(&self) -> &str {
        &self.active_part_id
    }

    /// Returns the active part.
    ///
    /// Always `Some` for layouts produced by this type.
    #[must_use]
    pub fn active_part(&self) -> Option<&Part> {
        self.tree.find_part(&self.active_part_id)
    }

    /// Returns all parts in tree order.
    #[must_use]
    pub fn parts(&self) -> Vec<&Part> {
        self.tree.parts()
    }

    /// Returns all view ids, parts concatenated in tree order.
    #[must_use]
    pub fn view_ids(&self) -> Vec<&str> {
        self.tree.view_ids()
    }

    /// Finds a part by its id.
    #[must_use]
    pub fn find_part(&self, part_id: &str) -> Option<&Part> {
        self.tree.find_part(part_id)
    }

    /// Finds a part by its id, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `PartsLayoutError::PartNotFound` if no such part exists.
    pub fn require_part(&self, part_id: &str) -> PartsLayoutResult<&Part> {
        self.find_part(part_id)
            .ok_or_else(|| PartsLayoutError::PartNotFound(part_id.to_string()))
    }

    /// Finds the part holding a view.
    #[must_use]
    pub fn find_part_by_view_id(&self, view_id: &str) -> Option<&Part> {
        self.tree.find_part_by_view_id(view_id)
    }

    /// Finds the part holding a view, failing if no part holds it.
    ///
    /// # Errors
    ///
    /// Returns `PartsLayoutError::ViewNotFound` if no part holds the view.
    pub fn require_part_by_view_id(&self, view_id: &str) -> PartsLayoutResult<&Part> {
        self.find_part_by_view_id(view_id)
            .ok_or_else(|| PartsLayoutError::ViewNotFound(view_id.to_string()))
    }

    /// Finds a tree node by its id.
    #[must_use]
    pub fn find_tree_node(&self, node_id: NodeId) -> Option<&TreeNode> {
        self.tree.find_tree_node(node_id)
    }

    /// Finds a tree node by its id, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `PartsLayoutError::NodeNotFound` if no such node exists.
    pub fn require_tree_node(&self, node_id: NodeId) -> PartsLayoutResult<&TreeNode> {
        self.find_tree_node(node_id)
            .ok_or(PartsLayoutError::NodeNotFound(node_id))
    }

    /// Returns true if the layout is a single part without views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.tree.root() {
            ElementId::Part(part_id) => self.tree.find_part(part_id).is_some_and(Part::is_empty),
            ElementId::Node(_) => false,
        }
    }

    /// Serializes the layout into a URL-safe string.
    ///
    /// Every call embeds a fresh random stamp unless one is given, so two
    /// serializations of the same layout differ. With `null_if_empty` set
    /// (the default), a layout that is a single empty part yields `None`.
    ///
    /// # Errors
    ///
    /// Returns `PartsLayoutError::Encode` if the document cannot be written.
    pub fn serialize(&self, options: &SerializeOptions) -> PartsLayoutResult<Option<String>> {
        if options.null_if_empty && self.is_empty() {
            return Ok(None);
        }
        let uuid = options
            .uuid
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        codec::encode(&self.tree, &self.active_part_id, Some(uuid)).map(Some)
    }

    /// Returns the layout document as indented JSON, for display.
    ///
    /// # Errors
    ///
    /// Returns `PartsLayoutError::Encode` if the document cannot be written.
    pub fn to_json_pretty(&self) -> PartsLayoutResult<String> {
        codec::to_json_pretty(&self.tree, &self.active_part_id)
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Docks a new empty part and activates it.
    ///
    /// # Errors
    ///
    /// - `PartsLayoutError::DuplicatePart` if the id is taken
    /// - `PartsLayoutError::ElementNotFound` if the reference element is unknown
    /// - `PartsLayoutError::InvalidRatio` if the ratio is outside [0, 1]
    /// - `PartsLayoutError::TreeTooDeep` if the part would end up more than
    ///   `MAX_TREE_DEPTH` nodes below the root
    pub fn add_part(&self, part_id: &str, reference: &ReferencePart) -> PartsLayoutResult<Self> {
        let _span =
            crate::trace_operation_debug!(span_names::PARTS_ADD_PART, part_id = %part_id).entered();
        self.apply(|layout| layout.add_part_in_place(part_id, reference))
    }

    /// Removes a part.
    ///
    /// The last remaining part is never removed; the returned layout is
    /// then an identical copy.
    ///
    /// # Errors
    ///
    /// Returns `PartsLayoutError::PartNotFound` if the part does not exist.
    pub fn remove_part(&self, part_id: &str) -> PartsLayoutResult<Self> {
        let _span = crate::trace_operation_debug!(span_names::PARTS_REMOVE_PART, part_id = %part_id)
            .entered();
        self.apply(|layout| layout.remove_part_in_place(part_id))
    }

    /// Adds a view to a part and activates it.
    ///
    /// Without an index the view is appended. Indices past the end append.
    ///
    /// # Errors
    ///
    /// - `PartsLayoutError::PartNotFound` if the part does not exist
    /// - `PartsLayoutError::DuplicateView` if the view is already in the layout
    pub fn add_view(
        &self,
        part_id: &str,
        view_id: &str,
        insertion_index: Option<usize>,
    ) -> PartsLayoutResult<Self> {
        let _span = crate::trace_operation_debug!(
            span_names::PARTS_ADD_VIEW,
            part_id = %part_id,
            view_id = %view_id
        )
        .entered();
        self.apply(|layout| layout.add_view_in_place(part_id, view_id, insertion_index))
    }

    /// Moves a view to a position in a (possibly different) part.
    ///
    /// The index names the view currently at that position in the target
    /// part; the moved view is inserted before it. Without an index, or when
    /// the index is past the end, the view is appended.
    ///
    /// # Errors
    ///
    /// - `PartsLayoutError::ViewNotFound` if no part holds the view
    /// - `PartsLayoutError::PartNotFound` if the target part does not exist
    pub fn move_view(
        &self,
        view_id: &str,
        target_part_id: &str,
        insertion_index: Option<usize>,
    ) -> PartsLayoutResult<Self> {
        let _span = crate::trace_operation_debug!(
            span_names::PARTS_MOVE_VIEW,
            view_id = %view_id,
            target_part_id = %target_part_id
        )
        .entered();
        self.apply(|layout| layout.move_view_in_place(view_id, target_part_id, insertion_index))
    }

    /// Removes a view.
    ///
    /// If the view was active, the most recently activated remaining view of
    /// the part becomes active. A part left without views is removed unless
    /// `prevent_part_removal` is set.
    ///
    /// # Errors
    ///
    /// Returns `PartsLayoutError::ViewNotFound` if no part holds the view.
    pub fn remove_view(
        &self,
        view_id: &str,
        options: RemoveViewOptions,
    ) -> PartsLayoutResult<Self> {
        let _span = crate::trace_operation_debug!(span_names::PARTS_REMOVE_VIEW, view_id = %view_id)
            .entered();
        self.apply(|layout| layout.remove_view_in_place(view_id, options))
    }

    /// Activates a view and the part holding it.
    ///
    /// # Errors
    ///
    /// Returns `PartsLayoutError::ViewNotFound` if no part holds the view.
    pub fn activate_view(&self, view_id: &str) -> PartsLayoutResult<Self> {
        let _span =
            crate::trace_operation_debug!(span_names::PARTS_ACTIVATE_VIEW, view_id = %view_id)
                .entered();
        self.apply(|layout| layout.activate_view_in_place(view_id))
    }

    /// Activates a part.
    ///
    /// # Errors
    ///
    /// Returns `PartsLayoutError::PartNotFound` if the part does not exist.
    pub fn activate_part(&self, part_id: &str) -> PartsLayoutResult<Self> {
        let _span =
            crate::trace_operation_debug!(span_names::PARTS_ACTIVATE_PART, part_id = %part_id)
                .entered();
        self.apply(|layout| layout.activate_part_in_place(part_id))
    }

    /// Activates the view next to the given one, and the part holding it.
    ///
    /// Prefers the following tab, then the preceding one. If the view is the
    /// only one of its part, the part ends up without an active view.
    ///
    /// # Errors
    ///
    /// Returns `PartsLayoutError::ViewNotFound` if no part holds the view.
    pub fn activate_adjacent_view(&self, view_id: &str) -> PartsLayoutResult<Self> {
        let _span = crate::trace_operation_debug!(
            span_names::PARTS_ACTIVATE_ADJACENT_VIEW,
            view_id = %view_id
        )
        .entered();
        self.apply(|layout| layout.activate_adjacent_view_in_place(view_id))
    }

    /// Sets the split ratio of a tree node.
    ///
    /// # Errors
    ///
    /// - `PartsLayoutError::InvalidRatio` if the ratio is outside [0, 1]
    /// - `PartsLayoutError::NodeNotFound` if the node does not exist
    pub fn set_split_ratio(&self, node_id: NodeId, ratio: f64) -> PartsLayoutResult<Self> {
        let _span = crate::trace_operation_debug!(
            span_names::PARTS_SET_SPLIT_RATIO,
            node_id = %node_id,
            ratio
        )
        .entered();
        self.apply(|layout| layout.set_split_ratio_in_place(node_id, ratio))
    }

    /// Replaces the whole tree with a single empty part.
    ///
    /// The new root part's id is supplied by the accessor.
    #[must_use]
    pub fn clear(&self) -> Self {
        let _span = crate::trace_operation_debug!(span_names::PARTS_CLEAR).entered();
        let layout = Self::new(Arc::clone(&self.accessor));
        tracing::debug!(root_part_id = %layout.active_part_id, "Layout cleared");
        layout
    }

    // ========================================================================
    // In-place Edits (working copy only)
    // ========================================================================

    /// Runs an edit against a working copy, leaving `self` untouched.
    fn apply(
        &self,
        edit: impl FnOnce(&mut Self) -> PartsLayoutResult<()>,
    ) -> PartsLayoutResult<Self> {
        let mut layout = self.clone();
        edit(&mut layout)
            .inspect_err(|e| tracing::warn!(error = %e, "Layout operation rejected"))?;
        Ok(layout)
    }

    fn add_part_in_place(
        &mut self,
        part_id: &str,
        reference: &ReferencePart,
    ) -> PartsLayoutResult<()> {
        if self.tree.find_part(part_id).is_some() {
            return Err(PartsLayoutError::DuplicatePart(part_id.to_string()));
        }
        let ratio = validate_ratio(reference.ratio.unwrap_or(DEFAULT_SPLIT_RATIO))?;
        let reference_id = match &reference.relative_to {
            None => self.tree.root().clone(),
            Some(element_id) => self.resolve_element(element_id)?,
        };

        let node_id =
            self.tree
                .dock_part(Part::new(part_id), &reference_id, reference.align, ratio)?;
        validate_depth(self.tree.depth())?;
        tracing::debug!(
            part_id,
            reference = %reference_id,
            align = %reference.align,
            node_id = %node_id,
            "Part added"
        );

        self.activate_part_in_place(part_id)
    }

    fn remove_part_in_place(&mut self, part_id: &str) -> PartsLayoutResult<()> {
        let (index, count) = {
            let parts = self.tree.parts();
            let index = parts
                .iter()
                .position(|part| part.id == part_id)
                .ok_or_else(|| PartsLayoutError::PartNotFound(part_id.to_string()))?;
            (index, parts.len())
        };
        if count == 1 {
            tracing::debug!(part_id, "Keeping last part of the layout");
            return Ok(());
        }

        self.tree.detach_part(part_id)?;
        tracing::debug!(part_id, "Part removed");

        if self.active_part_id == part_id {
            let parts = self.tree.parts();
            let next = parts
                .get(index)
                .or_else(|| index.checked_sub(1).and_then(|previous| parts.get(previous)))
                .map(|part| part.id.clone())
                .ok_or_else(|| PartsLayoutError::InvalidActivePart(part_id.to_string()))?;
            self.active_part_id = next;
        }
        Ok(())
    }

    fn add_view_in_place(
        &mut self,
        part_id: &str,
        view_id: &str,
        insertion_index: Option<usize>,
    ) -> PartsLayoutResult<()> {
        if let Some(owner) = self.tree.find_part_by_view_id(view_id) {
            return Err(PartsLayoutError::DuplicateView {
                view_id: view_id.to_string(),
                part_id: owner.id.clone(),
            });
        }
        if self.tree.find_part(part_id).is_none() {
            return Err(PartsLayoutError::PartNotFound(part_id.to_string()));
        }

        let part = self.tree.part_mut(part_id)?;
        let index = insertion_index.unwrap_or(part.view_ids.len());
        part.insert_view(index, view_id.to_string());
        tracing::debug!(part_id, view_id, index, "View added");

        self.activate_view_in_place(view_id)
    }

    fn move_view_in_place(
        &mut self,
        view_id: &str,
        target_part_id: &str,
        insertion_index: Option<usize>,
    ) -> PartsLayoutResult<()> {
        let source = self
            .tree
            .find_part_by_view_id(view_id)
            .ok_or_else(|| PartsLayoutError::ViewNotFound(view_id.to_string()))?;
        let source_part_id = source.id.clone();
        let original_index = source.view_index(view_id).unwrap_or(0);
        let target = self
            .tree
            .find_part(target_part_id)
            .ok_or_else(|| PartsLayoutError::PartNotFound(target_part_id.to_string()))?;
        let reference_view = insertion_index.and_then(|index| target.view_ids.get(index).cloned());

        let same_part = source_part_id == target_part_id;
        self.remove_view_in_place(
            view_id,
            RemoveViewOptions {
                prevent_part_removal: same_part,
            },
        )?;

        let target = self.tree.part_mut(target_part_id)?;
        let index = match reference_view {
            Some(reference) if reference == view_id => original_index,
            Some(reference) => target
                .view_index(&reference)
                .unwrap_or(target.view_ids.len()),
            None => target.view_ids.len(),
        };
        tracing::debug!(
            view_id,
            from = %source_part_id,
            to = %target_part_id,
            index,
            "Moving view"
        );

        self.add_view_in_place(target_part_id, view_id, Some(index))
    }

    fn remove_view_in_place(
        &mut self,
        view_id: &str,
        options: RemoveViewOptions,
    ) -> PartsLayoutResult<()> {
        let part_id = self
            .tree
            .find_part_by_view_id(view_id)
            .map(|part| part.id.clone())
            .ok_or_else(|| PartsLayoutError::ViewNotFound(view_id.to_string()))?;

        let accessor = &self.accessor;
        let part = self.tree.part_mut(&part_id)?;
        part.remove_view(view_id);
        if part.active_view_id.as_deref() == Some(view_id) {
            part.active_view_id = most_recently_activated(&part.view_ids, accessor.as_ref());
            tracing::debug!(
                part_id = %part_id,
                active_view_id = ?part.active_view_id,
                "Reassigned active view"
            );
        }
        let emptied = part.is_empty();
        tracing::debug!(part_id = %part_id, view_id, "View removed");

        if emptied && !options.prevent_part_removal {
            self.remove_part_in_place(&part_id)?;
        }
        Ok(())
    }

    fn activate_view_in_place(&mut self, view_id: &str) -> PartsLayoutResult<()> {
        let part_id = self
            .tree
            .find_part_by_view_id(view_id)
            .map(|part| part.id.clone())
            .ok_or_else(|| PartsLayoutError::ViewNotFound(view_id.to_string()))?;
        self.tree.part_mut(&part_id)?.active_view_id = Some(view_id.to_string());
        self.activate_part_in_place(&part_id)
    }

    fn activate_adjacent_view_in_place(&mut self, view_id: &str) -> PartsLayoutResult<()> {
        let part = self
            .tree
            .find_part_by_view_id(view_id)
            .ok_or_else(|| PartsLayoutError::ViewNotFound(view_id.to_string()))?;
        let part_id = part.id.clone();
        let index = part.view_index(view_id).unwrap_or(0);
        let adjacent = part
            .view_ids
            .get(index + 1)
            .or_else(|| index.checked_sub(1).and_then(|previous| part.view_ids.get(previous)))
            .cloned();

        tracing::trace!(part_id = %part_id, adjacent = ?adjacent, "Activating adjacent view");
        self.tree.part_mut(&part_id)?.active_view_id = adjacent;
        self.activate_part_in_place(&part_id)
    }

    fn activate_part_in_place(&mut self, part_id: &str) -> PartsLayoutResult<()> {
        if self.tree.find_part(part_id).is_none() {
            return Err(PartsLayoutError::PartNotFound(part_id.to_string()));
        }
        self.active_part_id = part_id.to_string();
        Ok(())
    }

    fn set_split_ratio_in_place(&mut self, node_id: NodeId, ratio: f64) -> PartsLayoutResult<()> {
        let ratio = validate_ratio(ratio)?;
        if self.tree.find_tree_node(node_id).is_none() {
            return Err(PartsLayoutError::NodeNotFound(node_id));
        }
        self.tree.node_mut(node_id)?.ratio = ratio;
        tracing::debug!(node_id = %node_id, ratio, "Split ratio updated");
        Ok(())
    }

    /// Resolves a docking reference: a part id, else a tree node id.
    fn resolve_element(&self, element_id: &str) -> PartsLayoutResult<ElementId> {
        if self.tree.find_part(element_id).is_some() {
            return Ok(ElementId::Part(element_id.to_string()));
        }
        Uuid::parse_str(element_id)
            .ok()
            .map(NodeId)
            .filter(|node_id| self.tree.find_tree_node(*node_id).is_some())
            .map(ElementId::Node)
            .ok_or_else(|| PartsLayoutError::ElementNotFound(element_id.to_string()))
    }
}

/// Picks the view with the highest activation instant; earlier tabs win ties.
fn most_recently_activated(
    view_ids: &[String],
    accessor: &dyn PartsLayoutAccessor,
) -> Option<String> {
    let mut best: Option<(&String, u64)> = None;
    for view_id in view_ids {
        let instant = accessor.view_activation_instant(view_id);
        if best.is_none_or(|(_, best_instant)| instant > best_instant) {
            best = Some((view_id, instant));
        }
    }
    best.map(|(view_id, _)| view_id.clone())
}

impl PartialEq for PartsLayout {
    fn eq(&self, other: &Self) -> bool {
        self.active_part_id == other.active_part_id && self.tree == other.tree
    }
}

impl fmt::Debug for PartsLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartsLayout")
            .field("tree", &self.tree)
            .field("active_part_id", &self.active_part_id)
            .finish_non_exhaustive()
    }
}
