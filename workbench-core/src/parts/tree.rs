//! Layout tree structure for docked parts
//!
//! This module provides the binary tree used to represent the arrangement
//! of parts. Each element is either a leaf [`Part`] (holding a stack of
//! views) or an internal [`TreeNode`] (holding two children).
//!
//! # Tree Structure
//!
//! ```text
//! Node(row, 0.25)
//! ├── Node(column, 0.5)
//! │   ├── Part(topLeft)
//! │   └── Part(bottomLeft)
//! └── Part(main, [view.1, view.2])
//! ```
//!
//! Elements are stored in an arena keyed by id. Children and parents are
//! linked by id instead of by reference, so the tree can be cloned and
//! serialized without cycles.

use std::collections::HashMap;

use super::error::{PartsLayoutError, PartsLayoutResult};
use super::types::{Align, ChildSlot, Direction, ElementId, NodeId};

/// Default split ratio (50% of available space).
pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;

/// Minimum valid split ratio.
pub const MIN_SPLIT_RATIO: f64 = 0.0;

/// Maximum valid split ratio.
pub const MAX_SPLIT_RATIO: f64 = 1.0;

/// Checks that a split ratio lies in the closed interval [0, 1].
///
/// # Errors
///
/// Returns `PartsLayoutError::InvalidRatio` for values outside the
/// interval and for NaN.
pub fn validate_ratio(ratio: f64) -> PartsLayoutResult<f64> {
    if (MIN_SPLIT_RATIO..=MAX_SPLIT_RATIO).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(PartsLayoutError::InvalidRatio(ratio))
    }
}

/// Maximum number of tree nodes between the root and any part.
///
/// Keeps every layout readable back from its serialized form, whose JSON
/// nesting grows with the tree depth.
pub const MAX_TREE_DEPTH: usize = 64;

/// Checks that a tree depth does not exceed [`MAX_TREE_DEPTH`].
///
/// # Errors
///
/// Returns `PartsLayoutError::TreeTooDeep` for deeper trees.
pub fn validate_depth(depth: usize) -> PartsLayoutResult<usize> {
    if depth <= MAX_TREE_DEPTH {
        Ok(depth)
    } else {
        Err(PartsLayoutError::TreeTooDeep(depth))
    }
}

/// A leaf of the layout tree.
///
/// A part hosts an ordered stack of views. The order is the tab order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub(crate) id: String,
    pub(crate) view_ids: Vec<String>,
    pub(crate) active_view_id: Option<String>,
    pub(crate) parent: Option<NodeId>,
}

impl Part {
    /// Creates a new empty part without a parent.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            view_ids: Vec::new(),
            active_view_id: None,
            parent: None,
        }
    }

    /// Returns the part id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the views of this part in tab order.
    #[must_use]
    pub fn view_ids(&self) -> &[String] {
        &self.view_ids
    }

    /// Returns the active view, if any.
    #[must_use]
    pub fn active_view_id(&self) -> Option<&str> {
        self.active_view_id.as_deref()
    }

    /// Returns the parent tree node, or `None` if this part is the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns true if this part holds no views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view_ids.is_empty()
    }

    /// Returns true if this part holds the given view.
    #[must_use]
    pub fn contains_view(&self, view_id: &str) -> bool {
        self.view_ids.iter().any(|id| id == view_id)
    }

    /// Returns the tab position of the given view.
    #[must_use]
    pub fn view_index(&self, view_id: &str) -> Option<usize> {
        self.view_ids.iter().position(|id| id == view_id)
    }

    /// Inserts a view, clamping the index to the end of the list.
    pub(crate) fn insert_view(&mut self, index: usize, view_id: String) {
        let index = index.min(self.view_ids.len());
        self.view_ids.insert(index, view_id);
    }

    /// Removes a view and returns the position it occupied.
    pub(crate) fn remove_view(&mut self, view_id: &str) -> Option<usize> {
        let index = self.view_index(view_id)?;
        self.view_ids.remove(index);
        Some(index)
    }
}

/// An internal node of the layout tree.
///
/// Splits the available space between two children, arranged in a row
/// or a column. The ratio is always the share of `child1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub(crate) id: NodeId,
    pub(crate) child1: ElementId,
    pub(crate) child2: ElementId,
    pub(crate) direction: Direction,
    pub(crate) ratio: f64,
    pub(crate) parent: Option<NodeId>,
}

impl TreeNode {
    /// Returns the node id.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the first child (left or top).
    #[must_use]
    pub const fn child1(&self) -> &ElementId {
        &self.child1
    }

    /// Returns the second child (right or bottom).
    #[must_use]
    pub const fn child2(&self) -> &ElementId {
        &self.child2
    }

    /// Returns the child in the given slot.
    #[must_use]
    pub const fn child(&self, slot: ChildSlot) -> &ElementId {
        match slot {
            ChildSlot::First => &self.child1,
            ChildSlot::Second => &self.child2,
        }
    }

    /// Returns the split direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the share of `child1`, in [0, 1].
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Returns the parent tree node, or `None` if this node is the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the slot holding the given child.
    #[must_use]
    pub fn slot_of(&self, child: &ElementId) -> Option<ChildSlot> {
        if &self.child1 == child {
            Some(ChildSlot::First)
        } else if &self.child2 == child {
            Some(ChildSlot::Second)
        } else {
            None
        }
    }

    /// Returns the other child of this node.
    #[must_use]
    pub fn sibling_of(&self, child: &ElementId) -> Option<&ElementId> {
        match self.slot_of(child)? {
            ChildSlot::First => Some(&self.child2),
            ChildSlot::Second => Some(&self.child1),
        }
    }

    fn child_mut(&mut self, slot: ChildSlot) -> &mut ElementId {
        match slot {
            ChildSlot::First => &mut self.child1,
            ChildSlot::Second => &mut self.child2,
        }
    }
}

/// Borrowed view of a single tree element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreeElement<'a> {
    /// A leaf part.
    Part(&'a Part),
    /// An internal tree node.
    Node(&'a TreeNode),
}

impl<'a> TreeElement<'a> {
    /// Returns true if this element is a part.
    #[must_use]
    pub const fn is_part(&self) -> bool {
        matches!(self, Self::Part(_))
    }

    /// Returns true if this element is a tree node.
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// Returns the part if this element is a part.
    #[must_use]
    pub const fn as_part(&self) -> Option<&'a Part> {
        match self {
            Self::Part(part) => Some(part),
            Self::Node(_) => None,
        }
    }

    /// Returns the tree node if this element is a tree node.
    #[must_use]
    pub const fn as_node(&self) -> Option<&'a TreeNode> {
        match self {
            Self::Part(_) => None,
            Self::Node(node) => Some(node),
        }
    }

    /// Returns the id of this element.
    #[must_use]
    pub fn id(&self) -> ElementId {
        match self {
            Self::Part(part) => ElementId::Part(part.id.clone()),
            Self::Node(node) => ElementId::Node(node.id),
        }
    }

    /// Returns the parent of this element.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        match self {
            Self::Part(part) => part.parent,
            Self::Node(node) => node.parent,
        }
    }
}

/// Options for [`LayoutTree::find_elements`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Stop at the first matching element.
    pub find_first: bool,
}

impl FindOptions {
    /// Options that stop at the first match.
    #[must_use]
    pub const fn first() -> Self {
        Self { find_first: true }
    }
}

/// Arena holding all elements of a layout tree.
///
/// The tree always contains at least one part. Links between elements
/// are ids, and every parent link mirrors the child links above it.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTree {
    root: ElementId,
    parts: HashMap<String, Part>,
    nodes: HashMap<NodeId, TreeNode>,
}

impl LayoutTree {
    /// Creates a tree consisting of a single empty root part.
    #[must_use]
    pub fn with_root_part(part_id: impl Into<String>) -> Self {
        let part = Part::new(part_id);
        let root = ElementId::Part(part.id.clone());
        let mut parts = HashMap::new();
        parts.insert(part.id.clone(), part);
        Self {
            root,
            parts,
            nodes: HashMap::new(),
        }
    }

    /// Assembles a tree from prebuilt elements and relinks all parents.
    ///
    /// # Errors
    ///
    /// Returns `PartsLayoutError::Corrupt` if the root or any child link
    /// points at a missing element, or if an element is reachable twice.
    pub(crate) fn from_elements(
        root: ElementId,
        parts: HashMap<String, Part>,
        nodes: HashMap<NodeId, TreeNode>,
    ) -> PartsLayoutResult<Self> {
        let mut tree = Self { root, parts, nodes };
        tree.relink_parents()?;
        Ok(tree)
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Returns the id of the root element.
    #[must_use]
    pub const fn root(&self) -> &ElementId {
        &self.root
    }

    /// Returns the root element.
    #[must_use]
    pub fn root_element(&self) -> Option<TreeElement<'_>> {
        self.element(&self.root)
    }

    /// Resolves an element id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<TreeElement<'_>> {
        match id {
            ElementId::Part(part_id) => self.parts.get(part_id).map(TreeElement::Part),
            ElementId::Node(node_id) => self.nodes.get(node_id).map(TreeElement::Node),
        }
    }

    /// Returns the number of parts in the tree.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub(crate) fn part_mut(&mut self, part_id: &str) -> PartsLayoutResult<&mut Part> {
        self.parts
            .get_mut(part_id)
            .ok_or_else(|| PartsLayoutError::PartNotFound(part_id.to_string()))
    }

    pub(crate) fn node_mut(&mut self, node_id: NodeId) -> PartsLayoutResult<&mut TreeNode> {
        self.nodes
            .get_mut(&node_id)
            .ok_or(PartsLayoutError::NodeNotFound(node_id))
    }

    // ========================================================================
    // Tree Traversal Methods
    // ========================================================================

    /// Visits the tree depth-first in pre-order and collects every element
    /// matching the predicate.
    ///
    /// With `find_first` set, the traversal stops at the first match.
    pub fn find_elements<'a, F>(&'a self, mut predicate: F, options: FindOptions) -> Vec<TreeElement<'a>>
    where
        F: FnMut(&TreeElement<'a>) -> bool,
    {
        let mut matches = Vec::new();
        let mut stack: Vec<&'a ElementId> = vec![&self.root];

        while let Some(id) = stack.pop() {
            let Some(element) = self.element(id) else {
                tracing::warn!(element = %id, "Dangling link in layout tree");
                continue;
            };

            if predicate(&element) {
                matches.push(element);
                if options.find_first {
                    break;
                }
            }

            if let TreeElement::Node(node) = element {
                stack.push(&node.child2);
                stack.push(&node.child1);
            }
        }

        matches
    }

    /// Finds a part by its id.
    #[must_use]
    pub fn find_part(&self, part_id: &str) -> Option<&Part> {
        self.find_elements(
            |element| element.as_part().is_some_and(|part| part.id == part_id),
            FindOptions::first(),
        )
        .first()
        .and_then(TreeElement::as_part)
    }

    /// Finds the part holding the given view.
    #[must_use]
    pub fn find_part_by_view_id(&self, view_id: &str) -> Option<&Part> {
        self.find_elements(
            |element| element.as_part().is_some_and(|part| part.contains_view(view_id)),
            FindOptions::first(),
        )
        .first()
        .and_then(TreeElement::as_part)
    }

    /// Finds a tree node by its id.
    #[must_use]
    pub fn find_tree_node(&self, node_id: NodeId) -> Option<&TreeNode> {
        self.find_elements(
            |element| element.as_node().is_some_and(|node| node.id == node_id),
            FindOptions::first(),
        )
        .first()
        .and_then(TreeElement::as_node)
    }

    /// Returns all parts in tree order (depth-first, left-to-right).
    #[must_use]
    pub fn parts(&self) -> Vec<&Part> {
        self.find_elements(TreeElement::is_part, FindOptions::default())
            .into_iter()
            .filter_map(|element| element.as_part())
            .collect()
    }

    /// Returns all tree nodes in tree order.
    #[must_use]
    pub fn nodes(&self) -> Vec<&TreeNode> {
        self.find_elements(TreeElement::is_node, FindOptions::default())
            .into_iter()
            .filter_map(|element| element.as_node())
            .collect()
    }

    /// Returns all view ids, parts concatenated in tree order.
    #[must_use]
    pub fn view_ids(&self) -> Vec<&str> {
        self.parts()
            .into_iter()
            .flat_map(|part| part.view_ids.iter().map(String::as_str))
            .collect()
    }

    /// Returns the ids of the tree nodes above a part, root first.
    ///
    /// The root part has an empty path. Returns `None` for unknown parts.
    #[must_use]
    pub fn path(&self, part_id: &str) -> Option<Vec<NodeId>> {
        let part = self.parts.get(part_id)?;
        let mut path = Vec::new();
        let mut current = part.parent;
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.nodes.get(&node_id).and_then(|node| node.parent);
        }
        path.reverse();
        Some(path)
    }

    /// Returns the depth of the tree.
    ///
    /// A single part has depth 0. Each level of nesting adds 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.parts
            .keys()
            .filter_map(|part_id| self.path(part_id))
            .map(|path| path.len())
            .max()
            .unwrap_or(0)
    }

    // ========================================================================
    // Tree Mutation Methods
    // ========================================================================

    /// Docks a new part next to the reference element.
    ///
    /// A new tree node takes the reference element's slot and receives the
    /// new part and the reference element as children. `ratio` is the share
    /// of the new part; it is stored mirrored when the new part ends up as
    /// the second child.
    ///
    /// Returns the id of the new tree node.
    pub(crate) fn dock_part(
        &mut self,
        mut part: Part,
        reference: &ElementId,
        align: Align,
        ratio: f64,
    ) -> PartsLayoutResult<NodeId> {
        let reference_parent = self.parent_of(reference)?;
        let node_id = NodeId::new();
        let new_child = ElementId::Part(part.id.clone());

        let (child1, child2, ratio) = if align.places_first() {
            (new_child, reference.clone(), ratio)
        } else {
            (reference.clone(), new_child, MAX_SPLIT_RATIO - ratio)
        };

        match reference_parent {
            None => self.root = ElementId::Node(node_id),
            Some(parent_id) => {
                self.replace_child(parent_id, reference, ElementId::Node(node_id))?;
            }
        }
        self.set_parent(reference, Some(node_id))?;

        part.parent = Some(node_id);
        self.parts.insert(part.id.clone(), part);
        self.nodes.insert(
            node_id,
            TreeNode {
                id: node_id,
                child1,
                child2,
                direction: align.direction(),
                ratio,
                parent: reference_parent,
            },
        );

        Ok(node_id)
    }

    /// Removes a part and splices its parent node out of the tree.
    ///
    /// The sibling of the removed part takes the parent's slot, or becomes
    /// the root. Returns `false` without touching the tree if the part is
    /// the root, i.e. the only part left.
    pub(crate) fn detach_part(&mut self, part_id: &str) -> PartsLayoutResult<bool> {
        let part = self
            .parts
            .get(part_id)
            .ok_or_else(|| PartsLayoutError::PartNotFound(part_id.to_string()))?;
        let Some(parent_id) = part.parent else {
            return Ok(false);
        };

        let part_ref = ElementId::Part(part_id.to_string());
        let parent = self
            .nodes
            .remove(&parent_id)
            .ok_or(PartsLayoutError::NodeNotFound(parent_id))?;
        let sibling = parent
            .sibling_of(&part_ref)
            .cloned()
            .ok_or_else(|| corrupt_link(parent_id, &part_ref))?;

        match parent.parent {
            None => self.root = sibling.clone(),
            Some(grandparent_id) => {
                self.replace_child(grandparent_id, &ElementId::Node(parent_id), sibling.clone())?;
            }
        }
        self.set_parent(&sibling, parent.parent)?;
        self.parts.remove(part_id);

        Ok(true)
    }

    /// Walks the tree top-down and sets every parent link.
    ///
    /// Fails if a link points at a missing element, if an element is
    /// reachable more than once, or if the arena holds unreachable elements.
    pub(crate) fn relink_parents(&mut self) -> PartsLayoutResult<()> {
        let mut visited = 0usize;
        let mut stack = vec![(self.root.clone(), None)];

        while let Some((id, parent)) = stack.pop() {
            visited += 1;
            if visited > self.parts.len() + self.nodes.len() {
                return Err(PartsLayoutError::Corrupt(format!(
                    "element {id} is reachable more than once"
                )));
            }
            match &id {
                ElementId::Part(part_id) => {
                    let part = self.parts.get_mut(part_id).ok_or_else(|| {
                        PartsLayoutError::Corrupt(format!("missing part '{part_id}'"))
                    })?;
                    part.parent = parent;
                }
                ElementId::Node(node_id) => {
                    let node = self.nodes.get_mut(node_id).ok_or_else(|| {
                        PartsLayoutError::Corrupt(format!("missing tree node '{node_id}'"))
                    })?;
                    node.parent = parent;
                    stack.push((node.child2.clone(), Some(*node_id)));
                    stack.push((node.child1.clone(), Some(*node_id)));
                }
            }
        }

        if visited != self.parts.len() + self.nodes.len() {
            return Err(PartsLayoutError::Corrupt(
                "layout contains unreachable elements".to_string(),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Private Helper Methods
    // ========================================================================

    fn parent_of(&self, id: &ElementId) -> PartsLayoutResult<Option<NodeId>> {
        self.element(id)
            .map(|element| element.parent())
            .ok_or_else(|| PartsLayoutError::ElementNotFound(id.to_string()))
    }

    fn set_parent(&mut self, id: &ElementId, parent: Option<NodeId>) -> PartsLayoutResult<()> {
        match id {
            ElementId::Part(part_id) => self.part_mut(part_id)?.parent = parent,
            ElementId::Node(node_id) => self.node_mut(*node_id)?.parent = parent,
        }
        Ok(())
    }

    fn replace_child(
        &mut self,
        parent_id: NodeId,
        old: &ElementId,
        new: ElementId,
    ) -> PartsLayoutResult<()> {
        let parent = self.node_mut(parent_id)?;
        let slot = parent
            .slot_of(old)
            .ok_or_else(|| corrupt_link(parent_id, old))?;
        *parent.child_mut(slot) = new;
        Ok(())
    }
}

fn corrupt_link(parent_id: NodeId, child: &ElementId) -> PartsLayoutError {
    PartsLayoutError::Corrupt(format!("tree node {parent_id} does not hold {child}"))
}
