//! Serialized form of a parts layout
//!
//! A layout is written as a JSON document and encoded with the URL-safe
//! base64 alphabet so it can travel in a URL:
//!
//! ```text
//! {
//!   "root": {
//!     "nodeId": "…", "direction": "row", "ratio": 0.25,
//!     "child1": { "partId": "left", "viewIds": [] },
//!     "child2": { "partId": "main", "viewIds": ["view.1"], "activeViewId": "view.1" }
//!   },
//!   "activePartId": "main",
//!   "uuid": "…"
//! }
//! ```
//!
//! Parent links are not written. They are restored by walking the tree
//! top-down after parsing. Elements are told apart by the presence of a
//! `partId` or a `nodeId` field.

use std::collections::HashMap;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::{PartsLayoutError, PartsLayoutResult};
use super::tree::{LayoutTree, Part, TreeElement, TreeNode, validate_depth, validate_ratio};
use super::types::{Direction, ElementId, NodeId};

/// URL-safe alphabet, no padding on output, padding optional on input.
const LAYOUT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Top-level layout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LayoutDocument {
    pub root: ElementDocument,
    pub active_part_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Serialized tree element, either a part or a tree node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum ElementDocument {
    Part(PartDocument),
    Node(NodeDocument),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PartDocument {
    pub part_id: String,
    #[serde(default)]
    pub view_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_view_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NodeDocument {
    pub node_id: NodeId,
    pub child1: Box<ElementDocument>,
    pub child2: Box<ElementDocument>,
    pub direction: Direction,
    pub ratio: f64,
}

impl<'de> Deserialize<'de> for ElementDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if is_part_shaped(&value) {
            serde_json::from_value(value)
                .map(Self::Part)
                .map_err(D::Error::custom)
        } else if is_node_shaped(&value) {
            serde_json::from_value(value)
                .map(Self::Node)
                .map_err(D::Error::custom)
        } else {
            Err(D::Error::custom(
                "layout element has neither a `partId` nor a `nodeId` field",
            ))
        }
    }
}

/// Returns true if the JSON value looks like a serialized part.
#[must_use]
pub fn is_part_shaped(value: &Value) -> bool {
    value.get("partId").is_some_and(Value::is_string)
}

/// Returns true if the JSON value looks like a serialized tree node.
#[must_use]
pub fn is_node_shaped(value: &Value) -> bool {
    value.get("nodeId").is_some_and(Value::is_string)
}

/// Encodes a tree into its URL-safe string form.
pub(crate) fn encode(
    tree: &LayoutTree,
    active_part_id: &str,
    uuid: Option<String>,
) -> PartsLayoutResult<String> {
    let document = LayoutDocument {
        root: element_document(tree, tree.root())?,
        active_part_id: active_part_id.to_string(),
        uuid,
    };
    let json =
        serde_json::to_vec(&document).map_err(|e| PartsLayoutError::Encode(e.to_string()))?;
    let encoded = LAYOUT_BASE64.encode(json);
    tracing::trace!(length = encoded.len(), "Encoded layout");
    Ok(encoded)
}

/// Writes the layout document as indented JSON, without the stamp.
pub(crate) fn to_json_pretty(
    tree: &LayoutTree,
    active_part_id: &str,
) -> PartsLayoutResult<String> {
    let document = LayoutDocument {
        root: element_document(tree, tree.root())?,
        active_part_id: active_part_id.to_string(),
        uuid: None,
    };
    serde_json::to_string_pretty(&document).map_err(|e| PartsLayoutError::Encode(e.to_string()))
}

/// Decodes a string produced by [`encode`] into a tree and the active part id.
///
/// Checks every structural invariant that does not involve the active part:
/// unique part, node and view ids, ratios within [0, 1], active views
/// contained in their part and the depth limit.
pub(crate) fn decode(serialized: &str) -> PartsLayoutResult<(LayoutTree, String)> {
    let json = LAYOUT_BASE64
        .decode(serialized.trim())
        .map_err(|e| PartsLayoutError::Decode(e.to_string()))?;
    let document: LayoutDocument =
        serde_json::from_slice(&json).map_err(|e| PartsLayoutError::Parse(e.to_string()))?;

    let mut builder = TreeBuilder::default();
    let root = builder.collect(document.root)?;
    let tree = LayoutTree::from_elements(root, builder.parts, builder.nodes)?;
    validate_depth(tree.depth())?;
    tracing::trace!(parts = tree.part_count(), "Decoded layout");

    Ok((tree, document.active_part_id))
}

fn element_document(tree: &LayoutTree, id: &ElementId) -> PartsLayoutResult<ElementDocument> {
    match tree.element(id) {
        Some(TreeElement::Part(part)) => Ok(ElementDocument::Part(PartDocument {
            part_id: part.id.clone(),
            view_ids: part.view_ids.clone(),
            active_view_id: part.active_view_id.clone(),
        })),
        Some(TreeElement::Node(node)) => Ok(ElementDocument::Node(NodeDocument {
            node_id: node.id,
            child1: Box::new(element_document(tree, &node.child1)?),
            child2: Box::new(element_document(tree, &node.child2)?),
            direction: node.direction,
            ratio: node.ratio,
        })),
        None => Err(PartsLayoutError::Corrupt(format!("missing element {id}"))),
    }
}

/// Flattens a document tree into arena maps.
#[derive(Default)]
struct TreeBuilder {
    parts: HashMap<String, Part>,
    nodes: HashMap<NodeId, TreeNode>,
    view_owners: HashMap<String, String>,
}

impl TreeBuilder {
    fn collect(&mut self, document: ElementDocument) -> PartsLayoutResult<ElementId> {
        match document {
            ElementDocument::Part(part) => self.collect_part(part),
            ElementDocument::Node(node) => self.collect_node(node),
        }
    }

    fn collect_part(&mut self, document: PartDocument) -> PartsLayoutResult<ElementId> {
        if self.parts.contains_key(&document.part_id) {
            return Err(PartsLayoutError::DuplicatePart(document.part_id));
        }

        for view_id in &document.view_ids {
            if let Some(owner) = self
                .view_owners
                .insert(view_id.clone(), document.part_id.clone())
            {
                return Err(PartsLayoutError::DuplicateView {
                    view_id: view_id.clone(),
                    part_id: owner,
                });
            }
        }

        if let Some(active_view_id) = &document.active_view_id
            && !document.view_ids.contains(active_view_id)
        {
            return Err(PartsLayoutError::InvalidActiveView {
                part_id: document.part_id,
                view_id: active_view_id.clone(),
            });
        }

        let id = ElementId::Part(document.part_id.clone());
        self.parts.insert(
            document.part_id.clone(),
            Part {
                id: document.part_id,
                view_ids: document.view_ids,
                active_view_id: document.active_view_id,
                parent: None,
            },
        );
        Ok(id)
    }

    fn collect_node(&mut self, document: NodeDocument) -> PartsLayoutResult<ElementId> {
        if self.nodes.contains_key(&document.node_id) {
            return Err(PartsLayoutError::Corrupt(format!(
                "duplicate tree node '{}'",
                document.node_id
            )));
        }
        let ratio = validate_ratio(document.ratio)?;
        let child1 = self.collect(*document.child1)?;
        let child2 = self.collect(*document.child2)?;

        self.nodes.insert(
            document.node_id,
            TreeNode {
                id: document.node_id,
                child1,
                child2,
                direction: document.direction,
                ratio,
                parent: None,
            },
        );
        Ok(ElementId::Node(document.node_id))
    }
}
