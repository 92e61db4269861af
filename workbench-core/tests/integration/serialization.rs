//! Serialized layout integration tests
//!
//! Covers the portable string form: round trips, documents written by other
//! hosts, and rejection of untrustworthy input.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use serde_json::{Value, json};
use workbench_core::parts::{
    ActivationHistory, Align, Direction, ElementId, MAX_TREE_DEPTH, PartsLayout,
    PartsLayoutAccessor, PartsLayoutError, ReferencePart, SerializeOptions, TreeElement,
};

fn accessor() -> Arc<dyn PartsLayoutAccessor> {
    Arc::new(ActivationHistory::new())
}

fn encode(document: &Value) -> String {
    URL_SAFE_NO_PAD.encode(serde_json::to_vec(document).unwrap())
}

fn decode(serialized: &str) -> Value {
    serde_json::from_slice(&URL_SAFE_NO_PAD.decode(serialized).unwrap()).unwrap()
}

fn sample_layout() -> PartsLayout {
    PartsLayout::new(accessor())
        .add_part(
            "topLeft",
            &ReferencePart::new(Align::Left)
                .relative_to("main")
                .with_ratio(0.25),
        )
        .unwrap()
        .add_part(
            "bottomLeft",
            &ReferencePart::new(Align::Bottom)
                .relative_to("topLeft")
                .with_ratio(0.5),
        )
        .unwrap()
        .add_view("main", "editor.1", None)
        .unwrap()
        .add_view("main", "editor.2", None)
        .unwrap()
        .add_view("bottomLeft", "outline", None)
        .unwrap()
}

const NODE_A: &str = "6f1c2d3e-0000-4000-8000-000000000001";
const NODE_B: &str = "6f1c2d3e-0000-4000-8000-000000000002";

fn foreign_document() -> Value {
    json!({
        "root": {
            "nodeId": NODE_A,
            "direction": "row",
            "ratio": 0.3,
            "child1": { "partId": "left", "viewIds": ["explorer"], "activeViewId": "explorer" },
            "child2": {
                "nodeId": NODE_B,
                "direction": "column",
                "ratio": 0.75,
                "child1": { "partId": "main", "viewIds": ["a", "b"], "activeViewId": "b" },
                "child2": { "partId": "panel", "viewIds": [] }
            }
        },
        "activePartId": "main",
        "uuid": "d9428888-122b-11e1-b85c-61cd3cbb3210"
    })
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn round_trip_preserves_structure() {
    let layout = sample_layout();
    let serialized = layout
        .serialize(&SerializeOptions::new())
        .unwrap()
        .unwrap();

    let restored = PartsLayout::deserialize(accessor(), &serialized).unwrap();
    assert_eq!(restored, layout);
    assert_eq!(restored.tree().nodes().len(), 2);
    assert_eq!(
        restored.find_part("main").unwrap().active_view_id(),
        Some("editor.2")
    );
}

#[test]
fn empty_layout_round_trips_when_kept() {
    let layout = PartsLayout::new(accessor());
    assert!(layout.serialize(&SerializeOptions::new()).unwrap().is_none());

    let serialized = layout
        .serialize(&SerializeOptions::new().with_null_if_empty(false))
        .unwrap()
        .unwrap();
    let restored = PartsLayout::deserialize(accessor(), &serialized).unwrap();
    assert!(restored.is_empty());
    assert_eq!(restored, layout);
}

#[test]
fn serialized_form_is_url_safe_and_unpadded() {
    let serialized = sample_layout()
        .serialize(&SerializeOptions::new())
        .unwrap()
        .unwrap();
    assert!(
        serialized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[test]
fn document_shape_has_no_parent_links() {
    let serialized = sample_layout()
        .serialize(&SerializeOptions::new().with_uuid("stamp"))
        .unwrap()
        .unwrap();
    let document = decode(&serialized);

    assert_eq!(document["activePartId"], "bottomLeft");
    assert_eq!(document["uuid"], "stamp");
    assert_eq!(document["root"]["direction"], "row");
    assert_eq!(document["root"]["child2"]["partId"], "main");
    assert_eq!(document["root"]["child1"]["direction"], "column");
    assert!(!serialized.is_empty());
    assert!(document["root"].get("parent").is_none());
    assert!(document["root"]["child2"].get("parent").is_none());
}

/// Docks `depth` parts, each to the right of the previous one.
fn staircase_layout(depth: usize) -> PartsLayout {
    (1..=depth).fold(PartsLayout::new(accessor()), |layout, index| {
        let previous = if index == 1 {
            "main".to_string()
        } else {
            format!("p{}", index - 1)
        };
        layout
            .add_part(
                &format!("p{index}"),
                &ReferencePart::new(Align::Right).relative_to(previous),
            )
            .unwrap()
            .add_view(&format!("p{index}"), &format!("view.{index}"), None)
            .unwrap()
    })
}

#[test]
fn deepest_layout_round_trips() {
    let layout = staircase_layout(MAX_TREE_DEPTH);
    assert_eq!(layout.tree().depth(), MAX_TREE_DEPTH);

    let serialized = layout
        .serialize(&SerializeOptions::new())
        .unwrap()
        .unwrap();
    let restored = PartsLayout::deserialize(accessor(), &serialized).unwrap();
    assert_eq!(restored, layout);
    assert_eq!(restored.tree().depth(), MAX_TREE_DEPTH);
}

#[test]
fn docking_past_depth_limit_is_rejected() {
    let layout = staircase_layout(MAX_TREE_DEPTH);
    let too_deep = format!("p{}", MAX_TREE_DEPTH + 1);
    let deepest = format!("p{MAX_TREE_DEPTH}");

    assert_eq!(
        layout
            .add_part(
                &too_deep,
                &ReferencePart::new(Align::Right).relative_to(deepest.as_str()),
            )
            .unwrap_err(),
        PartsLayoutError::TreeTooDeep(MAX_TREE_DEPTH + 1)
    );
    assert!(layout.find_part(&too_deep).is_none());

    // Shallow spots of a deep layout still accept new parts.
    let layout = layout
        .add_part("beside.main", &ReferencePart::new(Align::Top).relative_to("main"))
        .unwrap();
    assert_eq!(layout.tree().depth(), MAX_TREE_DEPTH);
}

// ============================================================================
// Foreign documents
// ============================================================================

#[test]
fn foreign_document_is_restored_with_parent_links() {
    let layout = PartsLayout::deserialize(accessor(), &encode(&foreign_document())).unwrap();

    assert_eq!(layout.active_part_id(), "main");
    let ids: Vec<&str> = layout.parts().iter().map(|part| part.id()).collect();
    assert_eq!(ids, ["left", "main", "panel"]);
    assert_eq!(layout.view_ids(), ["explorer", "a", "b"]);

    let root_id = layout.root().as_node().unwrap();
    assert_eq!(root_id.to_string(), NODE_A);
    let Some(TreeElement::Node(inner)) = layout.tree().element(&ElementId::Node(
        layout.find_part("panel").unwrap().parent().unwrap(),
    )) else {
        panic!("panel should hang below a tree node");
    };
    assert_eq!(inner.id().to_string(), NODE_B);
    assert_eq!(inner.parent(), Some(root_id));
    assert_eq!(inner.direction(), Direction::Column);
    assert!(layout.find_part("left").unwrap().parent() == Some(root_id));
}

#[test]
fn padded_input_is_accepted() {
    let padded = URL_SAFE.encode(serde_json::to_vec(&foreign_document()).unwrap());
    assert!(PartsLayout::deserialize(accessor(), &padded).is_ok());
}

#[test]
fn missing_view_list_defaults_to_empty() {
    let document = json!({
        "root": { "partId": "main" },
        "activePartId": "main"
    });
    let layout = PartsLayout::deserialize(accessor(), &encode(&document)).unwrap();
    assert!(layout.is_empty());
}

// ============================================================================
// Rejected input
// ============================================================================

#[test]
fn unknown_active_part_is_rejected() {
    let mut document = foreign_document();
    document["activePartId"] = json!("gone");
    assert_eq!(
        PartsLayout::deserialize(accessor(), &encode(&document)).unwrap_err(),
        PartsLayoutError::InvalidActivePart("gone".to_string())
    );
}

#[test]
fn dangling_active_view_is_rejected() {
    let mut document = foreign_document();
    document["root"]["child1"]["activeViewId"] = json!("gone");
    assert!(matches!(
        PartsLayout::deserialize(accessor(), &encode(&document)).unwrap_err(),
        PartsLayoutError::InvalidActiveView { .. }
    ));
}

#[test]
fn view_in_two_parts_is_rejected() {
    let mut document = foreign_document();
    document["root"]["child2"]["child2"]["viewIds"] = json!(["explorer"]);
    assert!(matches!(
        PartsLayout::deserialize(accessor(), &encode(&document)).unwrap_err(),
        PartsLayoutError::DuplicateView { .. }
    ));
}

#[test]
fn duplicate_part_is_rejected() {
    let mut document = foreign_document();
    document["root"]["child2"]["child2"]["partId"] = json!("left");
    assert_eq!(
        PartsLayout::deserialize(accessor(), &encode(&document)).unwrap_err(),
        PartsLayoutError::DuplicatePart("left".to_string())
    );
}

#[test]
fn out_of_range_ratio_is_rejected() {
    let mut document = foreign_document();
    document["root"]["child2"]["ratio"] = json!(-0.1);
    assert_eq!(
        PartsLayout::deserialize(accessor(), &encode(&document)).unwrap_err(),
        PartsLayoutError::InvalidRatio(-0.1)
    );
}

#[test]
fn document_deeper_than_limit_is_rejected() {
    let depth = MAX_TREE_DEPTH + 36;
    let mut element = json!({ "partId": "leaf" });
    for level in 0..depth {
        element = json!({
            "nodeId": format!("6f1c2d3e-0000-4000-8000-{level:012}"),
            "direction": "row",
            "ratio": 0.5,
            "child1": { "partId": format!("part.{level}") },
            "child2": element,
        });
    }
    let document = json!({ "root": element, "activePartId": "leaf" });

    assert_eq!(
        PartsLayout::deserialize(accessor(), &encode(&document)).unwrap_err(),
        PartsLayoutError::TreeTooDeep(depth)
    );
}

#[test]
fn malformed_input_is_rejected() {
    assert!(matches!(
        PartsLayout::deserialize(accessor(), "%%%").unwrap_err(),
        PartsLayoutError::Decode(_)
    ));
    assert!(matches!(
        PartsLayout::deserialize(accessor(), &URL_SAFE_NO_PAD.encode("[1, 2")).unwrap_err(),
        PartsLayoutError::Parse(_)
    ));
    assert!(matches!(
        PartsLayout::deserialize(accessor(), &encode(&json!({ "activePartId": "main" })))
            .unwrap_err(),
        PartsLayoutError::Parse(_)
    ));
}
