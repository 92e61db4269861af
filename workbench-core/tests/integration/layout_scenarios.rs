//! Layout scenario tests
//!
//! Walks the engine through multi-step editing sessions and checks the
//! resulting tree shape and activation state.

use std::sync::Arc;

use workbench_core::parts::{
    ActivationHistory, Align, Direction, ElementId, PartsLayout, PartsLayoutError, ReferencePart,
    RemoveViewOptions, SerializeOptions, TreeElement, TreeNode,
};

fn new_layout() -> PartsLayout {
    PartsLayout::new(Arc::new(ActivationHistory::new()))
}

fn part(id: &str) -> ElementId {
    ElementId::Part(id.to_string())
}

fn node<'a>(layout: &'a PartsLayout, id: &ElementId) -> &'a TreeNode {
    match layout.tree().element(id) {
        Some(TreeElement::Node(node)) => node,
        other => panic!("expected a tree node at {id}, got {other:?}"),
    }
}

/// `topLeft` above `bottomLeft`, both left of `main`.
fn left_column_layout() -> PartsLayout {
    new_layout()
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
}

// ============================================================================
// Docking
// ============================================================================

#[test]
fn docking_builds_expected_tree() {
    let layout = left_column_layout();

    let root = node(&layout, layout.root());
    assert_eq!(root.direction(), Direction::Row);
    assert!((root.ratio() - 0.25).abs() < f64::EPSILON);
    assert_eq!(root.child2(), &part("main"));
    assert!(root.parent().is_none());

    let column = node(&layout, root.child1());
    assert_eq!(column.direction(), Direction::Column);
    assert!((column.ratio() - 0.5).abs() < f64::EPSILON);
    assert_eq!(column.child1(), &part("topLeft"));
    assert_eq!(column.child2(), &part("bottomLeft"));
    assert_eq!(column.parent(), Some(root.id()));

    let top_left = layout.find_part("topLeft").unwrap();
    assert_eq!(top_left.parent(), Some(column.id()));
    assert_eq!(layout.find_part("main").unwrap().parent(), Some(root.id()));

    let ids: Vec<&str> = layout.parts().iter().map(|part| part.id()).collect();
    assert_eq!(ids, ["topLeft", "bottomLeft", "main"]);
}

#[test]
fn duplicate_part_ids_are_rejected_after_any_docking() {
    let layout = left_column_layout();
    for id in ["main", "topLeft", "bottomLeft"] {
        assert_eq!(
            layout
                .add_part(id, &ReferencePart::new(Align::Right))
                .unwrap_err(),
            PartsLayoutError::DuplicatePart(id.to_string())
        );
    }
}

// ============================================================================
// Part removal
// ============================================================================

#[test]
fn removing_active_part_activates_its_neighbour() {
    let layout = left_column_layout().activate_part("topLeft").unwrap();

    let layout = layout.remove_part("topLeft").unwrap();
    assert_eq!(layout.active_part_id(), "bottomLeft");

    let layout = layout.remove_part("bottomLeft").unwrap();
    assert_eq!(layout.active_part_id(), "main");
    assert_eq!(layout.root(), &part("main"));
}

#[test]
fn last_part_is_never_removed() {
    let layout = new_layout().add_view("main", "view.1", None).unwrap();
    let after = layout.remove_part("main").unwrap();

    assert_eq!(after, layout);
    let fixed = SerializeOptions::new().with_uuid("stamp");
    assert_eq!(after.serialize(&fixed), layout.serialize(&fixed));
}

#[test]
fn removing_middle_of_stack_keeps_outer_ratio() {
    // x over (y over z)
    let layout = new_layout()
        .add_part(
            "y",
            &ReferencePart::new(Align::Bottom)
                .relative_to("main")
                .with_ratio(0.7),
        )
        .unwrap()
        .add_part(
            "z",
            &ReferencePart::new(Align::Bottom)
                .relative_to("y")
                .with_ratio(0.4),
        )
        .unwrap();
    let outer = node(&layout, layout.root());
    let outer_id = outer.id();
    assert!((outer.ratio() - 0.3).abs() < 1e-9);

    let layout = layout.remove_part("y").unwrap();
    let outer = node(&layout, layout.root());
    assert_eq!(outer.id(), outer_id);
    assert!((outer.ratio() - 0.3).abs() < 1e-9);
    assert_eq!(outer.child1(), &part("main"));
    assert_eq!(outer.child2(), &part("z"));
    assert_eq!(layout.find_part("z").unwrap().parent(), Some(outer_id));
}

#[test]
fn removing_middle_of_stack_keeps_ratio_of_remaining_split() {
    // (main over y) over z
    let layout = new_layout()
        .add_part(
            "y",
            &ReferencePart::new(Align::Bottom)
                .relative_to("main")
                .with_ratio(0.5),
        )
        .unwrap()
        .add_part("z", &ReferencePart::new(Align::Bottom).with_ratio(0.2))
        .unwrap();
    let root_id = layout.root().as_node().unwrap();

    let layout = layout.remove_part("y").unwrap();
    let root = node(&layout, layout.root());
    assert_eq!(root.id(), root_id);
    assert!((root.ratio() - 0.8).abs() < 1e-9);
    assert_eq!(root.child1(), &part("main"));
    assert_eq!(root.child2(), &part("z"));
}

// ============================================================================
// Views
// ============================================================================

#[test]
fn view_activation_follows_activation_instants() {
    let history = Arc::new(ActivationHistory::new());
    let mut layout = PartsLayout::new(history.clone());
    for view_id in ["1", "5", "2", "4", "3"] {
        layout = layout.add_view("main", view_id, None).unwrap();
    }
    history.record_all(["3", "5", "2", "4", "1"]);

    let layout = layout.activate_view("1").unwrap();
    let options = RemoveViewOptions::default();

    let layout = layout.remove_view("1", options).unwrap();
    assert_eq!(layout.find_part("main").unwrap().active_view_id(), Some("4"));

    let layout = layout.remove_view("4", options).unwrap();
    assert_eq!(layout.find_part("main").unwrap().active_view_id(), Some("2"));

    let layout = layout.remove_view("2", options).unwrap();
    assert_eq!(layout.find_part("main").unwrap().active_view_id(), Some("5"));

    let layout = layout.remove_view("5", options).unwrap();
    assert_eq!(layout.find_part("main").unwrap().active_view_id(), Some("3"));
}

#[test]
fn part_disappears_with_its_last_view() {
    let layout = left_column_layout()
        .add_view("topLeft", "a", None)
        .unwrap()
        .add_view("topLeft", "b", None)
        .unwrap();

    let layout = layout
        .remove_view("a", RemoveViewOptions::default())
        .unwrap();
    assert!(layout.find_part("topLeft").is_some());

    let layout = layout
        .remove_view("b", RemoveViewOptions::default())
        .unwrap();
    assert!(layout.find_part("topLeft").is_none());
    assert!(layout.find_part_by_view_id("b").is_none());

    // bottomLeft took over the whole left column
    let root = node(&layout, layout.root());
    assert_eq!(root.child1(), &part("bottomLeft"));
}

#[test]
fn dragging_tab_between_parts() {
    let layout = left_column_layout()
        .add_view("main", "editor.1", None)
        .unwrap()
        .add_view("main", "editor.2", None)
        .unwrap()
        .add_view("bottomLeft", "outline", None)
        .unwrap();

    let layout = layout.move_view("editor.2", "bottomLeft", Some(0)).unwrap();
    assert_eq!(
        layout.find_part("bottomLeft").unwrap().view_ids(),
        ["editor.2", "outline"]
    );
    assert_eq!(layout.find_part("main").unwrap().view_ids(), ["editor.1"]);
    assert_eq!(layout.active_part_id(), "bottomLeft");
    assert_eq!(
        layout.find_part_by_view_id("editor.2").unwrap().id(),
        "bottomLeft"
    );

    let layout = layout.move_view("outline", "main", None).unwrap();
    assert!(layout.find_part("bottomLeft").is_some());
    assert_eq!(layout.view_ids(), ["editor.2", "editor.1", "outline"]);
}

#[test]
fn adjacent_activation_is_positional() {
    let history = Arc::new(ActivationHistory::new());
    let layout = PartsLayout::new(history.clone())
        .add_view("main", "a", None)
        .unwrap()
        .add_view("main", "b", None)
        .unwrap()
        .add_view("main", "c", None)
        .unwrap();
    // Recency would pick "a"; adjacency ignores it.
    history.record_all(["b", "c", "a"]);

    let layout = layout.activate_adjacent_view("b").unwrap();
    assert_eq!(layout.find_part("main").unwrap().active_view_id(), Some("c"));
}

#[test]
fn unknown_ids_are_reported() {
    let layout = left_column_layout();

    assert_eq!(
        layout.add_view("nope", "a", None).unwrap_err(),
        PartsLayoutError::PartNotFound("nope".to_string())
    );
    assert_eq!(
        layout.activate_view("nope").unwrap_err(),
        PartsLayoutError::ViewNotFound("nope".to_string())
    );
    assert_eq!(
        layout
            .add_part("x", &ReferencePart::new(Align::Top).relative_to("nope"))
            .unwrap_err(),
        PartsLayoutError::ElementNotFound("nope".to_string())
    );
    assert!(layout.require_part("nope").is_err());
    assert!(layout.require_part_by_view_id("nope").is_err());
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn clear_uses_host_root_identity() {
    let history = Arc::new(ActivationHistory::with_root_part_id("editor-area"));
    let layout = PartsLayout::new(history)
        .add_part("left", &ReferencePart::new(Align::Left))
        .unwrap()
        .add_view("left", "a", None)
        .unwrap()
        .clear();

    assert_eq!(layout.root(), &part("editor-area"));
    assert_eq!(layout.active_part_id(), "editor-area");
    assert!(layout.serialize(&SerializeOptions::new()).unwrap().is_none());
}
