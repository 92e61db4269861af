//! Text rendering of layouts and layout diffs.

use workbench_core::parts::{ElementId, LayoutDiff, Part, PartsLayout, TreeElement};

/// Renders the layout tree, one element per line.
///
/// ```text
/// node 6f1c… row 0.25
/// ├── part left []
/// └── part main (active) [*view.1, view.2]
/// ```
pub fn render_tree(layout: &PartsLayout) -> String {
    let mut lines = Vec::new();
    render_element(layout, layout.root(), "", "", &mut lines);
    lines.join("\n")
}

fn render_element(
    layout: &PartsLayout,
    id: &ElementId,
    lead: &str,
    child_lead: &str,
    lines: &mut Vec<String>,
) {
    match layout.tree().element(id) {
        Some(TreeElement::Part(part)) => {
            lines.push(format!("{lead}{}", describe_part(layout, part)));
        }
        Some(TreeElement::Node(node)) => {
            lines.push(format!(
                "{lead}node {} {} {:.2}",
                node.id(),
                node.direction(),
                node.ratio()
            ));
            render_element(
                layout,
                node.child1(),
                &format!("{child_lead}├── "),
                &format!("{child_lead}│   "),
                lines,
            );
            render_element(
                layout,
                node.child2(),
                &format!("{child_lead}└── "),
                &format!("{child_lead}    "),
                lines,
            );
        }
        None => lines.push(format!("{lead}<missing {id}>")),
    }
}

fn describe_part(layout: &PartsLayout, part: &Part) -> String {
    let marker = if part.id() == layout.active_part_id() {
        " (active)"
    } else {
        ""
    };
    let views: Vec<String> = part
        .view_ids()
        .iter()
        .map(|view_id| {
            if part.active_view_id() == Some(view_id.as_str()) {
                format!("*{view_id}")
            } else {
                view_id.clone()
            }
        })
        .collect();
    format!("part {}{marker} [{}]", part.id(), views.join(", "))
}

/// Renders a diff as one change per line.
pub fn render_diff(diff: &LayoutDiff) -> String {
    if diff.is_empty() {
        return "no differences".to_string();
    }

    let mut lines = Vec::new();
    lines.extend(diff.added_parts.iter().map(|id| format!("+ part {id}")));
    lines.extend(diff.removed_parts.iter().map(|id| format!("- part {id}")));
    lines.extend(diff.added_views.iter().map(|id| format!("+ view {id}")));
    lines.extend(diff.removed_views.iter().map(|id| format!("- view {id}")));
    lines.extend(diff.moved_views.iter().map(|moved| {
        format!(
            "~ view {}: {} -> {}",
            moved.view_id, moved.from_part_id, moved.to_part_id
        )
    }));
    if diff.active_part_changed {
        lines.push("* active part changed".to_string());
    }
    lines.extend(
        diff.active_view_changed
            .iter()
            .map(|id| format!("* active view changed in {id}")),
    );
    lines.join("\n")
}
