//! Structural comparison of two layouts
//!
//! Hosts use a [`LayoutDiff`] to decide which part containers and view tabs
//! need to be created, torn down or re-parented after an operation.

use std::collections::HashMap;

use super::layout::PartsLayout;

/// A view that changed its part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedView {
    /// The moved view.
    pub view_id: String,
    /// Part holding the view before.
    pub from_part_id: String,
    /// Part holding the view after.
    pub to_part_id: String,
}

/// Differences between two layouts.
///
/// Ids are listed in the tree order of the layout they were found in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutDiff {
    /// Parts only present in the newer layout.
    pub added_parts: Vec<String>,
    /// Parts only present in the older layout.
    pub removed_parts: Vec<String>,
    /// Views only present in the newer layout.
    pub added_views: Vec<String>,
    /// Views only present in the older layout.
    pub removed_views: Vec<String>,
    /// Views present in both layouts but held by different parts.
    pub moved_views: Vec<MovedView>,
    /// Whether the active part differs.
    pub active_part_changed: bool,
    /// Parts whose active view differs (parts present in both layouts only).
    pub active_view_changed: Vec<String>,
}

impl LayoutDiff {
    /// Compares `old` against `new`.
    #[must_use]
    pub fn between(old: &PartsLayout, new: &PartsLayout) -> Self {
        let old_owners = view_owners(old);
        let new_owners = view_owners(new);

        let added_parts = new
            .parts()
            .iter()
            .filter(|part| old.find_part(part.id()).is_none())
            .map(|part| part.id().to_string())
            .collect();
        let removed_parts = old
            .parts()
            .iter()
            .filter(|part| new.find_part(part.id()).is_none())
            .map(|part| part.id().to_string())
            .collect();

        let added_views = new
            .view_ids()
            .into_iter()
            .filter(|view_id| !old_owners.contains_key(view_id))
            .map(str::to_string)
            .collect();
        let removed_views = old
            .view_ids()
            .into_iter()
            .filter(|view_id| !new_owners.contains_key(view_id))
            .map(str::to_string)
            .collect();

        let moved_views = new
            .view_ids()
            .into_iter()
            .filter_map(|view_id| {
                let from = old_owners.get(view_id)?;
                let to = new_owners.get(view_id)?;
                (from != to).then(|| MovedView {
                    view_id: view_id.to_string(),
                    from_part_id: (*from).to_string(),
                    to_part_id: (*to).to_string(),
                })
            })
            .collect();

        let active_view_changed = new
            .parts()
            .iter()
            .filter_map(|part| {
                let previous = old.find_part(part.id())?;
                (previous.active_view_id() != part.active_view_id())
                    .then(|| part.id().to_string())
            })
            .collect();

        let diff = Self {
            added_parts,
            removed_parts,
            added_views,
            removed_views,
            moved_views,
            active_part_changed: old.active_part_id() != new.active_part_id(),
            active_view_changed,
        };
        tracing::trace!(?diff, "Computed layout diff");
        diff
    }

    /// Returns true if both layouts hold the same parts and views in the
    /// same places with the same activation state.
    ///
    /// Split ratios and tree shape are not compared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added_parts.is_empty()
            && self.removed_parts.is_empty()
            && self.added_views.is_empty()
            && self.removed_views.is_empty()
            && self.moved_views.is_empty()
            && !self.active_part_changed
            && self.active_view_changed.is_empty()
    }
}

fn view_owners(layout: &PartsLayout) -> HashMap<&str, &str> {
    layout
        .parts()
        .into_iter()
        .flat_map(|part| {
            part.view_ids()
                .iter()
                .map(move |view_id| (view_id.as_str(), part.id()))
        })
        .collect()
}
