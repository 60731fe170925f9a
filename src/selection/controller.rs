use std::collections::BTreeSet;

use tracing::debug;

use crate::types::identifiers::CourseId;

/// Selection set plus the show-only-selected flag.
///
/// Every combination of the two is reachable from every other through
/// [`toggle_selection`](Self::toggle_selection) and
/// [`set_filter`](Self::set_filter); there is no terminal state and no
/// operation can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: BTreeSet<CourseId>,
    show_only_selected: bool,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id` if absent, remove it if present.
    ///
    /// Not checked against any catalog.
    pub fn toggle_selection(&mut self, id: impl Into<CourseId>) {
        let id = id.into();
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        debug!(selected = ?self.selected_ids(), "selection toggled");
    }

    pub fn set_filter(&mut self, show_only_selected: bool) {
        self.show_only_selected = show_only_selected;
        debug!(
            show_only_selected,
            selected = ?self.selected_ids(),
            "show-only-selected switched"
        );
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn show_only_selected(&self) -> bool {
        self.show_only_selected
    }

    /// Filter an already sorted key list.
    ///
    /// Input order is preserved, so sorted input yields sorted output.
    /// Recomputed on every call.
    pub fn visible_keys(&self, catalog_sorted_keys: &[CourseId]) -> Vec<CourseId> {
        if !self.show_only_selected {
            return catalog_sorted_keys.to_vec();
        }

        catalog_sorted_keys
            .iter()
            .filter(|id| self.selected.contains(*id))
            .cloned()
            .collect()
    }

    /// Selected identifiers in ascending order.
    pub fn selected(&self) -> impl Iterator<Item = &CourseId> {
        self.selected.iter()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    fn selected_ids(&self) -> Vec<&str> {
        self.selected.iter().map(CourseId::as_str).collect()
    }
}
