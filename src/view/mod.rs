//! Framework-free presentation model: row view-models, user events, and a
//! plain-text rendering of the screen.

pub mod render;
pub mod row;

pub use render::{render, TITLE};
pub use row::{CourseRow, Event};

use tracing::debug;

use crate::catalog::CatalogStore;
use crate::selection::SelectionController;

/// Screen state: the loaded catalog and the user's selection.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    store: CatalogStore,
    controller: SelectionController,
}

impl CatalogView {
    pub fn new(store: CatalogStore, controller: SelectionController) -> Self {
        Self { store, controller }
    }

    /// Rows currently on screen, in display order.
    pub fn rows(&self) -> Vec<CourseRow> {
        row::rows(&self.store, &self.controller)
    }

    /// Apply a user event. Returns `false` when a tapped course is not on
    /// screen; the selection is left unchanged in that case.
    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::TapRow(id) => {
                if !self.is_visible(id.as_str()) {
                    debug!(course = %id, "ignoring tap on a course that is not on screen");
                    return false;
                }
                self.controller.toggle_selection(id);
            }
            Event::SetShowOnlySelected(flag) => self.controller.set_filter(flag),
        }
        true
    }

    /// Whether `id` currently has a row: it is in the catalog and not hidden
    /// by the show-only-selected filter.
    pub fn is_visible(&self, id: &str) -> bool {
        self.store.contains(id)
            && (!self.controller.show_only_selected() || self.controller.is_selected(id))
    }

    pub fn render(&self) -> String {
        render(&self.rows(), self.controller.show_only_selected())
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CatalogStore {
        &mut self.store
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }
}
