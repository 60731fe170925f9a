use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::selection::SelectionController;
use crate::types::identifiers::CourseId;

/// Everything the rendering layer needs for one visible course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRow {
    pub course_number: CourseId,
    pub course_description: String,
    pub is_selected: bool,
}

/// The two interactions the screen offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TapRow(CourseId),
    SetShowOnlySelected(bool),
}

pub fn rows(store: &CatalogStore, controller: &SelectionController) -> Vec<CourseRow> {
    controller
        .visible_keys(&store.sorted_keys())
        .into_iter()
        .map(|id| CourseRow {
            course_description: store.describe(id.as_str()).to_string(),
            is_selected: controller.is_selected(id.as_str()),
            course_number: id,
        })
        .collect()
}
