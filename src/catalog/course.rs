use std::collections::BTreeMap;

use crate::types::identifiers::CourseId;

/// Attribute key carrying the one-line description shown next to a course.
pub const SHORT_DESCRIPTION: &str = "ShortDescription";

/// One catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub short_description: Option<String>,
}

impl Course {
    /// Project a raw attribute table onto the fixed record.
    ///
    /// Attributes other than `ShortDescription` are dropped; nothing reads them.
    pub fn from_attributes(id: CourseId, mut attributes: BTreeMap<String, String>) -> Self {
        Self {
            id,
            short_description: attributes.remove(SHORT_DESCRIPTION),
        }
    }

    pub fn description(&self) -> &str {
        self.short_description.as_deref().unwrap_or("")
    }
}
