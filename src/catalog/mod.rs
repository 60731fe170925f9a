pub mod course;
pub mod loader;
pub mod store;

pub use crate::types::identifiers::{CatalogVersion, CourseId};
pub use course::Course;
pub use loader::{CatalogError, ResourceLocator, BUNDLED_CATALOG, DEFAULT_RESOURCE_NAME};
pub use store::{CatalogStore, LoadOutcome};
