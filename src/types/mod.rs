pub mod identifiers;

pub use identifiers::{CatalogVersion, CourseId};
