use serde::Serialize;
use sha2::{Digest, Sha256};
use std::borrow::Borrow;
use std::fmt;

/// Course identifier, e.g. a course number such as `CS101`.
///
/// Ordering is plain lexicographic string ordering, which is also the
/// display order of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        CourseId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseId {
    fn from(s: &str) -> Self {
        CourseId(s.to_string())
    }
}

impl From<String> for CourseId {
    fn from(s: String) -> Self {
        CourseId(s)
    }
}

// Lets `BTreeMap<CourseId, _>` and `BTreeSet<CourseId>` be queried with `&str`.
impl Borrow<str> for CourseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Content hash of a loaded catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CatalogVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
