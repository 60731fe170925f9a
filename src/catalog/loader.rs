use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::course::Course;
use crate::types::identifiers::CourseId;

/// Name of the catalog resource shipped with the crate.
pub const DEFAULT_RESOURCE_NAME: &str = "CSCourses";

/// Extension appended to resource names when resolving them on disk.
pub const DEFAULT_EXTENSION: &str = "json";

/// The catalog compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../resources/CSCourses.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog resource not found: {name} (looked for {})", path.display())]
    NotFound { name: String, path: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog is not a mapping of course id to string attributes: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Resolves a resource name to its raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResourceLocator {
    /// Only [`DEFAULT_RESOURCE_NAME`] resolves, to [`BUNDLED_CATALOG`].
    #[default]
    Bundled,
    /// `root/<name>.<extension>`
    Directory { root: PathBuf, extension: String },
    /// Catalog supplied as text by the caller; no name resolves.
    Inline,
}

impl ResourceLocator {
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        ResourceLocator::Directory {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Path a resource name maps to. Bundled and inline resources get a
    /// synthetic path used only in diagnostics.
    pub fn path_for(&self, name: &str) -> PathBuf {
        match self {
            ResourceLocator::Bundled => {
                Path::new("<bundled>").join(format!("{name}.{DEFAULT_EXTENSION}"))
            }
            ResourceLocator::Directory { root, extension } => {
                root.join(format!("{name}.{extension}"))
            }
            ResourceLocator::Inline => Path::new("<inline>").join(name),
        }
    }

    pub fn read(&self, name: &str) -> Result<Cow<'static, [u8]>, CatalogError> {
        match self {
            ResourceLocator::Bundled => {
                if name == DEFAULT_RESOURCE_NAME {
                    Ok(Cow::Borrowed(BUNDLED_CATALOG.as_bytes()))
                } else {
                    Err(self.not_found(name))
                }
            }
            ResourceLocator::Directory { .. } => {
                let path = self.path_for(name);
                if !path.is_file() {
                    return Err(self.not_found(name));
                }
                Ok(Cow::Owned(fs::read(&path)?))
            }
            ResourceLocator::Inline => Err(self.not_found(name)),
        }
    }

    fn not_found(&self, name: &str) -> CatalogError {
        CatalogError::NotFound {
            name: name.to_string(),
            path: self.path_for(name),
        }
    }
}

/// Parse raw catalog bytes.
///
/// The whole document must have the nested-mapping shape; a single
/// non-string attribute rejects the file rather than loading the rest.
pub fn parse_courses(raw: &[u8]) -> Result<BTreeMap<CourseId, Course>, CatalogError> {
    let table: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_slice(raw)?;

    Ok(table
        .into_iter()
        .map(|(id, attributes)| {
            let id = CourseId::new(id);
            let course = Course::from_attributes(id.clone(), attributes);
            (id, course)
        })
        .collect())
}
