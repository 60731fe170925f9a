// Read-only after load:
// no per-course mutation
// reload replaces the whole table or nothing

use std::collections::BTreeMap;
use std::io::Read;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::catalog::course::Course;
use crate::catalog::loader::{parse_courses, CatalogError, ResourceLocator, DEFAULT_RESOURCE_NAME};
use crate::types::identifiers::{CatalogVersion, CourseId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The table was replaced with `courses` entries.
    Loaded { courses: usize },
    /// The resource hashes to the version already held; nothing changed.
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    locator: ResourceLocator,
    courses: BTreeMap<CourseId, Course>,
    version: Option<CatalogVersion>,
    loaded_at: Option<DateTime<Utc>>, // informational only
}

impl CatalogStore {
    /// An empty store that resolves resource names through `locator`.
    pub fn new(locator: ResourceLocator) -> Self {
        Self {
            locator,
            ..Self::default()
        }
    }

    /// Store populated from the catalog compiled into the crate.
    pub fn bundled() -> Self {
        let mut store = Self::new(ResourceLocator::Bundled);
        store.load(DEFAULT_RESOURCE_NAME);
        store
    }

    /// Store holding the catalog in `json`.
    ///
    /// Its locator is [`ResourceLocator::Inline`], so a later [`load`](Self::load)
    /// finds nothing and empties the store. Use [`with_locator`](Self::with_locator)
    /// to make it reloadable from elsewhere.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let mut store = Self::new(ResourceLocator::Inline);
        store.ingest(json.as_bytes())?;
        Ok(store)
    }

    /// Like [`from_json_str`](Self::from_json_str), reading the catalog from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, CatalogError> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        let mut store = Self::new(ResourceLocator::Inline);
        store.ingest(&raw)?;
        Ok(store)
    }

    /// Replace the locator used by later loads. Contents are kept.
    pub fn with_locator(mut self, locator: ResourceLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Load `resource_name`, degrading to an empty catalog on failure.
    ///
    /// Failures are logged, never returned. Returns whether the catalog holds
    /// any courses afterwards.
    pub fn load(&mut self, resource_name: &str) -> bool {
        match self.try_load(resource_name) {
            Ok(LoadOutcome::Loaded { courses }) => {
                info!(
                    resource = resource_name,
                    courses,
                    version = self.version.as_ref().map(CatalogVersion::as_str),
                    "loaded course catalog"
                );
            }
            Ok(LoadOutcome::Unchanged) => {
                debug!(resource = resource_name, "course catalog unchanged, skipping reload");
            }
            Err(err) => {
                warn!(resource = resource_name, error = %err, "failed to load course catalog");
                self.clear();
            }
        }
        !self.is_empty()
    }

    /// Load `resource_name`, surfacing the error.
    ///
    /// On failure the current contents are left untouched.
    pub fn try_load(&mut self, resource_name: &str) -> Result<LoadOutcome, CatalogError> {
        let raw = self.locator.read(resource_name)?;
        self.ingest(&raw)
    }

    fn ingest(&mut self, raw: &[u8]) -> Result<LoadOutcome, CatalogError> {
        let version = CatalogVersion::from_content(raw);
        if self.version.as_ref() == Some(&version) {
            return Ok(LoadOutcome::Unchanged);
        }

        let courses = parse_courses(raw)?;
        let count = courses.len();

        self.courses = courses;
        self.version = Some(version);
        self.loaded_at = Some(Utc::now());

        Ok(LoadOutcome::Loaded { courses: count })
    }

    fn clear(&mut self) {
        self.courses.clear();
        self.version = None;
        self.loaded_at = None;
    }

    /// All course identifiers in ascending lexicographic order.
    pub fn sorted_keys(&self) -> Vec<CourseId> {
        // BTreeMap iterates in key order
        self.courses.keys().cloned().collect()
    }

    /// Short description of `id`, or `""` when the course or attribute is missing.
    pub fn describe(&self, id: &str) -> &str {
        self.courses.get(id).map(Course::description).unwrap_or("")
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn version(&self) -> Option<&CatalogVersion> {
        self.version.as_ref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn locator(&self) -> &ResourceLocator {
        &self.locator
    }
}
