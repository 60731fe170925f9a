use std::path::PathBuf;

use crate::catalog::{ResourceLocator, DEFAULT_RESOURCE_NAME};

pub const RESOURCES_ENV: &str = "COURSE_CATALOG_RESOURCES";
pub const RESOURCE_ENV: &str = "COURSE_CATALOG_RESOURCE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding catalog resources; `None` means the bundled catalog.
    pub resources_dir: Option<PathBuf>,
    pub resource_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resources_dir: None,
            resource_name: DEFAULT_RESOURCE_NAME.into(),
        }
    }
}

impl Settings {
    pub fn locator(&self) -> ResourceLocator {
        match &self.resources_dir {
            Some(dir) => ResourceLocator::directory(dir.clone()),
            None => ResourceLocator::Bundled,
        }
    }

    /// Apply overrides from `lookup` on top of the defaults. Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty(RESOURCES_ENV) {
            settings.resources_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = non_empty(RESOURCE_ENV) {
            settings.resource_name = v.trim().to_string();
        }

        settings
    }
}

pub fn load_settings() -> Settings {
    Settings::from_lookup(|key| std::env::var(key).ok())
}
