//! Read-only JSON file store backend.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::collection::ScheduleCollection;
use crate::core::error::ConfigError;
use crate::core::provider::{ScheduleStore, StoreVersion};

/// Default name of the schedule section inside the document.
pub const DEFAULT_SECTION: &str = "scheduling";

/// Shape of the schedule section inside the JSON document.
#[derive(Debug, Deserialize)]
struct SectionDocument {
    #[serde(default)]
    schedules: ScheduleCollection,
}

/// Store adapter over a hierarchical JSON document on disk.
///
/// Expects a document of the form:
///
/// ```json
/// {
///     "scheduling": {
///         "schedules": [
///             { "name": "nightly", "type": "calendar", "enabled": "true",
///               "daysOfMonth": "*", "timeOfDay": "02:00" }
///         ]
///     }
/// }
/// ```
///
/// The adapter is read-only: `delete` answers
/// [`ConfigError::Unsupported`]. Staleness tokens are a fingerprint of the
/// file bytes, so rewriting the file with identical contents does not flag
/// the section as stale.
pub struct JsonFileStore {
    path: PathBuf,
    section: String,
}

impl JsonFileStore {
    /// Create a store reading `path`, using the default section name.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            section: DEFAULT_SECTION.to_string(),
        }
    }

    /// Use a custom section name instead of [`DEFAULT_SECTION`].
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        fs::read(&self.path)
            .map_err(|e| ConfigError::Store(format!("read {}: {e}", self.path.display())))
    }

    fn fingerprint(bytes: &[u8]) -> StoreVersion {
        // Non-cryptographic on purpose: tokens are only compared for
        // equality within one process.
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        hasher.finish()
    }
}

impl ScheduleStore for JsonFileStore {
    fn load(&self) -> Result<ScheduleCollection, ConfigError> {
        let bytes = self.read_bytes()?;
        let mut document: serde_json::Map<String, serde_json::Value> =
            serde_json::from_slice(&bytes)
                .map_err(|e| ConfigError::Store(format!("parse {}: {e}", self.path.display())))?;
        let section_value = document
            .remove(&self.section)
            .ok_or_else(|| ConfigError::SectionMissing(self.section.clone()))?;
        let section: SectionDocument = serde_json::from_value(section_value)
            .map_err(|e| ConfigError::Store(format!("section `{}`: {e}", self.section)))?;
        Ok(section.schedules)
    }

    fn version(&self) -> Result<StoreVersion, ConfigError> {
        Ok(Self::fingerprint(&self.read_bytes()?))
    }

    fn delete(&self, _name: &str) -> Result<(), ConfigError> {
        Err(ConfigError::Unsupported("delete_schedule"))
    }
}
