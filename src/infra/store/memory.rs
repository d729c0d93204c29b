//! In-memory store backend.

use parking_lot::Mutex;

use crate::core::collection::ScheduleCollection;
use crate::core::error::ConfigError;
use crate::core::provider::{ScheduleStore, StoreVersion};

struct Inner {
    /// `None` models a store whose schedule section is absent.
    collection: Option<ScheduleCollection>,
    version: StoreVersion,
}

/// Simple in-memory store for development/testing.
///
/// Every mutation bumps the version counter, so staleness detection behaves
/// like a real store without any file or database behind it.
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    /// Create a store with an empty schedule section.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                collection: Some(ScheduleCollection::new()),
                version: 0,
            }),
        }
    }

    /// Replace the schedule section contents.
    pub fn set_collection(&self, collection: ScheduleCollection) {
        let mut inner = self.inner.lock();
        inner.collection = Some(collection);
        inner.version += 1;
    }

    /// Drop the schedule section entirely, simulating a store without one.
    pub fn clear_section(&self) {
        let mut inner = self.inner.lock();
        inner.collection = None;
        inner.version += 1;
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleStore for InMemoryStore {
    fn load(&self) -> Result<ScheduleCollection, ConfigError> {
        self.inner
            .lock()
            .collection
            .clone()
            .ok_or_else(|| ConfigError::SectionMissing("scheduling".into()))
    }

    fn version(&self) -> Result<StoreVersion, ConfigError> {
        Ok(self.inner.lock().version)
    }

    fn delete(&self, name: &str) -> Result<(), ConfigError> {
        let mut inner = self.inner.lock();
        let removed = inner
            .collection
            .as_mut()
            .and_then(|c| c.remove(name))
            .is_some();
        // Deleting an absent schedule is a no-op, not a version change.
        if removed {
            inner.version += 1;
        }
        Ok(())
    }
}
