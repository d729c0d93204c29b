//! Configuration provider: the seam the scheduler depends on.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::collection::ScheduleCollection;
use crate::core::error::ConfigError;
use crate::core::normalize::build_section;
use crate::core::settings::ScheduleSection;

/// Opaque staleness token reported by a store adapter.
///
/// How the token is computed (write counter, content fingerprint, mtime) is
/// the adapter's choice; the provider only compares tokens for equality.
pub type StoreVersion = u64;

/// Backing-store adapter: the pluggable seam beneath the provider.
///
/// A new storage backend (file, database, remote config service) implements
/// this trait only; normalization, caching, and staleness comparison live in
/// [`ScheduleProvider`].
pub trait ScheduleStore: Send + Sync {
    /// Read the store's schedule collection, in declaration order.
    ///
    /// # Errors
    ///
    /// [`ConfigError::SectionMissing`] when the store has no schedule
    /// section; [`ConfigError::Store`] when the section cannot be read or
    /// parsed.
    fn load(&self) -> Result<ScheduleCollection, ConfigError>;

    /// Current staleness token for the store contents.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Store`] when the store cannot be inspected.
    fn version(&self) -> Result<StoreVersion, ConfigError>;

    /// Remove one schedule definition. Deleting an absent name is a no-op.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Unsupported`] for read-only adapters;
    /// [`ConfigError::Store`] when the write fails.
    fn delete(&self, name: &str) -> Result<(), ConfigError>;
}

impl ScheduleStore for Box<dyn ScheduleStore> {
    fn load(&self) -> Result<ScheduleCollection, ConfigError> {
        (**self).load()
    }

    fn version(&self) -> Result<StoreVersion, ConfigError> {
        (**self).version()
    }

    fn delete(&self, name: &str) -> Result<(), ConfigError> {
        (**self).delete(name)
    }
}

/// Cached result of the last successful load.
struct CachedSection {
    version: StoreVersion,
    section: Arc<ScheduleSection>,
}

/// Provider of normalized schedule settings with reload-on-demand.
///
/// Owns a store adapter and a snapshot cache. Uninitialized until the first
/// successful [`get_configurations`](Self::get_configurations); loaded and
/// reusable for the process lifetime after that. Every snapshot is an
/// independently owned `Arc<ScheduleSection>`, so concurrent callers holding
/// different snapshots never share mutable state.
pub struct ScheduleProvider<S> {
    store: S,
    cache: RwLock<Option<CachedSection>>,
}

impl<S> std::fmt::Debug for ScheduleProvider<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleProvider").finish_non_exhaustive()
    }
}

impl<S: ScheduleStore> ScheduleProvider<S> {
    /// Create a provider over a store adapter. No load happens here.
    pub const fn new(store: S) -> Self {
        Self {
            store,
            cache: RwLock::new(None),
        }
    }

    /// Current set of schedule settings.
    ///
    /// With `refresh` false, a previously loaded snapshot is returned as-is.
    /// With `refresh` true (or on the first call) the backing store is
    /// re-read: version first, then the collection — the load never trusts
    /// an earlier staleness answer, since the store may change in between.
    ///
    /// # Errors
    ///
    /// Store errors propagate unmodified; there is no empty-section
    /// fallback, because running with no schedules when schedules were
    /// expected is worse than failing the load.
    pub fn get_configurations(&self, refresh: bool) -> Result<Arc<ScheduleSection>, ConfigError> {
        if !refresh {
            if let Some(cached) = self.cache.read().as_ref() {
                return Ok(Arc::clone(&cached.section));
            }
        }

        let version = self.store.version()?;
        let collection = self.store.load()?;
        let section = Arc::new(build_section(&collection));
        tracing::info!(
            snapshot_id = %section.id(),
            schedules = section.len(),
            version,
            refresh,
            "loaded schedule section"
        );
        *self.cache.write() = Some(CachedSection {
            version,
            section: Arc::clone(&section),
        });
        Ok(section)
    }

    /// Whether the backing store has changed since the last load.
    ///
    /// Does not reload. A provider that has never loaded reports stale, so
    /// pollers converge on a first load.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Store`] when the store cannot be inspected.
    pub fn schedules_are_stale(&self) -> Result<bool, ConfigError> {
        let current = self.store.version()?;
        let stale = self
            .cache
            .read()
            .as_ref()
            .map_or(true, |cached| cached.version != current);
        if stale {
            tracing::debug!(version = current, "schedule section is stale");
        }
        Ok(stale)
    }

    /// Remove one schedule definition from the backing store.
    ///
    /// Idempotent by the adapter contract: deleting an absent schedule is
    /// not an error. The cached snapshot is left untouched; the store's
    /// version changes instead, and the next staleness poll picks it up.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Unsupported`] for read-only adapters;
    /// [`ConfigError::Store`] when the write fails.
    pub fn delete_schedule(&self, name: &str) -> Result<(), ConfigError> {
        self.store.delete(name)?;
        tracing::debug!(schedule = name, "deleted schedule definition");
        Ok(())
    }

    /// Access the underlying store adapter.
    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::ScheduleRecord;
    use crate::infra::store::memory::InMemoryStore;

    fn record(name: &str, time_of_day: &str) -> ScheduleRecord {
        ScheduleRecord {
            name: name.into(),
            schedule_type: "calendar".into(),
            enabled: "true".into(),
            days_of_month: "*".into(),
            time_of_day: time_of_day.into(),
            ..ScheduleRecord::default()
        }
    }

    fn store_with(records: &[ScheduleRecord]) -> InMemoryStore {
        let store = InMemoryStore::new();
        let mut collection = ScheduleCollection::new();
        for r in records {
            collection.add(r.clone()).unwrap();
        }
        store.set_collection(collection);
        store
    }

    #[test]
    fn test_first_load_reads_store() {
        let provider = ScheduleProvider::new(store_with(&[record("a", "01:00")]));
        let section = provider.get_configurations(false).unwrap();
        assert_eq!(section.len(), 1);
        assert_eq!(section.get(0).unwrap().name(), "a");
    }

    #[test]
    fn test_cached_snapshot_without_refresh() {
        let provider = ScheduleProvider::new(store_with(&[record("a", "01:00")]));
        let first = provider.get_configurations(false).unwrap();

        // Store changes, but without refresh the cached snapshot is served.
        let mut collection = ScheduleCollection::new();
        collection.add(record("b", "02:00")).unwrap();
        provider.store().set_collection(collection);

        let second = provider.get_configurations(false).unwrap();
        assert_eq!(first.id(), second.id());
        assert_eq!(second.get(0).unwrap().name(), "a");
    }

    #[test]
    fn test_refresh_rereads_store() {
        let provider = ScheduleProvider::new(store_with(&[record("a", "01:00")]));
        provider.get_configurations(false).unwrap();

        let mut collection = ScheduleCollection::new();
        collection.add(record("b", "02:00")).unwrap();
        provider.store().set_collection(collection);

        let fresh = provider.get_configurations(true).unwrap();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh.get(0).unwrap().name(), "b");
    }

    #[test]
    fn test_snapshot_isolation_across_refresh() {
        let provider = ScheduleProvider::new(store_with(&[record("a", "01:00")]));
        let old = provider.get_configurations(false).unwrap();

        let mut collection = ScheduleCollection::new();
        collection.add(record("b", "02:00")).unwrap();
        provider.store().set_collection(collection);
        provider.get_configurations(true).unwrap();

        // The old snapshot still holds the original values.
        assert_eq!(old.len(), 1);
        assert_eq!(old.get(0).unwrap().name(), "a");
        assert_eq!(old.get(0).unwrap().get("timeofday"), Some("01:00"));
    }

    #[test]
    fn test_staleness_lifecycle() {
        let provider = ScheduleProvider::new(store_with(&[record("a", "01:00")]));

        // Never loaded: stale.
        assert!(provider.schedules_are_stale().unwrap());

        provider.get_configurations(false).unwrap();
        assert!(!provider.schedules_are_stale().unwrap());

        let mut collection = ScheduleCollection::new();
        collection.add(record("b", "02:00")).unwrap();
        provider.store().set_collection(collection);
        assert!(provider.schedules_are_stale().unwrap());

        provider.get_configurations(true).unwrap();
        assert!(!provider.schedules_are_stale().unwrap());
    }

    #[test]
    fn test_missing_section_propagates() {
        let store = InMemoryStore::new();
        store.clear_section();
        let provider = ScheduleProvider::new(store);

        let err = provider.get_configurations(false).unwrap_err();
        assert!(matches!(err, ConfigError::SectionMissing(_)));
    }

    #[test]
    fn test_delete_is_idempotent_through_provider() {
        let provider = ScheduleProvider::new(store_with(&[record("a", "01:00")]));
        provider.delete_schedule("a").unwrap();
        provider.delete_schedule("a").unwrap();

        let section = provider.get_configurations(true).unwrap();
        assert!(section.is_empty());
    }

    #[test]
    fn test_delete_marks_store_stale() {
        let provider = ScheduleProvider::new(store_with(&[record("a", "01:00")]));
        provider.get_configurations(false).unwrap();
        assert!(!provider.schedules_are_stale().unwrap());

        provider.delete_schedule("a").unwrap();
        assert!(provider.schedules_are_stale().unwrap());
    }
}
