//! Normalized schedule settings and per-load sections.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Normalized, schema-agnostic settings for one schedule.
///
/// A case-insensitive mapping from canonical field name to value, containing
/// only the fields that were present and non-empty on the source record.
/// Immutable after construction; only the normalizer builds instances, which
/// is why the type serializes (for dumping and debugging) but never
/// deserializes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSettings {
    // Canonical schema keys in declaration order. Nine fields at most, so
    // lookup is a linear scan rather than a map allocation.
    entries: Vec<(&'static str, String)>,
}

impl ScheduleSettings {
    /// Build settings from already-filtered `(key, value)` pairs.
    ///
    /// Callers (the normalizer) guarantee the pairs are non-empty values
    /// keyed by canonical schema names, `name` included.
    #[must_use]
    pub(crate) const fn from_entries(entries: Vec<(&'static str, String)>) -> Self {
        Self { entries }
    }

    /// Look up a field value; the key match is case-insensitive.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Whether a field is present, matching the key case-insensitively.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The schedule name. Always present: records without a name never
    /// produce settings.
    #[must_use]
    pub fn name(&self) -> &str {
        self.get("name").unwrap_or_default()
    }

    /// Iterate the canonical field names, in schema declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Iterate `(canonical name, value)` pairs in schema declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of populated fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ScheduleSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The result of one load: an ordered sequence of [`ScheduleSettings`].
///
/// Order matches the backing store's declaration order. Every load produces
/// a fresh section with its own snapshot id; a section is never mutated, so
/// callers holding an older snapshot are unaffected by later refreshes.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSection {
    snapshot_id: Uuid,
    settings: Vec<ScheduleSettings>,
}

impl ScheduleSection {
    /// Assemble a section from normalized settings.
    #[must_use]
    pub fn new(settings: Vec<ScheduleSettings>) -> Self {
        Self {
            snapshot_id: Uuid::new_v4(),
            settings,
        }
    }

    /// Snapshot identifier, unique per load. Used for log correlation.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.snapshot_id
    }

    /// Settings at `index`, in store declaration order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ScheduleSettings> {
        self.settings.get(index)
    }

    /// Settings for the schedule named `name` (exact match on the value).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ScheduleSettings> {
        self.settings.iter().find(|s| s.name() == name)
    }

    /// Iterate the settings in store declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleSettings> {
        self.settings.iter()
    }

    /// Number of schedules in this snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Whether the snapshot holds no schedules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScheduleSection {
    type Item = &'a ScheduleSettings;
    type IntoIter = std::slice::Iter<'a, ScheduleSettings>;

    fn into_iter(self) -> Self::IntoIter {
        self.settings.iter()
    }
}
