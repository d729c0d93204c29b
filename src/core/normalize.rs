//! Settings normalizer: record-to-settings conversion.
//!
//! This is the layer that decouples the scheduler's consumption model from
//! the shape of the configuration schema. It walks the declared field schema
//! of a record, keeps the fields that carry a value, and emits a
//! case-insensitive settings map. New schedule types can introduce new
//! optional fields without touching the normalizer or any consumer.

use crate::core::collection::ScheduleCollection;
use crate::core::record::ScheduleRecord;
use crate::core::settings::{ScheduleSection, ScheduleSettings};

/// Normalize one record into settings.
///
/// Fields whose value is empty are excluded; an empty string and an absent
/// field are the same thing. Returns `None` when the record has no name —
/// such records never produce settings.
#[must_use]
pub fn normalize_record(record: &ScheduleRecord) -> Option<ScheduleSettings> {
    if record.name.is_empty() {
        return None;
    }
    let entries: Vec<(&'static str, String)> = record
        .fields()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, value.to_string()))
        .collect();
    Some(ScheduleSettings::from_entries(entries))
}

/// Normalize a whole collection into a fresh [`ScheduleSection`].
///
/// Records are processed in declaration order; the output preserves that
/// order. Records with an empty name are skipped without error.
#[must_use]
pub fn build_section(collection: &ScheduleCollection) -> ScheduleSection {
    let settings: Vec<ScheduleSettings> =
        collection.iter().filter_map(normalize_record).collect();
    let skipped = collection.len() - settings.len();
    if skipped > 0 {
        tracing::debug!(skipped, "skipped schedule records with empty names");
    }
    ScheduleSection::new(settings)
}
