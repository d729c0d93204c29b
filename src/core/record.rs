//! Raw schedule records and their declared field schema.

use serde::{Deserialize, Serialize};

/// Accessor used by the declared field schema.
type FieldAccessor = fn(&ScheduleRecord) -> &str;

/// Declared field schema: every named field of a schedule record, in
/// declaration order, using the backing store's canonical field names.
///
/// This table replaces runtime introspection: the normalizer walks it
/// directly, so adding a field means adding one row here and one struct
/// field, with no consumer changes.
pub const FIELD_SCHEMA: &[(&str, FieldAccessor)] = &[
    ("name", |r| r.name.as_str()),
    ("type", |r| r.schedule_type.as_str()),
    ("enabled", |r| r.enabled.as_str()),
    ("dateRange", |r| r.date_range.as_str()),
    ("daysOfMonth", |r| r.days_of_month.as_str()),
    ("timeOfDay", |r| r.time_of_day.as_str()),
    ("task", |r| r.task.as_str()),
    ("timeRange", |r| r.time_range.as_str()),
    ("frequency", |r| r.frequency.as_str()),
];

/// One configured schedule as read from the backing store.
///
/// Every field is carried as a string; an empty string is equivalent to an
/// absent field. The record is a read-only projection of the store entry:
/// schedules are created, edited, and removed in the store, never through
/// this type. The normalizer passes values through without interpreting
/// them — `type`, `frequency`, and friends are the scheduler's business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleRecord {
    /// Unique schedule name; the identity key within a collection.
    pub name: String,
    /// Scheduling strategy selector (e.g. calendar-based vs. timer-based).
    #[serde(rename = "type")]
    pub schedule_type: String,
    /// String-encoded enabled flag.
    pub enabled: String,
    /// Optional bounding validity window.
    pub date_range: String,
    /// Which days of the month trigger the schedule.
    pub days_of_month: String,
    /// Time-of-day trigger.
    pub time_of_day: String,
    /// Optional identifier of the task/action to run.
    pub task: String,
    /// Optional time window, used by timer-style schedules.
    pub time_range: String,
    /// Optional repetition interval, used by timer-style schedules.
    pub frequency: String,
}

impl ScheduleRecord {
    /// Iterate every declared field as `(canonical name, value)`, in
    /// declaration order. Empty values are included; filtering is the
    /// normalizer's job.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FIELD_SCHEMA.iter().map(move |(key, get)| (*key, get(self)))
    }
}
