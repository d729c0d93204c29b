//! Ordered, name-keyed container of schedule records.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::record::ScheduleRecord;

/// Ordered collection of [`ScheduleRecord`]s with unique names.
///
/// Supports map-like access by name and list-like access by position at the
/// same time. The record name is the sole identity key: `add` rejects a
/// second record with an existing name, and removal by name or by index is
/// idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScheduleRecord>", into = "Vec<ScheduleRecord>")]
pub struct ScheduleCollection {
    records: Vec<ScheduleRecord>,
}

impl ScheduleCollection {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, rejecting duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateName`] if a record with the same name
    /// is already present; the collection is unchanged in that case.
    pub fn add(&mut self, record: ScheduleRecord) -> Result<(), ConfigError> {
        if self.position(&record.name).is_some() {
            return Err(ConfigError::DuplicateName(record.name));
        }
        self.records.push(record);
        Ok(())
    }

    /// Look up a record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ScheduleRecord> {
        self.position(name).map(|i| &self.records[i])
    }

    /// Look up a record by position.
    #[must_use]
    pub fn get_at(&self, index: usize) -> Option<&ScheduleRecord> {
        self.records.get(index)
    }

    /// Replace the record at `index`, returning the previous record.
    ///
    /// Returns `None` (and stores nothing) when `index` is out of range.
    pub fn set_at(&mut self, index: usize, record: ScheduleRecord) -> Option<ScheduleRecord> {
        let slot = self.records.get_mut(index)?;
        Some(std::mem::replace(slot, record))
    }

    /// Remove a record by name; removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> Option<ScheduleRecord> {
        self.position(name).map(|i| self.records.remove(i))
    }

    /// Remove a record by position; an out-of-range index is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<ScheduleRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Empty the collection.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Position of the record with `name`, if present.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the records in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ScheduleCollection {
    type Item = &'a ScheduleRecord;
    type IntoIter = std::slice::Iter<'a, ScheduleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl TryFrom<Vec<ScheduleRecord>> for ScheduleCollection {
    type Error = ConfigError;

    fn try_from(records: Vec<ScheduleRecord>) -> Result<Self, Self::Error> {
        let mut collection = Self::new();
        for record in records {
            collection.add(record)?;
        }
        Ok(collection)
    }
}

impl From<ScheduleCollection> for Vec<ScheduleRecord> {
    fn from(collection: ScheduleCollection) -> Self {
        collection.records
    }
}
