//! Ordered client-side collection.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::RecordId;

use super::Record;

/// Ordered records of one entity type.
///
/// Insertion order is display order and no two records share a defined id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Collection<T> {
    records: Vec<Record<T>>,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a collection from a server listing.
    ///
    /// A repeated id keeps the position of its first occurrence and the
    /// value of its last.
    pub fn from_records(records: Vec<Record<T>>) -> Self {
        let mut collection = Self::new();
        for record in records {
            collection.upsert(record);
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<T>> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record<T>] {
        &self.records
    }

    /// Find a record by id.
    pub fn get(&self, id: RecordId) -> Option<&Record<T>> {
        self.records.iter().find(|r| r.id == Some(id))
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().filter_map(|r| r.id).collect()
    }

    /// Append a record, or replace the record that already carries its id.
    pub(crate) fn upsert(&mut self, record: Record<T>) {
        if let Some(id) = record.id
            && let Some(slot) = self.position(id)
        {
            self.records[slot] = record;
            return;
        }
        self.records.push(record);
    }

    /// Replace the record with the same id in place.
    ///
    /// Returns false and drops `record` when no such id is present.
    pub(crate) fn replace(&mut self, record: Record<T>) -> bool {
        let Some(slot) = record.id.and_then(|id| self.position(id)) else {
            return false;
        };
        self.records[slot] = record;
        true
    }

    pub(crate) fn remove(&mut self, id: RecordId) -> Option<Record<T>> {
        self.position(id).map(|slot| self.records.remove(slot))
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == Some(id))
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Record<T>>> for Collection<T> {
    fn from(records: Vec<Record<T>>) -> Self {
        Self::from_records(records)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a Record<T>;
    type IntoIter = std::slice::Iter<'a, Record<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = Record<T>;
    type IntoIter = std::vec::IntoIter<Record<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'de, T> Deserialize<'de> for Collection<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Record<T>>::deserialize(deserializer).map(Self::from_records)
    }
}
