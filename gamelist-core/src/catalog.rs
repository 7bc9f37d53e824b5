//! Destination collections for finished game records.

use std::collections::BTreeMap;

use crate::record::GameRecord;

/// Anything that can receive finished records from a listing load.
pub trait RecordSink {
    /// Offer a finished record. Returns `true` if it was accepted.
    fn insert(&mut self, record: GameRecord) -> bool;
}

/// An insert-only catalog of game records keyed by identity name.
///
/// The first record inserted under a name wins; later records with the
/// same name are rejected and left untouched.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: BTreeMap<String, GameRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its qualified name.
    pub fn get(&self, name: &str) -> Option<&GameRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.records.values()
    }

    /// Qualified names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn into_records(self) -> Vec<GameRecord> {
        self.records.into_values().collect()
    }
}

impl RecordSink for Catalog {
    fn insert(&mut self, record: GameRecord) -> bool {
        if self.records.contains_key(&record.name) {
            log::warn!("Duplicate game `{}' ignored", record.name);
            return false;
        }
        self.records.insert(record.name.clone(), record);
        true
    }
}

/// Keeps every record in arrival order, duplicates included.
impl RecordSink for Vec<GameRecord> {
    fn insert(&mut self, record: GameRecord) -> bool {
        self.push(record);
        true
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn insert(&mut self, record: GameRecord) -> bool {
        (**self).insert(record)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
