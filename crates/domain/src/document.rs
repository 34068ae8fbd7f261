//! The document — every collection the server knows about.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Mapping of collection name to its ordered records.
///
/// This is the shape of the persisted JSON file. Collection names are kept
/// sorted so that successive snapshots of the same data are byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    collections: BTreeMap<String, Vec<Record>>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a collection by name.
    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&Vec<Record>> {
        self.collections.get(name)
    }

    /// Mutably borrow a collection by name.
    pub fn collection_mut(&mut self, name: &str) -> Option<&mut Vec<Record>> {
        self.collections.get_mut(name)
    }

    /// Insert or replace a whole collection.
    pub fn insert_collection(&mut self, name: impl Into<String>, records: Vec<Record>) {
        self.collections.insert(name.into(), records);
    }

    /// Names of all collections, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Number of collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Whether the document has no collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Total number of records across all collections.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<Record>)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Vec<Record>)>>(iter: T) -> Self {
        Self {
            collections: iter.into_iter().collect(),
        }
    }
}
