//! In-memory collection store.
//!
//! The single owner of the live [`Document`]. Handlers reach it through
//! the [`CollectionStore`] port; writers hold the lock for the whole
//! read-modify-write so two mutations never interleave, and snapshots copy
//! the document under the read lock so they see a consistent state.

use std::future::Future;

use tokio::sync::RwLock;

use mockapi_domain::document::Document;
use mockapi_domain::error::{ConflictError, MockApiError, NotFoundError};
use mockapi_domain::id::RecordId;
use mockapi_domain::record::{self, ID_FIELD, Record};

use crate::mutation::MutationTracker;
use crate::ports::{CollectionStore, Snapshot};

/// Live document guarded by an async read/write lock.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: RwLock<Document>,
    mutations: MutationTracker,
}

impl InMemoryStore {
    /// Take ownership of a loaded document.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document: RwLock::new(document),
            mutations: MutationTracker::new(),
        }
    }

    /// Mutation tracker of this store.
    #[must_use]
    pub fn mutations(&self) -> &MutationTracker {
        &self.mutations
    }
}

fn collection_missing(collection: &str) -> MockApiError {
    NotFoundError::Collection(collection.to_string()).into()
}

fn position(records: &[Record], id: &RecordId) -> Option<usize> {
    records
        .iter()
        .position(|r| record::id_of(r).is_some_and(|value| id.matches(value)))
}

impl CollectionStore for InMemoryStore {
    fn names(&self) -> impl Future<Output = Vec<String>> + Send {
        async move {
            let document = self.document.read().await;
            document.names().map(str::to_string).collect()
        }
    }

    fn list(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<Record>, MockApiError>> + Send {
        async move {
            let document = self.document.read().await;
            document
                .collection(collection)
                .cloned()
                .ok_or_else(|| collection_missing(collection))
        }
    }

    fn get(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send {
        async move {
            let document = self.document.read().await;
            let records = document
                .collection(collection)
                .ok_or_else(|| collection_missing(collection))?;
            Ok(position(records, id).map(|index| records[index].clone()))
        }
    }

    fn insert(
        &self,
        collection: &str,
        mut record: Record,
    ) -> impl Future<Output = Result<Record, MockApiError>> + Send {
        async move {
            let mut document = self.document.write().await;
            let records = document
                .collection_mut(collection)
                .ok_or_else(|| collection_missing(collection))?;

            let requested = record::id_of(&record)
                .map(RecordId::from_value)
                .transpose()?;
            match requested {
                Some(id) => {
                    if position(records, &id).is_some() {
                        return Err(ConflictError::DuplicateId {
                            collection: collection.to_string(),
                            id: id.to_string(),
                        }
                        .into());
                    }
                }
                None => {
                    let id = RecordId::allocate(records.iter().filter_map(record::id_of));
                    record.insert(ID_FIELD.to_string(), id.to_value());
                }
            }

            records.push(record.clone());
            self.mutations.record();
            Ok(record)
        }
    }

    fn replace(
        &self,
        collection: &str,
        id: &RecordId,
        mut replacement: Record,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send {
        async move {
            let mut document = self.document.write().await;
            let records = document
                .collection_mut(collection)
                .ok_or_else(|| collection_missing(collection))?;
            let Some(index) = position(records, id) else {
                return Ok(None);
            };

            if let Some(stored_id) = record::id_of(&records[index]).cloned() {
                replacement.insert(ID_FIELD.to_string(), stored_id);
            }
            records[index] = replacement.clone();
            self.mutations.record();
            Ok(Some(replacement))
        }
    }

    fn merge(
        &self,
        collection: &str,
        id: &RecordId,
        mut patch: Record,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send {
        async move {
            let mut document = self.document.write().await;
            let records = document
                .collection_mut(collection)
                .ok_or_else(|| collection_missing(collection))?;
            let Some(index) = position(records, id) else {
                return Ok(None);
            };

            patch.remove(ID_FIELD);
            record::merge(&mut records[index], patch);
            self.mutations.record();
            Ok(Some(records[index].clone()))
        }
    }

    fn remove(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send {
        async move {
            let mut document = self.document.write().await;
            let records = document
                .collection_mut(collection)
                .ok_or_else(|| collection_missing(collection))?;
            let Some(index) = position(records, id) else {
                return Ok(None);
            };

            let removed = records.remove(index);
            self.mutations.record();
            Ok(Some(removed))
        }
    }

    fn snapshot(&self) -> impl Future<Output = Snapshot> + Send {
        async move {
            let document = self.document.read().await;
            Snapshot {
                revision: self.mutations.revision(),
                document: document.clone(),
            }
        }
    }
}
