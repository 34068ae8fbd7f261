//! Store port — access to the live collections.

use std::future::Future;
use std::sync::Arc;

use mockapi_domain::document::Document;
use mockapi_domain::error::MockApiError;
use mockapi_domain::id::RecordId;
use mockapi_domain::record::Record;

/// Point-in-time copy of the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Mutation revision the copy was taken at.
    pub revision: u64,
    /// The copied data.
    pub document: Document,
}

/// Read/write access to named collections of records.
///
/// Unknown collections yield [`NotFoundError::Collection`]; unknown records
/// yield `Ok(None)` so callers decide how to report them.
///
/// [`NotFoundError::Collection`]: mockapi_domain::error::NotFoundError::Collection
pub trait CollectionStore {
    /// Names of all collections.
    fn names(&self) -> impl Future<Output = Vec<String>> + Send;

    /// Copy of every record of a collection, in stored order.
    fn list(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<Record>, MockApiError>> + Send;

    /// Look up one record.
    fn get(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send;

    /// Append a record, allocating an id when it has none.
    fn insert(
        &self,
        collection: &str,
        record: Record,
    ) -> impl Future<Output = Result<Record, MockApiError>> + Send;

    /// Replace the body of a record. The stored id is kept.
    fn replace(
        &self,
        collection: &str,
        id: &RecordId,
        record: Record,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send;

    /// Shallow-merge fields into a record. The stored id is kept.
    fn merge(
        &self,
        collection: &str,
        id: &RecordId,
        patch: Record,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send;

    /// Remove a record, returning it.
    fn remove(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send;

    /// Copy the whole document together with its current revision.
    fn snapshot(&self) -> impl Future<Output = Snapshot> + Send;
}

impl<T: CollectionStore + Send + Sync> CollectionStore for Arc<T> {
    fn names(&self) -> impl Future<Output = Vec<String>> + Send {
        (**self).names()
    }

    fn list(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<Record>, MockApiError>> + Send {
        (**self).list(collection)
    }

    fn get(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send {
        (**self).get(collection, id)
    }

    fn insert(
        &self,
        collection: &str,
        record: Record,
    ) -> impl Future<Output = Result<Record, MockApiError>> + Send {
        (**self).insert(collection, record)
    }

    fn replace(
        &self,
        collection: &str,
        id: &RecordId,
        record: Record,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send {
        (**self).replace(collection, id, record)
    }

    fn merge(
        &self,
        collection: &str,
        id: &RecordId,
        patch: Record,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send {
        (**self).merge(collection, id, patch)
    }

    fn remove(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> impl Future<Output = Result<Option<Record>, MockApiError>> + Send {
        (**self).remove(collection, id)
    }

    fn snapshot(&self) -> impl Future<Output = Snapshot> + Send {
        (**self).snapshot()
    }
}
