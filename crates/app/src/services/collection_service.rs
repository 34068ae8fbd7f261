//! Collection service — paginated queries and record CRUD.

use mockapi_domain::document::Document;
use mockapi_domain::error::{MockApiError, NotFoundError};
use mockapi_domain::id::RecordId;
use mockapi_domain::page::Page;
use mockapi_domain::query::CollectionQuery;
use mockapi_domain::record::Record;

use crate::ports::CollectionStore;

/// Application service over every collection of the store.
pub struct CollectionService<S> {
    store: S,
}

fn record_missing(collection: &str, id: &str) -> MockApiError {
    NotFoundError::Record {
        collection: collection.to_string(),
        id: id.to_string(),
    }
    .into()
}

impl<S: CollectionStore> CollectionService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Names of all collections.
    pub async fn list_collections(&self) -> Vec<String> {
        self.store.names().await
    }

    /// Filter, sort and paginate a collection.
    ///
    /// # Errors
    ///
    /// Returns [`MockApiError::NotFound`] when the collection does not exist.
    #[tracing::instrument(skip(self, query), fields(limit = query.page.limit(), page = query.page.page()))]
    pub async fn query_collection(
        &self,
        collection: &str,
        query: &CollectionQuery,
    ) -> Result<Page<Record>, MockApiError> {
        let records = self.store.list(collection).await?;
        Ok(query.run(records))
    }

    /// Look up a record by the id written in a request path.
    ///
    /// # Errors
    ///
    /// Returns [`MockApiError::NotFound`] when the collection or the record
    /// does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_record(&self, collection: &str, id: &str) -> Result<Record, MockApiError> {
        self.store
            .get(collection, &RecordId::from(id))
            .await?
            .ok_or_else(|| record_missing(collection, id))
    }

    /// Append a record, allocating an id when the body has none.
    ///
    /// # Errors
    ///
    /// Returns [`MockApiError::NotFound`] for an unknown collection,
    /// [`MockApiError::Validation`] for an unusable `id` value, or
    /// [`MockApiError::Conflict`] when the id is already taken.
    #[tracing::instrument(skip(self, record))]
    pub async fn create_record(
        &self,
        collection: &str,
        record: Record,
    ) -> Result<Record, MockApiError> {
        self.store.insert(collection, record).await
    }

    /// Replace a record's body, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns [`MockApiError::NotFound`] when the collection or the record
    /// does not exist.
    #[tracing::instrument(skip(self, record))]
    pub async fn replace_record(
        &self,
        collection: &str,
        id: &str,
        record: Record,
    ) -> Result<Record, MockApiError> {
        self.store
            .replace(collection, &RecordId::from(id), record)
            .await?
            .ok_or_else(|| record_missing(collection, id))
    }

    /// Merge top-level fields into a record, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns [`MockApiError::NotFound`] when the collection or the record
    /// does not exist.
    #[tracing::instrument(skip(self, patch))]
    pub async fn patch_record(
        &self,
        collection: &str,
        id: &str,
        patch: Record,
    ) -> Result<Record, MockApiError> {
        self.store
            .merge(collection, &RecordId::from(id), patch)
            .await?
            .ok_or_else(|| record_missing(collection, id))
    }

    /// Delete a record, returning what was removed.
    ///
    /// # Errors
    ///
    /// Returns [`MockApiError::NotFound`] when the collection or the record
    /// does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete_record(&self, collection: &str, id: &str) -> Result<Record, MockApiError> {
        self.store
            .remove(collection, &RecordId::from(id))
            .await?
            .ok_or_else(|| record_missing(collection, id))
    }

    /// Copy of the whole document.
    pub async fn document(&self) -> Document {
        self.store.snapshot().await.document
    }
}
