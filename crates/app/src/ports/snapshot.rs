//! Snapshot port — persistence of the whole document.

use std::future::Future;
use std::sync::Arc;

use mockapi_domain::document::Document;
use mockapi_domain::error::MockApiError;

/// Destination for full-document snapshots.
pub trait SnapshotSink {
    /// Persist `document`, replacing any previous snapshot.
    fn write(&self, document: &Document) -> impl Future<Output = Result<(), MockApiError>> + Send;
}

impl<T: SnapshotSink + Send + Sync> SnapshotSink for Arc<T> {
    fn write(&self, document: &Document) -> impl Future<Output = Result<(), MockApiError>> + Send {
        (**self).write(document)
    }
}
