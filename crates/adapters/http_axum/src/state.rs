//! Shared application state for axum handlers.

use std::sync::Arc;

use mockapi_app::ports::CollectionStore;
use mockapi_app::services::collection_service::CollectionService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Collection query and CRUD service.
    pub collection_service: Arc<CollectionService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            collection_service: Arc::clone(&self.collection_service),
        }
    }
}

impl<S> AppState<S>
where
    S: CollectionStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(collection_service: CollectionService<S>) -> Self {
        Self {
            collection_service: Arc::new(collection_service),
        }
    }
}
