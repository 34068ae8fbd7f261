//! Whole-document handler.

use axum::Json;
use axum::extract::State;

use mockapi_app::ports::CollectionStore;
use mockapi_domain::document::Document;

use crate::state::AppState;

/// `GET /db`
pub async fn show<S>(State(state): State<AppState<S>>) -> Json<Document>
where
    S: CollectionStore + Send + Sync + 'static,
{
    Json(state.collection_service.document().await)
}
