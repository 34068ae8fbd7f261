//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use mockapi_app::ports::CollectionStore;

use crate::api::collections;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Collection routes are served at `/` and again under `/api`;
/// `/blog/{collection}/{id}/show` is an alias of `/{collection}/{id}`.
/// The CORS layer answers preflights, and a [`TraceLayer`] logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: CollectionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/blog/{collection}/{id}/show", get(collections::get::<S>))
        .nest("/api", crate::api::routes())
        .merge(crate::api::routes())
        .layer(crate::cors::layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
