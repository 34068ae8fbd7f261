//! JSON REST API handler modules.

use axum::Router;
use axum::routing::get;

use mockapi_app::ports::CollectionStore;

use crate::state::AppState;

#[allow(clippy::missing_errors_doc)]
pub mod collections;
pub mod database;

/// Collection routes, mounted both at the root and under `/api`.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: CollectionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/db", get(database::show::<S>))
        .route(
            "/{collection}",
            get(collections::list::<S>).post(collections::create::<S>),
        )
        .route(
            "/{collection}/{id}",
            get(collections::get::<S>)
                .put(collections::replace::<S>)
                .patch(collections::patch::<S>)
                .delete(collections::delete::<S>),
        )
}
