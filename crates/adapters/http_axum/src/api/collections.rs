//! JSON REST handlers for collections and their records.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use mockapi_app::ports::CollectionStore;
use mockapi_domain::page::Page;
use mockapi_domain::query::CollectionQuery;
use mockapi_domain::record::Record;

use crate::cors::X_TOTAL_COUNT;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    /// 200 OK with the page envelope and an `X-Total-Count` header.
    Ok(Page<Record>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(page) => (
                [(HeaderName::from_static(X_TOTAL_COUNT), page.total.to_string())],
                Json(page),
            )
                .into_response(),
        }
    }
}

/// Possible responses from endpoints returning a single record.
pub enum RecordResponse {
    Ok(Json<Record>),
    Created(Json<Record>),
}

impl IntoResponse for RecordResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    /// 200 OK with an empty JSON object.
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json(Record::new()).into_response(),
        }
    }
}

/// `GET /{collection}?_limit=&_page=&_sort=&_order=&field=value`
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Path(collection): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<ListResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let query = CollectionQuery::from_pairs(params);
    let page = state
        .collection_service
        .query_collection(&collection, &query)
        .await?;
    Ok(ListResponse::Ok(page))
}

/// `GET /{collection}/{id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<RecordResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let record = state.collection_service.get_record(&collection, &id).await?;
    Ok(RecordResponse::Ok(Json(record)))
}

/// `POST /{collection}`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Path(collection): Path<String>,
    Json(record): Json<Record>,
) -> Result<RecordResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let created = state
        .collection_service
        .create_record(&collection, record)
        .await?;
    Ok(RecordResponse::Created(Json(created)))
}

/// `PUT /{collection}/{id}`
pub async fn replace<S>(
    State(state): State<AppState<S>>,
    Path((collection, id)): Path<(String, String)>,
    Json(record): Json<Record>,
) -> Result<RecordResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let replaced = state
        .collection_service
        .replace_record(&collection, &id, record)
        .await?;
    Ok(RecordResponse::Ok(Json(replaced)))
}

/// `PATCH /{collection}/{id}`
pub async fn patch<S>(
    State(state): State<AppState<S>>,
    Path((collection, id)): Path<(String, String)>,
    Json(patch): Json<Record>,
) -> Result<RecordResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let patched = state
        .collection_service
        .patch_record(&collection, &id, patch)
        .await?;
    Ok(RecordResponse::Ok(Json(patched)))
}

/// `DELETE /{collection}/{id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<DeleteResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    state
        .collection_service
        .delete_record(&collection, &id)
        .await?;
    Ok(DeleteResponse::Ok)
}
