//! CORS policy.
//!
//! Any origin may call the API. Preflight `OPTIONS` requests are answered
//! by the layer itself, before routing.

use axum::http::{HeaderName, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Response header carrying the filtered item count of a list request.
pub const X_TOTAL_COUNT: &str = "x-total-count";

/// Build the CORS layer applied to every route.
#[must_use]
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([
            header::CONTENT_LENGTH,
            HeaderName::from_static(X_TOTAL_COUNT),
        ])
}
