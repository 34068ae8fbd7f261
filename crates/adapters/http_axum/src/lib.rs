//! # mockapi-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve every collection of the store as a JSON resource:
//!   `GET /{collection}` (paginated, filterable), `POST /{collection}`,
//!   `GET|PUT|PATCH|DELETE /{collection}/{id}`
//! - Mount the same routes under `/api` and alias
//!   `/blog/{collection}/{id}/show` to the single-record route
//! - Answer CORS preflights and decorate responses with CORS headers
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `mockapi-app` (for port traits and services) and `mockapi-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod cors;
pub mod error;
pub mod router;
pub mod state;
