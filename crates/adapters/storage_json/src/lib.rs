//! # mockapi-adapter-storage-json
//!
//! JSON file persistence adapter.
//!
//! ## Responsibilities
//! - Load the [`Document`](mockapi_domain::document::Document) from disk at startup
//! - Implement the `SnapshotSink` port defined in `mockapi-app::ports::snapshot`
//! - Replace the file atomically (write a temporary sibling, then rename)
//!
//! ## Dependency rule
//! Depends on `mockapi-app` (for port traits) and `mockapi-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod file;

pub use error::StorageError;
pub use file::{Config, JsonSnapshotWriter};
