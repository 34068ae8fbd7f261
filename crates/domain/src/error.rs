//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`MockApiError`] via `#[from]`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum MockApiError {
    /// A request carried data that cannot be stored.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The addressed collection or record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The write would break record identity.
    #[error("conflict")]
    Conflict(#[from] ConflictError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invalid input data.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The `id` field is neither an integer nor a string.
    #[error("record id must be an integer or a string, got {0}")]
    InvalidId(String),
}

/// Lookup failure.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotFoundError {
    /// No collection with this name.
    #[error("collection `{0}` not found")]
    Collection(String),

    /// No record with this id in the collection.
    #[error("record `{id}` not found in `{collection}`")]
    Record {
        /// Collection name.
        collection: String,
        /// Requested id, as written in the request.
        id: String,
    },
}

/// Identity conflict on write.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConflictError {
    /// A record with the same id already exists.
    #[error("record `{id}` already exists in `{collection}`")]
    DuplicateId {
        /// Collection name.
        collection: String,
        /// The clashing id.
        id: String,
    },
}
