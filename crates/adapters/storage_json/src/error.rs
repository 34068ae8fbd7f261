//! Storage-specific error type wrapping IO and JSON errors.

use std::path::PathBuf;

use mockapi_domain::error::MockApiError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the file failed.
    #[error("failed to access {}", .path.display())]
    Io {
        /// File that could not be accessed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid document.
    #[error("invalid JSON document in {}", .path.display())]
    Json {
        /// File that could not be parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be serialized.
    #[error("failed to serialize document")]
    Serialize(#[from] serde_json::Error),
}

impl From<StorageError> for MockApiError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_file_in_io_error() {
        let err = StorageError::Io {
            path: PathBuf::from("db.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.to_string(), "failed to access db.json");
    }

    #[test]
    fn should_convert_to_storage_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err: MockApiError = StorageError::Serialize(json_err).into();
        assert!(matches!(err, MockApiError::Storage(_)));
    }
}
