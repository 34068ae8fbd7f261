//! Loading and snapshotting the JSON document file.

use std::ffi::OsString;
use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use mockapi_app::ports::SnapshotSink;
use mockapi_domain::document::Document;
use mockapi_domain::error::MockApiError;

use crate::error::StorageError;

/// Configuration for the JSON storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the document file (e.g. `db.json`).
    pub path: PathBuf,
}

impl Config {
    /// Read the document from disk.
    ///
    /// A missing file is not an error: the server starts with an empty
    /// document and the first snapshot creates the file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file cannot be read or does not hold
    /// a mapping of collection names to arrays of objects.
    pub async fn load(&self) -> Result<Document, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "document file not found, starting empty");
                return Ok(Document::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let document: Document =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::Json {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(
            path = %self.path.display(),
            collections = document.len(),
            records = document.record_count(),
            "document loaded"
        );
        Ok(document)
    }

    /// Build a snapshot writer targeting the same file.
    #[must_use]
    pub fn writer(&self) -> JsonSnapshotWriter {
        JsonSnapshotWriter::new(self.path.clone())
    }
}

/// Writes full-document snapshots as pretty-printed JSON.
///
/// The file is never left half-written: content goes to `<file>.tmp` in the
/// same directory, is synced, then renamed over the target, and the
/// directory is synced so the rename is durable.
#[derive(Debug, Clone)]
pub struct JsonSnapshotWriter {
    path: PathBuf,
}

impl JsonSnapshotWriter {
    /// Create a writer for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("snapshot"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Serialize and atomically replace the file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or any file operation fails.
    /// The previous file content is untouched in that case.
    pub async fn write_document(&self, document: &Document) -> Result<(), StorageError> {
        let mut bytes = serde_json::to_vec_pretty(document)?;
        bytes.push(b'\n');

        let temp = self.temp_path();
        let io_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| StorageError::Io { path, source }
        };

        let mut file = tokio::fs::File::create(&temp)
            .await
            .map_err(io_error(&temp))?;
        file.write_all(&bytes).await.map_err(io_error(&temp))?;
        file.sync_all().await.map_err(io_error(&temp))?;
        drop(file);

        if let Err(source) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(StorageError::Io {
                path: self.path.clone(),
                source,
            });
        }

        let dir = self.parent_dir();
        sync_directory(&dir).await.map_err(io_error(&dir))
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Flush the directory entry so the rename survives a crash.
#[cfg(unix)]
async fn sync_directory(dir: &Path) -> std::io::Result<()> {
    tokio::fs::File::open(dir).await?.sync_all().await
}

// NTFS journals metadata updates and directories cannot be opened as files.
#[cfg(not(unix))]
async fn sync_directory(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

impl SnapshotSink for JsonSnapshotWriter {
    fn write(&self, document: &Document) -> impl Future<Output = Result<(), MockApiError>> + Send {
        async move { self.write_document(document).await.map_err(MockApiError::from) }
    }
}
