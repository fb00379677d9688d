//! Local-filesystem implementation of the ContentStorage port.
//!
//! Uploads land under a configured root directory, keyed by a random UUID
//! so user-supplied filenames never touch the filesystem path. The
//! original filename is preserved in the returned `StoredFile` for
//! download headers.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::domain::course::StoredFile;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ContentStorage;

/// Stores uploaded binaries on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    /// Creates a storage rooted at `root`. The directory is created on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn storage_error(context: &str, e: std::io::Error) -> DomainError {
        DomainError::new(
            ErrorCode::StorageError,
            format!("{}: {}", context, e),
        )
    }
}

#[async_trait]
impl ContentStorage for LocalFileStorage {
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<StoredFile, DomainError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| Self::storage_error("Failed to create upload directory", e))?;

        // Keep the extension for content-type sniffing; never the name.
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();
        let key = format!("{}{}", Uuid::new_v4(), extension);

        tokio::fs::write(self.path_for(&key), bytes)
            .await
            .map_err(|e| Self::storage_error("Failed to write upload", e))?;

        Ok(StoredFile {
            key,
            filename: filename.to_string(),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::storage_error("Failed to delete upload", e)),
        }
    }
}
