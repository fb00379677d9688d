//! Binary content storage port.

use crate::domain::course::StoredFile;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Port for storing uploaded course-content binaries (images, files).
///
/// The HTTP adapter streams multipart payloads here and persists only the
/// returned reference.
#[async_trait]
pub trait ContentStorage: Send + Sync {
    /// Store the bytes under a new key.
    ///
    /// # Errors
    ///
    /// - `StorageError` on write failure
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<StoredFile, DomainError>;

    /// Delete a previously stored binary.
    ///
    /// Deleting a missing key is a no-op.
    async fn delete(&self, key: &str) -> Result<(), DomainError>;
}
