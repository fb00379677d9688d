//! Category repository port.

use crate::domain::foundation::{CategoryId, DomainError};
use crate::domain::session::Category;
use async_trait::async_trait;

/// Repository port for Category persistence. Read-mostly.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Save a new category.
    async fn save(&self, category: &Category) -> Result<(), DomainError>;

    /// Update an existing category.
    async fn update(&self, category: &Category) -> Result<(), DomainError>;

    /// Find a category by its ID.
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError>;

    /// All categories, active ones first.
    async fn list_all(&self) -> Result<Vec<Category>, DomainError>;
}
