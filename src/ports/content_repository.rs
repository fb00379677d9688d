//! Course content repository port.

use crate::domain::course::CourseContent;
use crate::domain::foundation::{ContentId, CourseId, DomainError};
use async_trait::async_trait;

/// Repository port for CourseContent persistence.
///
/// The schema allows several content rows per course; the domain's
/// `current_content` resolver picks the one that counts.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Save a new content item.
    async fn save(&self, content: &CourseContent) -> Result<(), DomainError>;

    /// Update an existing content item.
    ///
    /// # Errors
    ///
    /// - `ContentNotFound` if the item doesn't exist
    async fn update(&self, content: &CourseContent) -> Result<(), DomainError>;

    /// All content items of a course, any order.
    async fn list_by_course(&self, course_id: &CourseId)
        -> Result<Vec<CourseContent>, DomainError>;

    /// Delete a content item.
    ///
    /// # Errors
    ///
    /// - `ContentNotFound` if the item doesn't exist
    async fn delete(&self, id: &ContentId) -> Result<(), DomainError>;
}
