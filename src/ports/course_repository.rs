//! Course repository port.

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError, SessionId};
use async_trait::async_trait;

/// Repository port for Course persistence.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Save a new course.
    async fn save(&self, course: &Course) -> Result<(), DomainError>;

    /// Update an existing course.
    ///
    /// # Errors
    ///
    /// - `CourseNotFound` if the course doesn't exist
    async fn update(&self, course: &Course) -> Result<(), DomainError>;

    /// Find a course by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// All courses of a session.
    async fn list_by_session(&self, session_id: &SessionId) -> Result<Vec<Course>, DomainError>;
}
