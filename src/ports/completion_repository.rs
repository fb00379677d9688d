//! Course completion repository port.

use crate::domain::course::CourseCompletion;
use crate::domain::foundation::{CourseId, DomainError, UserId};
use async_trait::async_trait;

/// Repository port for CourseCompletion persistence.
///
/// Implementations must enforce the unique (user, course) pair.
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Save a new completion record.
    async fn save(&self, completion: &CourseCompletion) -> Result<(), DomainError>;

    /// Update an existing completion record.
    async fn update(&self, completion: &CourseCompletion) -> Result<(), DomainError>;

    /// Find the completion record for a (user, course) pair.
    ///
    /// Returns `None` if the trainee never started the course.
    async fn find_by_user_and_course(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<Option<CourseCompletion>, DomainError>;

    /// All completion records of a user.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<CourseCompletion>, DomainError>;
}
