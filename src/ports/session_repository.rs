//! Session repository port.

use crate::domain::foundation::{DomainError, SessionId, UserId};
use crate::domain::session::TrainingSession;
use async_trait::async_trait;

/// Repository port for TrainingSession persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &TrainingSession) -> Result<(), DomainError>;

    /// Update an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &TrainingSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<TrainingSession>, DomainError>;

    /// All active (non-archived) sessions, newest date first.
    async fn list_active(&self) -> Result<Vec<TrainingSession>, DomainError>;

    /// All sessions, including archived ones.
    async fn list_all(&self) -> Result<Vec<TrainingSession>, DomainError>;

    /// All sessions owned by a coordinator.
    async fn list_by_coordinator(
        &self,
        coordinator_id: &UserId,
    ) -> Result<Vec<TrainingSession>, DomainError>;
}
