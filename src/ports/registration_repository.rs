//! Registration repository port.

use crate::domain::foundation::{DomainError, RegistrationId, SessionId, UserId};
use crate::domain::registration::Registration;
use async_trait::async_trait;

/// Repository port for Registration persistence.
///
/// Implementations must enforce the unique (user, session) constraint for
/// registrations in blocking statuses - the client-side eligibility check
/// is advisory, the store is the authority.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Save a new registration.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (including uniqueness
    ///   violations surfaced by the store)
    async fn save(&self, registration: &Registration) -> Result<(), DomainError>;

    /// Update an existing registration.
    ///
    /// # Errors
    ///
    /// - `RegistrationNotFound` if the registration doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, registration: &Registration) -> Result<(), DomainError>;

    /// Find a registration by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError>;

    /// All registrations for a session (every status - history included).
    async fn list_by_session(&self, session_id: &SessionId)
        -> Result<Vec<Registration>, DomainError>;

    /// All registrations of a user.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Registration>, DomainError>;

    /// Every registration (dashboard statistics input).
    async fn list_all(&self) -> Result<Vec<Registration>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RegistrationRepository) {}
    }
}
