//! Feedback repository port.

use crate::domain::foundation::{DomainError, RegistrationId};
use crate::domain::registration::Feedback;
use async_trait::async_trait;

/// Repository port for Feedback persistence.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Save new feedback.
    async fn save(&self, feedback: &Feedback) -> Result<(), DomainError>;

    /// Find feedback attached to a registration.
    ///
    /// Returns `None` if no feedback was submitted yet.
    async fn find_by_registration(
        &self,
        registration_id: &RegistrationId,
    ) -> Result<Option<Feedback>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn FeedbackRepository) {}
    }
}
