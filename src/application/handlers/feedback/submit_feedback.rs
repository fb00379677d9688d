//! SubmitFeedbackHandler - trainee feedback on an attended session.

use std::sync::Arc;

use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, FeedbackId, Rating, RegistrationId, Role,
};
use crate::domain::registration::{Feedback, RegistrationError};
use crate::ports::{FeedbackRepository, RegistrationRepository};

/// Command to submit feedback for an own registration.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackCommand {
    pub actor: AuthenticatedUser,
    pub registration_id: RegistrationId,
    pub rating: Rating,
    pub comment: Option<String>,
}

/// Handler for feedback submission.
///
/// One feedback per registration; the registration must belong to the
/// acting trainee and be (or have been) confirmed.
pub struct SubmitFeedbackHandler {
    registrations: Arc<dyn RegistrationRepository>,
    feedback: Arc<dyn FeedbackRepository>,
}

impl SubmitFeedbackHandler {
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        feedback: Arc<dyn FeedbackRepository>,
    ) -> Self {
        Self {
            registrations,
            feedback,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitFeedbackCommand,
        _metadata: CommandMetadata,
    ) -> Result<Feedback, RegistrationError> {
        if cmd.actor.role != Role::Trainee {
            return Err(RegistrationError::Forbidden);
        }

        let registration = self
            .registrations
            .find_by_id(&cmd.registration_id)
            .await?
            .ok_or_else(|| RegistrationError::not_found(cmd.registration_id))?;

        if !registration.belongs_to(&cmd.actor.id) {
            return Err(RegistrationError::Forbidden);
        }

        if self
            .feedback
            .find_by_registration(&cmd.registration_id)
            .await?
            .is_some()
        {
            return Err(RegistrationError::validation(
                "registration",
                "Feedback already submitted for this registration",
            ));
        }

        let feedback =
            Feedback::for_registration(FeedbackId::new(), &registration, cmd.rating, cmd.comment)?;
        self.feedback.save(&feedback).await?;

        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryFeedbackRepository, InMemoryRegistrationRepository};
    use crate::domain::foundation::{SessionId, UserId};
    use crate::domain::registration::{Registration, RegistrationStatus};

    fn trainee(id: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(id).unwrap(),
            format!("{}@example.com", id),
            None,
            Role::Trainee,
        )
    }

    fn fixture(status: RegistrationStatus) -> (SubmitFeedbackHandler, RegistrationId) {
        let mut registration = Registration::new(
            RegistrationId::new(),
            UserId::new("trainee-1").unwrap(),
            SessionId::new(),
        );
        match status {
            RegistrationStatus::Pending => {}
            RegistrationStatus::Confirmed => {
                registration.approve().unwrap();
            }
            RegistrationStatus::Completed => {
                registration.approve().unwrap();
                registration.complete().unwrap();
            }
            _ => unreachable!("not constructed in these tests"),
        }
        let registration_id = *registration.id();

        let handler = SubmitFeedbackHandler::new(
            Arc::new(InMemoryRegistrationRepository::with_registrations(vec![
                registration,
            ])),
            Arc::new(InMemoryFeedbackRepository::new()),
        );
        (handler, registration_id)
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(UserId::new("trainee-1").unwrap())
    }

    #[tokio::test]
    async fn feedback_on_confirmed_registration_succeeds() {
        let (handler, registration_id) = fixture(RegistrationStatus::Confirmed);

        let feedback = handler
            .handle(
                SubmitFeedbackCommand {
                    actor: trainee("trainee-1"),
                    registration_id,
                    rating: Rating::new(5).unwrap(),
                    comment: Some("Great session".to_string()),
                },
                metadata(),
            )
            .await
            .unwrap();

        assert_eq!(feedback.rating().value(), 5);
    }

    #[tokio::test]
    async fn feedback_on_completed_registration_succeeds() {
        let (handler, registration_id) = fixture(RegistrationStatus::Completed);

        let result = handler
            .handle(
                SubmitFeedbackCommand {
                    actor: trainee("trainee-1"),
                    registration_id,
                    rating: Rating::new(4).unwrap(),
                    comment: None,
                },
                metadata(),
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn feedback_on_pending_registration_fails() {
        let (handler, registration_id) = fixture(RegistrationStatus::Pending);

        let result = handler
            .handle(
                SubmitFeedbackCommand {
                    actor: trainee("trainee-1"),
                    registration_id,
                    rating: Rating::new(3).unwrap(),
                    comment: None,
                },
                metadata(),
            )
            .await;

        assert!(matches!(
            result,
            Err(RegistrationError::ValidationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn duplicate_feedback_is_rejected() {
        let (handler, registration_id) = fixture(RegistrationStatus::Confirmed);
        let cmd = SubmitFeedbackCommand {
            actor: trainee("trainee-1"),
            registration_id,
            rating: Rating::new(5).unwrap(),
            comment: None,
        };

        handler.handle(cmd.clone(), metadata()).await.unwrap();
        let result = handler.handle(cmd, metadata()).await;

        assert!(matches!(
            result,
            Err(RegistrationError::ValidationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn foreign_registration_is_forbidden() {
        let (handler, registration_id) = fixture(RegistrationStatus::Confirmed);

        let result = handler
            .handle(
                SubmitFeedbackCommand {
                    actor: trainee("trainee-2"),
                    registration_id,
                    rating: Rating::new(5).unwrap(),
                    comment: None,
                },
                metadata(),
            )
            .await;

        assert!(matches!(result, Err(RegistrationError::Forbidden)));
    }

    #[tokio::test]
    async fn non_trainee_is_forbidden() {
        let (handler, registration_id) = fixture(RegistrationStatus::Confirmed);
        let coordinator = AuthenticatedUser::new(
            UserId::new("coordinator-1").unwrap(),
            "c@example.com",
            None,
            Role::Coordinator,
        );

        let result = handler
            .handle(
                SubmitFeedbackCommand {
                    actor: coordinator,
                    registration_id,
                    rating: Rating::new(5).unwrap(),
                    comment: None,
                },
                metadata(),
            )
            .await;

        assert!(matches!(result, Err(RegistrationError::Forbidden)));
    }
}
