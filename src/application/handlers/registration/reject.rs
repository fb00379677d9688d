//! RejectRegistrationHandler - Command handler for rejecting registrations.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, EventId, NotificationId, RegistrationId,
    SerializableDomainEvent, Timestamp,
};
use crate::domain::notification::{Notification, Priority};
use crate::domain::registration::{Registration, RegistrationError, RegistrationRejected};
use crate::ports::{
    EventPublisher, NotificationRepository, RegistrationRepository, SessionRepository,
};

/// Command to reject a pending registration.
#[derive(Debug, Clone)]
pub struct RejectRegistrationCommand {
    pub actor: AuthenticatedUser,
    pub registration_id: RegistrationId,
}

/// Handler for rejecting registrations.
///
/// Idempotent: rejecting an already-cancelled registration succeeds
/// without side effects.
pub struct RejectRegistrationHandler {
    registrations: Arc<dyn RegistrationRepository>,
    sessions: Arc<dyn SessionRepository>,
    notifications: Arc<dyn NotificationRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RejectRegistrationHandler {
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        sessions: Arc<dyn SessionRepository>,
        notifications: Arc<dyn NotificationRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            registrations,
            sessions,
            notifications,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: RejectRegistrationCommand,
        metadata: CommandMetadata,
    ) -> Result<Registration, RegistrationError> {
        let mut registration = self
            .registrations
            .find_by_id(&cmd.registration_id)
            .await?
            .ok_or_else(|| RegistrationError::not_found(cmd.registration_id))?;

        let session = self
            .sessions
            .find_by_id(registration.session_id())
            .await?
            .ok_or(RegistrationError::SessionNotFound)?;

        authorize(&cmd.actor, Action::ManageRegistrations, &session)?;

        let changed = registration.reject()?;
        if !changed {
            return Ok(registration);
        }

        self.registrations.update(&registration).await?;

        let notification = Notification::new(
            NotificationId::new(),
            registration.user_id().clone(),
            "Registration declined".to_string(),
            format!(
                "Your registration for {} was not approved.",
                session.skill_name()
            ),
            Priority::Normal,
        )
        .map_err(|e| RegistrationError::infrastructure(e.to_string()))?;
        self.notifications.save(&notification).await?;

        let event = RegistrationRejected {
            event_id: EventId::new(),
            registration_id: *registration.id(),
            session_id: *registration.session_id(),
            user_id: registration.user_id().clone(),
            rejected_by: cmd.actor.id.clone(),
            rejected_at: Timestamp::now(),
        };
        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::{
        InMemoryNotificationRepository, InMemoryRegistrationRepository, InMemorySessionRepository,
    };
    use crate::domain::foundation::{Role, SessionId, UserId};
    use crate::domain::registration::RegistrationStatus;
    use crate::domain::session::{SessionSchedule, TrainingSession};

    fn coordinator() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("coordinator-1").unwrap(),
            "c@example.com",
            None,
            Role::Coordinator,
        )
    }

    fn fixture(
        status: RegistrationStatus,
    ) -> (RejectRegistrationHandler, Arc<InMemoryEventBus>, RegistrationId) {
        let session = TrainingSession::new(
            SessionId::new(),
            UserId::new("coordinator-1").unwrap(),
            "Rust Fundamentals".to_string(),
            SessionSchedule::new(
                "2030-06-01".parse().unwrap(),
                "10:00:00".parse().unwrap(),
                "12:00:00".parse().unwrap(),
            )
            .unwrap(),
            "Room 2B".to_string(),
            10,
        )
        .unwrap();

        let mut registration = Registration::new(
            RegistrationId::new(),
            UserId::new("trainee-1").unwrap(),
            *session.id(),
        );
        match status {
            RegistrationStatus::Pending => {}
            RegistrationStatus::Confirmed => {
                registration.approve().unwrap();
            }
            RegistrationStatus::Cancelled => {
                registration.reject().unwrap();
            }
            _ => unreachable!("not constructed in these tests"),
        }
        let registration_id = *registration.id();

        let bus = Arc::new(InMemoryEventBus::new());
        let handler = RejectRegistrationHandler::new(
            Arc::new(InMemoryRegistrationRepository::with_registrations(vec![
                registration,
            ])),
            Arc::new(InMemorySessionRepository::with_session(session)),
            Arc::new(InMemoryNotificationRepository::new()),
            bus.clone(),
        );
        (handler, bus, registration_id)
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(UserId::new("coordinator-1").unwrap())
    }

    #[tokio::test]
    async fn rejects_pending_registration() {
        let (handler, bus, registration_id) = fixture(RegistrationStatus::Pending);

        let result = handler
            .handle(
                RejectRegistrationCommand {
                    actor: coordinator(),
                    registration_id,
                },
                metadata(),
            )
            .await
            .unwrap();

        assert_eq!(result.status(), RegistrationStatus::Cancelled);
        assert!(bus.has_event("registration.rejected"));
    }

    #[tokio::test]
    async fn rejecting_twice_is_idempotent() {
        let (handler, bus, registration_id) = fixture(RegistrationStatus::Pending);
        let cmd = RejectRegistrationCommand {
            actor: coordinator(),
            registration_id,
        };

        handler.handle(cmd.clone(), metadata()).await.unwrap();
        let second = handler.handle(cmd, metadata()).await.unwrap();

        assert_eq!(second.status(), RegistrationStatus::Cancelled);
        assert_eq!(bus.events_of_type("registration.rejected").len(), 1);
    }

    #[tokio::test]
    async fn rejecting_confirmed_registration_fails() {
        let (handler, bus, registration_id) = fixture(RegistrationStatus::Confirmed);

        let result = handler
            .handle(
                RejectRegistrationCommand {
                    actor: coordinator(),
                    registration_id,
                },
                metadata(),
            )
            .await;

        assert!(matches!(
            result,
            Err(RegistrationError::InvalidTransition { .. })
        ));
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn trainee_cannot_reject() {
        let (handler, _bus, registration_id) = fixture(RegistrationStatus::Pending);
        let trainee = AuthenticatedUser::new(
            UserId::new("trainee-1").unwrap(),
            "t@example.com",
            None,
            Role::Trainee,
        );

        let result = handler
            .handle(
                RejectRegistrationCommand {
                    actor: trainee,
                    registration_id,
                },
                metadata(),
            )
            .await;

        assert!(matches!(result, Err(RegistrationError::Forbidden)));
    }
}
