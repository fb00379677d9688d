//! ApproveRegistrationHandler - Command handler for approving registrations.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, EventId, NotificationId, RegistrationId,
    SerializableDomainEvent, Timestamp,
};
use crate::domain::notification::{Notification, Priority};
use crate::domain::registration::{Registration, RegistrationApproved, RegistrationError};
use crate::ports::{
    EventPublisher, NotificationRepository, RegistrationRepository, SessionRepository,
};

/// Command to approve a pending registration.
#[derive(Debug, Clone)]
pub struct ApproveRegistrationCommand {
    pub actor: AuthenticatedUser,
    pub registration_id: RegistrationId,
}

/// Handler for approving registrations.
///
/// Idempotent: approving an already-confirmed registration succeeds
/// without re-publishing events or re-notifying the trainee.
pub struct ApproveRegistrationHandler {
    registrations: Arc<dyn RegistrationRepository>,
    sessions: Arc<dyn SessionRepository>,
    notifications: Arc<dyn NotificationRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ApproveRegistrationHandler {
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
        cmd: ApproveRegistrationCommand,
        metadata: CommandMetadata,
    ) -> Result<Registration, RegistrationError> {
        // 1. Load registration and its session
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

        // 2. Authorize - owning coordinator or admin
        authorize(&cmd.actor, Action::ManageRegistrations, &session)?;

        // 3. Transition (no-op when already confirmed)
        let changed = registration.approve()?;
        if !changed {
            return Ok(registration);
        }

        // 4. Persist
        self.registrations.update(&registration).await?;

        // 5. Notify the trainee
        let notification = Notification::new(
            NotificationId::new(),
            registration.user_id().clone(),
            "Registration approved".to_string(),
            format!("Your seat for {} is confirmed.", session.skill_name()),
            Priority::Normal,
        )
        .map_err(|e| RegistrationError::infrastructure(e.to_string()))?;
        self.notifications.save(&notification).await?;

        // 6. Publish event
        let event = RegistrationApproved {
            event_id: EventId::new(),
            registration_id: *registration.id(),
            session_id: *registration.session_id(),
            user_id: registration.user_id().clone(),
            approved_by: cmd.actor.id.clone(),
            approved_at: Timestamp::now(),
        };
        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(registration)
    }
}
