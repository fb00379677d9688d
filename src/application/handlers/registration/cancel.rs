//! CancelRegistrationHandler - coordinator revokes a confirmed seat.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, EventId, RegistrationId, SerializableDomainEvent,
    Timestamp,
};
use crate::domain::registration::{Registration, RegistrationCancelled, RegistrationError};
use crate::ports::{EventPublisher, RegistrationRepository, SessionRepository};

/// Command to cancel a confirmed registration.
#[derive(Debug, Clone)]
pub struct CancelRegistrationCommand {
    pub actor: AuthenticatedUser,
    pub registration_id: RegistrationId,
}

/// Handler for revoking confirmed registrations.
pub struct CancelRegistrationHandler {
    registrations: Arc<dyn RegistrationRepository>,
    sessions: Arc<dyn SessionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CancelRegistrationHandler {
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        sessions: Arc<dyn SessionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            registrations,
            sessions,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CancelRegistrationCommand,
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

        let changed = registration.cancel()?;
        if !changed {
            return Ok(registration);
        }

        self.registrations.update(&registration).await?;

        let event = RegistrationCancelled {
            event_id: EventId::new(),
            registration_id: *registration.id(),
            session_id: *registration.session_id(),
            user_id: registration.user_id().clone(),
            cancelled_by: cmd.actor.id.clone(),
            cancelled_at: Timestamp::now(),
        };
        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(registration)
    }
}
