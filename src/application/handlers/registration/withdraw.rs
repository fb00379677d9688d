//! WithdrawRegistrationHandler - trainee withdraws their own registration.

use std::sync::Arc;

use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, EventId, RegistrationId, SerializableDomainEvent,
    Timestamp,
};
use crate::domain::registration::{Registration, RegistrationCancelled, RegistrationError};
use crate::ports::{EventPublisher, RegistrationRepository};

/// Command for a trainee to withdraw their own pending registration.
#[derive(Debug, Clone)]
pub struct WithdrawRegistrationCommand {
    pub actor: AuthenticatedUser,
    pub registration_id: RegistrationId,
}

/// Handler for trainee withdrawal.
///
/// Authorization here is plain ownership: only the registered trainee may
/// withdraw, whatever the session's coordinator thinks.
pub struct WithdrawRegistrationHandler {
    registrations: Arc<dyn RegistrationRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl WithdrawRegistrationHandler {
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            registrations,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: WithdrawRegistrationCommand,
        metadata: CommandMetadata,
    ) -> Result<Registration, RegistrationError> {
        let mut registration = self
            .registrations
            .find_by_id(&cmd.registration_id)
            .await?
            .ok_or_else(|| RegistrationError::not_found(cmd.registration_id))?;

        if !registration.belongs_to(&cmd.actor.id) {
            return Err(RegistrationError::Forbidden);
        }

        let changed = registration.withdraw()?;
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
