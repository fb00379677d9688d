//! EnrollHandler - Command handler for trainee enrollment.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, EventId, RegistrationId, SerializableDomainEvent,
    SessionId, Timestamp,
};
use crate::domain::registration::{
    can_enroll, Eligibility, Registration, RegistrationError, TraineeEnrolled,
};
use crate::ports::{EventPublisher, RegistrationRepository, SessionRepository};

/// Command to enroll the acting trainee into a session.
#[derive(Debug, Clone)]
pub struct EnrollCommand {
    pub actor: AuthenticatedUser,
    pub session_id: SessionId,
}

/// Result of a successful enrollment.
#[derive(Debug, Clone)]
pub struct EnrollResult {
    pub registration: Registration,
}

/// Handler for trainee enrollment.
///
/// Re-evaluates eligibility against freshly loaded registrations on every
/// call - the evaluation is advisory, the repository's unique constraint
/// is the authority.
pub struct EnrollHandler {
    sessions: Arc<dyn SessionRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl EnrollHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            sessions,
            registrations,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: EnrollCommand,
        metadata: CommandMetadata,
    ) -> Result<EnrollResult, RegistrationError> {
        // 1. Load the session
        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(RegistrationError::SessionNotFound)?;

        // 2. Authorization matrix gate
        authorize(&cmd.actor, Action::EnrollInSession, &session)?;

        // 3. Eligibility against fresh registrations
        let existing = self.registrations.list_by_session(&cmd.session_id).await?;
        match can_enroll(&cmd.actor, &session, &existing, Timestamp::now()) {
            Eligibility::Allowed => {}
            Eligibility::Denied(reason) => {
                return Err(RegistrationError::enrollment_denied(reason));
            }
        }

        // 4. Create and persist (the store enforces uniqueness atomically)
        let registration = Registration::new(
            RegistrationId::new(),
            cmd.actor.id.clone(),
            cmd.session_id,
        );
        self.registrations.save(&registration).await?;

        // 5. Publish event
        let event = TraineeEnrolled {
            event_id: EventId::new(),
            registration_id: *registration.id(),
            session_id: cmd.session_id,
            user_id: cmd.actor.id.clone(),
            registered_at: *registration.registered_at(),
        };
        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(EnrollResult { registration })
    }
}
