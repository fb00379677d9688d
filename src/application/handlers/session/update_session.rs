//! UpdateSessionHandler - Command handler for editing sessions.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::foundation::{
    AuthenticatedUser, CategoryId, CommandMetadata, EventId, SerializableDomainEvent, SessionId,
    Timestamp, UserId,
};
use crate::domain::session::{
    SessionError, SessionSchedule, SessionUpdated, TrainerAssigned, TrainingSession,
};
use crate::ports::{EventPublisher, SessionRepository};

/// Command to update a session's details.
///
/// `trainer_id` replaces the assignment when set; `None` leaves the
/// current trainer untouched.
#[derive(Debug, Clone)]
pub struct UpdateSessionCommand {
    pub actor: AuthenticatedUser,
    pub session_id: SessionId,
    pub skill_name: String,
    pub description: Option<String>,
    pub schedule: SessionSchedule,
    pub location: String,
    pub max_participants: u32,
    pub trainer_id: Option<UserId>,
    pub category_id: Option<CategoryId>,
}

/// Handler for session updates.
pub struct UpdateSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            sessions,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<TrainingSession, SessionError> {
        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        authorize(&cmd.actor, Action::EditSession, &session)?;

        session.update_details(
            cmd.skill_name,
            cmd.description,
            cmd.schedule,
            cmd.location,
            cmd.max_participants,
        )?;
        session.set_category(cmd.category_id)?;

        let mut trainer_event = None;
        if let Some(trainer_id) = cmd.trainer_id {
            let previous = session.assign_trainer(trainer_id.clone())?;
            if previous.as_ref() != Some(&trainer_id) {
                trainer_event = Some(TrainerAssigned {
                    event_id: EventId::new(),
                    session_id: cmd.session_id,
                    trainer_id,
                    previous_trainer_id: previous,
                    assigned_at: Timestamp::now(),
                });
            }
        }

        self.sessions.update(&session).await?;

        let updated = SessionUpdated {
            event_id: EventId::new(),
            session_id: cmd.session_id,
            updated_by: cmd.actor.id.clone(),
            updated_at: *session.updated_at(),
        };
        let mut envelopes = vec![updated
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string())];
        if let Some(event) = trainer_event {
            envelopes.push(
                event
                    .to_envelope()
                    .with_correlation_id(metadata.correlation_id())
                    .with_user_id(metadata.user_id.to_string()),
            );
        }
        self.event_publisher.publish_all(envelopes).await?;

        Ok(session)
    }
}
