//! ArchiveSessionHandler - Command handler for archiving sessions.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, EventId, SerializableDomainEvent, SessionId, Timestamp,
};
use crate::domain::session::{SessionArchived, SessionError, TrainingSession};
use crate::ports::{EventPublisher, SessionRepository};

/// Command to archive a session.
#[derive(Debug, Clone)]
pub struct ArchiveSessionCommand {
    pub actor: AuthenticatedUser,
    pub session_id: SessionId,
}

/// Handler for archiving sessions (soft delete).
///
/// Archived sessions disappear from active views and accept no further
/// registrations; existing registration history is preserved.
pub struct ArchiveSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ArchiveSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            sessions,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ArchiveSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<TrainingSession, SessionError> {
        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        authorize(&cmd.actor, Action::EditSession, &session)?;

        session.archive()?;
        self.sessions.update(&session).await?;

        let event = SessionArchived {
            event_id: EventId::new(),
            session_id: cmd.session_id,
            archived_by: cmd.actor.id.clone(),
            archived_at: Timestamp::now(),
        };
        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemorySessionRepository;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::session::{SessionSchedule, SessionStatus};

    fn actor(id: &str, role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), format!("{}@example.com", id), None, role)
    }

    fn fixture() -> (ArchiveSessionHandler, Arc<InMemoryEventBus>, SessionId) {
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
        let session_id = *session.id();

        let bus = Arc::new(InMemoryEventBus::new());
        let handler = ArchiveSessionHandler::new(
            Arc::new(InMemorySessionRepository::with_session(session)),
            bus.clone(),
        );
        (handler, bus, session_id)
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(UserId::new("coordinator-1").unwrap())
    }

    #[tokio::test]
    async fn archives_session_and_publishes() {
        let (handler, bus, session_id) = fixture();

        let session = handler
            .handle(
                ArchiveSessionCommand {
                    actor: actor("coordinator-1", Role::Coordinator),
                    session_id,
                },
                metadata(),
            )
            .await
            .unwrap();

        assert_eq!(session.status(), SessionStatus::Archived);
        assert!(bus.has_event("session.archived"));
    }

    #[tokio::test]
    async fn archiving_twice_fails() {
        let (handler, bus, session_id) = fixture();
        let cmd = ArchiveSessionCommand {
            actor: actor("coordinator-1", Role::Coordinator),
            session_id,
        };

        handler.handle(cmd.clone(), metadata()).await.unwrap();
        let result = handler.handle(cmd, metadata()).await;

        assert!(matches!(result, Err(SessionError::InvalidState(_))));
        assert_eq!(bus.events_of_type("session.archived").len(), 1);
    }

    #[tokio::test]
    async fn missing_session_fails() {
        let (handler, _bus, _session_id) = fixture();

        let result = handler
            .handle(
                ArchiveSessionCommand {
                    actor: actor("coordinator-1", Role::Coordinator),
                    session_id: SessionId::new(),
                },
                metadata(),
            )
            .await;

        assert!(matches!(result, Err(SessionError::NotFound(_))));
    }

    #[tokio::test]
    async fn trainee_is_forbidden() {
        let (handler, _bus, session_id) = fixture();

        let result = handler
            .handle(
                ArchiveSessionCommand {
                    actor: actor("trainee-1", Role::Trainee),
                    session_id,
                },
                metadata(),
            )
            .await;

        assert!(matches!(result, Err(SessionError::Forbidden)));
    }
}
