//! CreateSessionHandler - Command handler for creating sessions.

use std::sync::Arc;

use crate::domain::access::{scope_for, Action, Scope};
use crate::domain::foundation::{
    AuthenticatedUser, CategoryId, CommandMetadata, EventId, SerializableDomainEvent, SessionId,
    UserId,
};
use crate::domain::session::{SessionCreated, SessionError, SessionSchedule, TrainingSession};
use crate::ports::{EventPublisher, SessionRepository};

/// Command to create a new training session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub actor: AuthenticatedUser,
    pub skill_name: String,
    pub description: Option<String>,
    pub schedule: SessionSchedule,
    pub location: String,
    pub max_participants: u32,
    pub trainer_id: Option<UserId>,
    pub category_id: Option<CategoryId>,
}

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateSessionResult {
    pub session: TrainingSession,
}

/// Handler for creating sessions.
///
/// The new session is owned by the acting coordinator.
pub struct CreateSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            sessions,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateSessionResult, SessionError> {
        // There is no session to ground the scope against yet; creation is
        // allowed for every role whose EditSession cell is not Denied.
        if scope_for(cmd.actor.role, Action::EditSession) == Scope::Denied {
            return Err(SessionError::Forbidden);
        }

        let mut session = TrainingSession::new(
            SessionId::new(),
            cmd.actor.id.clone(),
            cmd.skill_name,
            cmd.schedule,
            cmd.location,
            cmd.max_participants,
        )?
        .with_description(cmd.description);
        if let Some(trainer_id) = cmd.trainer_id {
            session.assign_trainer(trainer_id)?;
        }
        session.set_category(cmd.category_id)?;

        self.sessions.save(&session).await?;

        let event = SessionCreated {
            event_id: EventId::new(),
            session_id: *session.id(),
            coordinator_id: cmd.actor.id.clone(),
            skill_name: session.skill_name().to_string(),
            created_at: *session.created_at(),
        };
        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(CreateSessionResult { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemorySessionRepository;
    use crate::domain::foundation::Role;
    use crate::domain::session::SessionStatus;

    fn actor(id: &str, role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), format!("{}@example.com", id), None, role)
    }

    fn schedule() -> SessionSchedule {
        SessionSchedule::new(
            "2030-06-01".parse().unwrap(),
            "10:00:00".parse().unwrap(),
            "12:00:00".parse().unwrap(),
        )
        .unwrap()
    }

    fn command(actor: AuthenticatedUser) -> CreateSessionCommand {
        CreateSessionCommand {
            actor,
            skill_name: "Rust Fundamentals".to_string(),
            description: Some("Intro to ownership".to_string()),
            schedule: schedule(),
            location: "Room 2B".to_string(),
            max_participants: 12,
            trainer_id: Some(UserId::new("trainer-1").unwrap()),
            category_id: None,
        }
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(UserId::new("coordinator-1").unwrap())
    }

    #[tokio::test]
    async fn coordinator_creates_owned_session() {
        let sessions = Arc::new(InMemorySessionRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = CreateSessionHandler::new(sessions.clone(), bus.clone());

        let result = handler
            .handle(command(actor("coordinator-1", Role::Coordinator)), metadata())
            .await
            .unwrap();

        assert_eq!(result.session.status(), SessionStatus::Active);
        assert!(result
            .session
            .is_coordinator(&UserId::new("coordinator-1").unwrap()));
        assert_eq!(
            result.session.trainer_id(),
            Some(&UserId::new("trainer-1").unwrap())
        );
        assert_eq!(result.session.description(), Some("Intro to ownership"));

        assert_eq!(sessions.list_all().await.unwrap().len(), 1);
        assert!(bus.has_event("session.created"));
    }

    #[tokio::test]
    async fn admin_may_create_sessions() {
        let handler = CreateSessionHandler::new(
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(InMemoryEventBus::new()),
        );

        let result = handler
            .handle(command(actor("admin-1", Role::Admin)), metadata())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn trainee_and_trainer_are_forbidden() {
        let bus = Arc::new(InMemoryEventBus::new());
        let handler =
            CreateSessionHandler::new(Arc::new(InMemorySessionRepository::new()), bus.clone());

        for role in [Role::Trainee, Role::Trainer] {
            let result = handler
                .handle(command(actor("someone", role)), metadata())
                .await;
            assert!(matches!(result, Err(SessionError::Forbidden)));
        }
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn invalid_capacity_is_rejected() {
        let handler = CreateSessionHandler::new(
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(InMemoryEventBus::new()),
        );

        let mut cmd = command(actor("coordinator-1", Role::Coordinator));
        cmd.max_participants = 0;

        let result = handler.handle(cmd, metadata()).await;
        assert!(matches!(result, Err(SessionError::ValidationFailed { .. })));
    }
}
