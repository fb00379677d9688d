//! GetRosterHandler - registered-trainee list for a session.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::foundation::{AuthenticatedUser, SessionId};
use crate::domain::registration::RegistrationError;
use crate::ports::{RosterEntry, RosterReader, SessionRepository};

/// Query for a session's roster.
#[derive(Debug, Clone)]
pub struct GetRosterQuery {
    pub actor: AuthenticatedUser,
    pub session_id: SessionId,
}

/// Handler for the registered-trainee list.
pub struct GetRosterHandler {
    sessions: Arc<dyn SessionRepository>,
    roster: Arc<dyn RosterReader>,
}

impl GetRosterHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, roster: Arc<dyn RosterReader>) -> Self {
        Self { sessions, roster }
    }

    pub async fn handle(
        &self,
        query: GetRosterQuery,
    ) -> Result<Vec<RosterEntry>, RegistrationError> {
        let session = self
            .sessions
            .find_by_id(&query.session_id)
            .await?
            .ok_or(RegistrationError::SessionNotFound)?;

        authorize(&query.actor, Action::ViewRoster, &session)?;

        Ok(self.roster.list_roster(&query.session_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryRosterReader, InMemorySessionRepository};
    use crate::domain::foundation::{RegistrationId, Role, UserId};
    use crate::domain::registration::Registration;
    use crate::domain::session::{SessionSchedule, TrainingSession};

    fn actor(id: &str, role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), format!("{}@example.com", id), None, role)
    }

    fn fixture() -> (GetRosterHandler, SessionId) {
        let mut session = TrainingSession::new(
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
        session
            .assign_trainer(UserId::new("trainer-1").unwrap())
            .unwrap();
        let session_id = *session.id();

        let registration = Registration::new(
            RegistrationId::new(),
            UserId::new("trainee-1").unwrap(),
            session_id,
        );

        let handler = GetRosterHandler::new(
            Arc::new(InMemorySessionRepository::with_session(session)),
            Arc::new(
                InMemoryRosterReader::new(vec![registration]).with_user(
                    "trainee-1",
                    "Alice",
                    "alice@example.com",
                ),
            ),
        );
        (handler, session_id)
    }

    #[tokio::test]
    async fn owning_coordinator_reads_roster() {
        let (handler, session_id) = fixture();

        let roster = handler
            .handle(GetRosterQuery {
                actor: actor("coordinator-1", Role::Coordinator),
                session_id,
            })
            .await
            .unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].display_name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn assigned_trainer_reads_roster() {
        let (handler, session_id) = fixture();

        let result = handler
            .handle(GetRosterQuery {
                actor: actor("trainer-1", Role::Trainer),
                session_id,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn trainee_is_forbidden() {
        let (handler, session_id) = fixture();

        let result = handler
            .handle(GetRosterQuery {
                actor: actor("trainee-1", Role::Trainee),
                session_id,
            })
            .await;

        assert!(matches!(result, Err(RegistrationError::Forbidden)));
    }

    #[tokio::test]
    async fn unknown_session_fails() {
        let (handler, _session_id) = fixture();

        let result = handler
            .handle(GetRosterQuery {
                actor: actor("coordinator-1", Role::Coordinator),
                session_id: SessionId::new(),
            })
            .await;

        assert!(matches!(result, Err(RegistrationError::SessionNotFound)));
    }
}
