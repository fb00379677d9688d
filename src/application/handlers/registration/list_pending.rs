//! ListPendingRegistrationsHandler - the coordinator's approval queue.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, Role};
use crate::domain::registration::{Registration, RegistrationError, RegistrationStatus};
use crate::ports::{RegistrationRepository, SessionRepository};

/// Query for pending registrations awaiting a decision.
///
/// Coordinators see the queue of their own sessions; admins see all.
#[derive(Debug, Clone)]
pub struct ListPendingRegistrationsQuery {
    pub actor: AuthenticatedUser,
}

/// Handler for the pending-registration queue.
pub struct ListPendingRegistrationsHandler {
    sessions: Arc<dyn SessionRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl ListPendingRegistrationsHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            sessions,
            registrations,
        }
    }

    pub async fn handle(
        &self,
        query: ListPendingRegistrationsQuery,
    ) -> Result<Vec<Registration>, RegistrationError> {
        let sessions = if query.actor.role.is_admin() {
            self.sessions.list_all().await?
        } else if query.actor.role == Role::Coordinator {
            self.sessions.list_by_coordinator(&query.actor.id).await?
        } else {
            return Err(RegistrationError::Forbidden);
        };

        let mut pending = Vec::new();
        for session in &sessions {
            pending.extend(
                self.registrations
                    .list_by_session(session.id())
                    .await?
                    .into_iter()
                    .filter(|r| r.status() == RegistrationStatus::Pending),
            );
        }

        // Oldest first - the queue is worked front to back.
        pending.sort_by(|a, b| a.registered_at().cmp(b.registered_at()));
        Ok(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryRegistrationRepository, InMemorySessionRepository};
    use crate::domain::foundation::{RegistrationId, Role, SessionId, UserId};
    use crate::domain::session::{SessionSchedule, TrainingSession};

    fn actor(id: &str, role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), format!("{}@example.com", id), None, role)
    }

    fn session_of(coordinator: &str) -> TrainingSession {
        TrainingSession::new(
            SessionId::new(),
            UserId::new(coordinator).unwrap(),
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
        .unwrap()
    }

    fn pending(session: &TrainingSession, user: &str) -> Registration {
        Registration::new(
            RegistrationId::new(),
            UserId::new(user).unwrap(),
            *session.id(),
        )
    }

    #[tokio::test]
    async fn coordinator_sees_only_own_queue() {
        let own = session_of("coordinator-1");
        let foreign = session_of("coordinator-2");
        let own_reg = pending(&own, "trainee-1");
        let foreign_reg = pending(&foreign, "trainee-2");

        let handler = ListPendingRegistrationsHandler::new(
            Arc::new(InMemorySessionRepository::with_sessions(vec![own, foreign])),
            Arc::new(InMemoryRegistrationRepository::with_registrations(vec![
                own_reg.clone(),
                foreign_reg,
            ])),
        );

        let queue = handler
            .handle(ListPendingRegistrationsQuery {
                actor: actor("coordinator-1", Role::Coordinator),
            })
            .await
            .unwrap();

        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].id(), own_reg.id());
    }

    #[tokio::test]
    async fn admin_sees_every_queue() {
        let a = session_of("coordinator-1");
        let b = session_of("coordinator-2");
        let regs = vec![pending(&a, "trainee-1"), pending(&b, "trainee-2")];

        let handler = ListPendingRegistrationsHandler::new(
            Arc::new(InMemorySessionRepository::with_sessions(vec![a, b])),
            Arc::new(InMemoryRegistrationRepository::with_registrations(regs)),
        );

        let queue = handler
            .handle(ListPendingRegistrationsQuery {
                actor: actor("admin-1", Role::Admin),
            })
            .await
            .unwrap();

        assert_eq!(queue.len(), 2);
    }

    #[tokio::test]
    async fn decided_registrations_are_excluded() {
        let session = session_of("coordinator-1");
        let mut confirmed = pending(&session, "trainee-1");
        confirmed.approve().unwrap();

        let handler = ListPendingRegistrationsHandler::new(
            Arc::new(InMemorySessionRepository::with_session(session)),
            Arc::new(InMemoryRegistrationRepository::with_registrations(vec![
                confirmed,
            ])),
        );

        let queue = handler
            .handle(ListPendingRegistrationsQuery {
                actor: actor("coordinator-1", Role::Coordinator),
            })
            .await
            .unwrap();

        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn trainee_is_forbidden() {
        let handler = ListPendingRegistrationsHandler::new(
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(InMemoryRegistrationRepository::new()),
        );

        let result = handler
            .handle(ListPendingRegistrationsQuery {
                actor: actor("trainee-1", Role::Trainee),
            })
            .await;

        assert!(matches!(result, Err(RegistrationError::Forbidden)));
    }
}
