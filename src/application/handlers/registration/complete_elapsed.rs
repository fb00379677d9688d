//! CompleteElapsedRegistrationsHandler - system sweep completing
//! confirmed registrations of ended sessions.
//!
//! Runs on a schedule (or on demand). There is no acting user; the sweep
//! records completions on behalf of the system.

use std::sync::Arc;

use crate::domain::foundation::{EventId, SerializableDomainEvent, Timestamp};
use crate::domain::registration::{
    RegistrationCompleted, RegistrationError, RegistrationStatus,
};
use crate::ports::{EventPublisher, RegistrationRepository, SessionRepository};

/// Result of one sweep run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompleteElapsedResult {
    /// Sessions whose end time had passed.
    pub sessions_swept: usize,
    /// Registrations moved confirmed -> completed.
    pub registrations_completed: usize,
}

/// Handler completing confirmed registrations once sessions end.
pub struct CompleteElapsedRegistrationsHandler {
    sessions: Arc<dyn SessionRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CompleteElapsedRegistrationsHandler {
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

    /// Sweeps every session whose end time is at or before `now`.
    ///
    /// Idempotent: already-completed registrations are skipped, so
    /// overlapping sweep runs converge on the same state.
    pub async fn handle(&self, now: Timestamp) -> Result<CompleteElapsedResult, RegistrationError> {
        let mut result = CompleteElapsedResult::default();

        for session in self.sessions.list_all().await? {
            if !session.schedule().has_ended(now) {
                continue;
            }
            result.sessions_swept += 1;

            for mut registration in self
                .registrations
                .list_by_session(session.id())
                .await?
                .into_iter()
                .filter(|r| r.status() == RegistrationStatus::Confirmed)
            {
                if !registration.complete()? {
                    continue;
                }
                self.registrations.update(&registration).await?;
                result.registrations_completed += 1;

                let event = RegistrationCompleted {
                    event_id: EventId::new(),
                    registration_id: *registration.id(),
                    session_id: *session.id(),
                    user_id: registration.user_id().clone(),
                    completed_at: now,
                };
                self.event_publisher.publish(event.to_envelope()).await?;
            }
        }

        tracing::info!(
            sessions = result.sessions_swept,
            completed = result.registrations_completed,
            "registration completion sweep finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::{InMemoryRegistrationRepository, InMemorySessionRepository};
    use crate::domain::foundation::{RegistrationId, SessionId, UserId};
    use crate::domain::registration::Registration;
    use crate::domain::session::{SessionSchedule, TrainingSession};

    fn session_on(date: &str) -> TrainingSession {
        TrainingSession::new(
            SessionId::new(),
            UserId::new("coordinator-1").unwrap(),
            "Rust Fundamentals".to_string(),
            SessionSchedule::new(
                date.parse().unwrap(),
                "10:00:00".parse().unwrap(),
                "12:00:00".parse().unwrap(),
            )
            .unwrap(),
            "Room 2B".to_string(),
            10,
        )
        .unwrap()
    }

    fn registration(session: &TrainingSession, status: RegistrationStatus) -> Registration {
        let mut reg = Registration::new(
            RegistrationId::new(),
            UserId::new("trainee-1").unwrap(),
            *session.id(),
        );
        match status {
            RegistrationStatus::Pending => {}
            RegistrationStatus::Confirmed => {
                reg.approve().unwrap();
            }
            _ => unreachable!("not constructed in these tests"),
        }
        reg
    }

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            chrono::DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&chrono::Utc),
        )
    }

    #[tokio::test]
    async fn completes_confirmed_registrations_of_ended_sessions() {
        let session = session_on("2024-06-01");
        let confirmed = registration(&session, RegistrationStatus::Confirmed);
        let pending = registration(&session, RegistrationStatus::Pending);

        let registrations = Arc::new(InMemoryRegistrationRepository::with_registrations(vec![
            confirmed.clone(),
            pending.clone(),
        ]));
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = CompleteElapsedRegistrationsHandler::new(
            Arc::new(InMemorySessionRepository::with_session(session)),
            registrations.clone(),
            bus.clone(),
        );

        let result = handler.handle(at("2024-06-02T00:00:00Z")).await.unwrap();

        assert_eq!(result.sessions_swept, 1);
        assert_eq!(result.registrations_completed, 1);

        let stored = registrations.find_by_id(confirmed.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), RegistrationStatus::Completed);

        // Pending registrations are untouched by the sweep.
        let still_pending = registrations.find_by_id(pending.id()).await.unwrap().unwrap();
        assert_eq!(still_pending.status(), RegistrationStatus::Pending);

        assert_eq!(bus.events_of_type("registration.completed").len(), 1);
    }

    #[tokio::test]
    async fn sessions_still_running_are_skipped() {
        let session = session_on("2024-06-01");
        let confirmed = registration(&session, RegistrationStatus::Confirmed);

        let registrations = Arc::new(InMemoryRegistrationRepository::with_registrations(vec![
            confirmed.clone(),
        ]));
        let handler = CompleteElapsedRegistrationsHandler::new(
            Arc::new(InMemorySessionRepository::with_session(session)),
            registrations.clone(),
            Arc::new(InMemoryEventBus::new()),
        );

        // 11:00 - the session runs until 12:00.
        let result = handler.handle(at("2024-06-01T11:00:00Z")).await.unwrap();

        assert_eq!(result.sessions_swept, 0);
        assert_eq!(result.registrations_completed, 0);

        let stored = registrations.find_by_id(confirmed.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), RegistrationStatus::Confirmed);
    }

    #[tokio::test]
    async fn sweep_is_idempotent_across_runs() {
        let session = session_on("2024-06-01");
        let confirmed = registration(&session, RegistrationStatus::Confirmed);

        let registrations = Arc::new(InMemoryRegistrationRepository::with_registrations(vec![
            confirmed,
        ]));
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = CompleteElapsedRegistrationsHandler::new(
            Arc::new(InMemorySessionRepository::with_session(session)),
            registrations,
            bus.clone(),
        );

        let first = handler.handle(at("2024-06-02T00:00:00Z")).await.unwrap();
        let second = handler.handle(at("2024-06-03T00:00:00Z")).await.unwrap();

        assert_eq!(first.registrations_completed, 1);
        assert_eq!(second.registrations_completed, 0);
        assert_eq!(bus.events_of_type("registration.completed").len(), 1);
    }
}
