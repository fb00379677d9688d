//! In-memory session and category repositories.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{CategoryId, DomainError, ErrorCode, SessionId, UserId};
use crate::domain::session::{Category, SessionStatus, TrainingSession};
use crate::ports::{CategoryRepository, SessionRepository};

/// In-memory `SessionRepository`.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: Mutex<Vec<TrainingSession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with a session.
    pub fn with_session(session: TrainingSession) -> Self {
        Self {
            sessions: Mutex::new(vec![session]),
        }
    }

    /// Seeds the repository with several sessions.
    pub fn with_sessions(sessions: Vec<TrainingSession>) -> Self {
        Self {
            sessions: Mutex::new(sessions),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &TrainingSession) -> Result<(), DomainError> {
        self.sessions
            .lock()
            .expect("InMemorySessionRepository: lock poisoned")
            .push(session.clone());
        Ok(())
    }

    async fn update(&self, session: &TrainingSession) -> Result<(), DomainError> {
        let mut sessions = self
            .sessions
            .lock()
            .expect("InMemorySessionRepository: lock poisoned");
        match sessions.iter().position(|s| s.id() == session.id()) {
            Some(pos) => {
                sessions[pos] = session.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<TrainingSession>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .expect("InMemorySessionRepository: lock poisoned")
            .iter()
            .find(|s| s.id() == id)
            .cloned())
    }

    async fn list_active(&self) -> Result<Vec<TrainingSession>, DomainError> {
        let mut active: Vec<TrainingSession> = self
            .sessions
            .lock()
            .expect("InMemorySessionRepository: lock poisoned")
            .iter()
            .filter(|s| s.status() == SessionStatus::Active)
            .cloned()
            .collect();
        active.sort_by(|a, b| b.schedule().date().cmp(&a.schedule().date()));
        Ok(active)
    }

    async fn list_all(&self) -> Result<Vec<TrainingSession>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .expect("InMemorySessionRepository: lock poisoned")
            .clone())
    }

    async fn list_by_coordinator(
        &self,
        coordinator_id: &UserId,
    ) -> Result<Vec<TrainingSession>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .expect("InMemorySessionRepository: lock poisoned")
            .iter()
            .filter(|s| s.is_coordinator(coordinator_id))
            .cloned()
            .collect())
    }
}

/// In-memory `CategoryRepository`.
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(categories),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn save(&self, category: &Category) -> Result<(), DomainError> {
        self.categories
            .lock()
            .expect("InMemoryCategoryRepository: lock poisoned")
            .push(category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        let mut categories = self
            .categories
            .lock()
            .expect("InMemoryCategoryRepository: lock poisoned");
        match categories.iter().position(|c| c.id() == category.id()) {
            Some(pos) => {
                categories[pos] = category.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::CategoryNotFound,
                format!("Category not found: {}", category.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        Ok(self
            .categories
            .lock()
            .expect("InMemoryCategoryRepository: lock poisoned")
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Category>, DomainError> {
        let mut categories = self
            .categories
            .lock()
            .expect("InMemoryCategoryRepository: lock poisoned")
            .clone();
        categories.sort_by_key(|c| !c.is_active());
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::SessionSchedule;

    fn session() -> TrainingSession {
        TrainingSession::new(
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
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find_round_trips() {
        let repo = InMemorySessionRepository::new();
        let session = session();

        repo.save(&session).await.unwrap();
        let found = repo.find_by_id(session.id()).await.unwrap();
        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn update_of_missing_session_fails() {
        let repo = InMemorySessionRepository::new();
        let result = repo.update(&session()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn list_active_excludes_archived() {
        let mut archived = session();
        archived.archive().unwrap();
        let repo =
            InMemorySessionRepository::with_sessions(vec![session(), archived]);

        let active = repo.list_active().await.unwrap();
        assert_eq!(active.len(), 1);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn list_by_coordinator_filters_ownership() {
        let repo = InMemorySessionRepository::with_session(session());

        let own = repo
            .list_by_coordinator(&UserId::new("coordinator-1").unwrap())
            .await
            .unwrap();
        assert_eq!(own.len(), 1);

        let other = repo
            .list_by_coordinator(&UserId::new("coordinator-2").unwrap())
            .await
            .unwrap();
        assert!(other.is_empty());
    }
}
