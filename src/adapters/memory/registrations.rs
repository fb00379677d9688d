//! In-memory registration, feedback, and roster adapters.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, RegistrationId, SessionId, UserId};
use crate::domain::registration::{Feedback, Registration};
use crate::ports::{FeedbackRepository, RegistrationRepository, RosterEntry, RosterReader};

/// In-memory `RegistrationRepository`.
///
/// Enforces the unique (user, session) constraint for blocking statuses
/// the way the real store's unique index does.
#[derive(Default)]
pub struct InMemoryRegistrationRepository {
    registrations: Mutex<Vec<Registration>>,
}

impl InMemoryRegistrationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registrations(registrations: Vec<Registration>) -> Self {
        Self {
            registrations: Mutex::new(registrations),
        }
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn save(&self, registration: &Registration) -> Result<(), DomainError> {
        let mut registrations = self
            .registrations
            .lock()
            .expect("InMemoryRegistrationRepository: lock poisoned");

        let duplicate = registrations.iter().any(|r| {
            r.session_id() == registration.session_id()
                && r.user_id() == registration.user_id()
                && r.status().blocks_reenrollment()
        });
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Unique constraint violation: active registration exists for (user, session)",
            ));
        }

        registrations.push(registration.clone());
        Ok(())
    }

    async fn update(&self, registration: &Registration) -> Result<(), DomainError> {
        let mut registrations = self
            .registrations
            .lock()
            .expect("InMemoryRegistrationRepository: lock poisoned");
        match registrations.iter().position(|r| r.id() == registration.id()) {
            Some(pos) => {
                registrations[pos] = registration.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::RegistrationNotFound,
                format!("Registration not found: {}", registration.id()),
            )),
        }
    }

    async fn find_by_id(
        &self,
        id: &RegistrationId,
    ) -> Result<Option<Registration>, DomainError> {
        Ok(self
            .registrations
            .lock()
            .expect("InMemoryRegistrationRepository: lock poisoned")
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }

    async fn list_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Registration>, DomainError> {
        Ok(self
            .registrations
            .lock()
            .expect("InMemoryRegistrationRepository: lock poisoned")
            .iter()
            .filter(|r| r.session_id() == session_id)
            .cloned()
            .collect())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Registration>, DomainError> {
        Ok(self
            .registrations
            .lock()
            .expect("InMemoryRegistrationRepository: lock poisoned")
            .iter()
            .filter(|r| r.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Registration>, DomainError> {
        Ok(self
            .registrations
            .lock()
            .expect("InMemoryRegistrationRepository: lock poisoned")
            .clone())
    }
}

/// In-memory `FeedbackRepository`.
#[derive(Default)]
pub struct InMemoryFeedbackRepository {
    feedback: Mutex<Vec<Feedback>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn save(&self, feedback: &Feedback) -> Result<(), DomainError> {
        self.feedback
            .lock()
            .expect("InMemoryFeedbackRepository: lock poisoned")
            .push(feedback.clone());
        Ok(())
    }

    async fn find_by_registration(
        &self,
        registration_id: &RegistrationId,
    ) -> Result<Option<Feedback>, DomainError> {
        Ok(self
            .feedback
            .lock()
            .expect("InMemoryFeedbackRepository: lock poisoned")
            .iter()
            .find(|f| f.registration_id() == registration_id)
            .cloned())
    }
}

/// In-memory `RosterReader` over a user directory map.
pub struct InMemoryRosterReader {
    registrations: Mutex<Vec<Registration>>,
    /// user id -> (display name, email)
    directory: HashMap<String, (String, String)>,
}

impl InMemoryRosterReader {
    pub fn new(registrations: Vec<Registration>) -> Self {
        Self {
            registrations: Mutex::new(registrations),
            directory: HashMap::new(),
        }
    }

    /// Adds a user directory entry for name/email resolution.
    pub fn with_user(mut self, user_id: &str, name: &str, email: &str) -> Self {
        self.directory
            .insert(user_id.to_string(), (name.to_string(), email.to_string()));
        self
    }
}

#[async_trait]
impl RosterReader for InMemoryRosterReader {
    async fn list_roster(&self, session_id: &SessionId) -> Result<Vec<RosterEntry>, DomainError> {
        let mut entries: Vec<RosterEntry> = self
            .registrations
            .lock()
            .expect("InMemoryRosterReader: lock poisoned")
            .iter()
            .filter(|r| r.session_id() == session_id)
            .map(|r| {
                let known = self.directory.get(r.user_id().as_str());
                RosterEntry {
                    registration_id: *r.id(),
                    user_id: r.user_id().clone(),
                    display_name: known.map(|(name, _)| name.clone()),
                    email: known.map(|(_, email)| email.clone()),
                    status: r.status(),
                    registered_at: *r.registered_at(),
                }
            })
            .collect();
        entries.sort_by(|a, b| a.registered_at.cmp(&b.registered_at));
        Ok(entries)
    }
}
