//! TrainingSession aggregate entity.
//!
//! Sessions are created and owned by a coordinator. Courses and
//! registrations reference sessions by ID and are managed by their own
//! modules.

use crate::domain::foundation::{
    CategoryId, DomainError, ErrorCode, SessionId, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

use super::{SessionSchedule, SessionStatus};

/// Maximum length for the skill name.
pub const MAX_SKILL_NAME_LENGTH: usize = 200;

/// Training session aggregate.
///
/// # Invariants
///
/// - `skill_name` is 1-200 characters, non-empty
/// - `max_participants` is at least 1
/// - Archived sessions cannot be modified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Unique identifier for this session.
    id: SessionId,

    /// Coordinator who owns this session.
    coordinator_id: UserId,

    /// Skill being taught.
    skill_name: String,

    /// Optional description.
    description: Option<String>,

    /// Date and time window.
    schedule: SessionSchedule,

    /// Where the session takes place.
    location: String,

    /// Capacity bound over pending + confirmed registrations.
    max_participants: u32,

    /// Current status (Active or Archived).
    status: SessionStatus,

    /// Assigned trainer, if any.
    trainer_id: Option<UserId>,

    /// Category, if any.
    category_id: Option<CategoryId>,

    /// When the session was created.
    created_at: Timestamp,

    /// When the session was last updated.
    updated_at: Timestamp,
}

impl TrainingSession {
    /// Create a new active session.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if skill name is empty/too long, location is
    ///   empty, or capacity is zero
    pub fn new(
        id: SessionId,
        coordinator_id: UserId,
        skill_name: String,
        schedule: SessionSchedule,
        location: String,
        max_participants: u32,
    ) -> Result<Self, DomainError> {
        Self::validate_skill_name(&skill_name)?;
        Self::validate_location(&location)?;
        Self::validate_capacity(max_participants)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            coordinator_id,
            skill_name,
            description: None,
            schedule,
            location,
            max_participants,
            status: SessionStatus::Active,
            trainer_id: None,
            category_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Builder: sets the description at construction time.
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Reconstitute a session from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        coordinator_id: UserId,
        skill_name: String,
        description: Option<String>,
        schedule: SessionSchedule,
        location: String,
        max_participants: u32,
        status: SessionStatus,
        trainer_id: Option<UserId>,
        category_id: Option<CategoryId>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            coordinator_id,
            skill_name,
            description,
            schedule,
            location,
            max_participants,
            status,
            trainer_id,
            category_id,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the owning coordinator's user ID.
    pub fn coordinator_id(&self) -> &UserId {
        &self.coordinator_id
    }

    /// Returns the skill name.
    pub fn skill_name(&self) -> &str {
        &self.skill_name
    }

    /// Returns the session description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the schedule.
    pub fn schedule(&self) -> &SessionSchedule {
        &self.schedule
    }

    /// Returns the location.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the capacity bound.
    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }

    /// Returns the current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the assigned trainer, if any.
    pub fn trainer_id(&self) -> Option<&UserId> {
        self.trainer_id.as_ref()
    }

    /// Returns the category, if any.
    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category_id.as_ref()
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks if the given user is the owning coordinator.
    pub fn is_coordinator(&self, user_id: &UserId) -> bool {
        &self.coordinator_id == user_id
    }

    /// Checks if the given user is the assigned trainer.
    pub fn is_trainer(&self, user_id: &UserId) -> bool {
        self.trainer_id.as_ref() == Some(user_id)
    }

    /// Time-aware finished check, delegated to the schedule.
    pub fn is_finished(&self, now: Timestamp) -> bool {
        self.schedule.is_finished(now)
    }

    /// Returns true if the session is archived.
    pub fn is_archived(&self) -> bool {
        self.status == SessionStatus::Archived
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Update session details.
    ///
    /// # Errors
    ///
    /// - `SessionArchived` if session is archived
    /// - `ValidationFailed` for invalid fields
    pub fn update_details(
        &mut self,
        skill_name: String,
        description: Option<String>,
        schedule: SessionSchedule,
        location: String,
        max_participants: u32,
    ) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        Self::validate_skill_name(&skill_name)?;
        Self::validate_location(&location)?;
        Self::validate_capacity(max_participants)?;

        self.skill_name = skill_name;
        self.description = description;
        self.schedule = schedule;
        self.location = location;
        self.max_participants = max_participants;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Assign (or replace) the trainer.
    ///
    /// Returns the previously assigned trainer, if any.
    ///
    /// # Errors
    ///
    /// - `SessionArchived` if session is archived
    pub fn assign_trainer(&mut self, trainer_id: UserId) -> Result<Option<UserId>, DomainError> {
        self.ensure_mutable()?;

        let previous = self.trainer_id.replace(trainer_id);
        self.updated_at = Timestamp::now();
        Ok(previous)
    }

    /// Set or clear the category.
    ///
    /// # Errors
    ///
    /// - `SessionArchived` if session is archived
    pub fn set_category(&mut self, category_id: Option<CategoryId>) -> Result<(), DomainError> {
        self.ensure_mutable()?;

        self.category_id = category_id;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Archive the session (soft delete).
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if already archived
    pub fn archive(&mut self) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&SessionStatus::Archived) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Session is already archived",
            ));
        }

        self.status = SessionStatus::Archived;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates that the session can be modified.
    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::SessionArchived,
                "Cannot modify an archived session",
            ))
        }
    }

    fn validate_skill_name(skill_name: &str) -> Result<(), DomainError> {
        let trimmed = skill_name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                "skill_name",
                "Skill name cannot be empty",
            ));
        }
        if trimmed.len() > MAX_SKILL_NAME_LENGTH {
            return Err(DomainError::validation(
                "skill_name",
                format!(
                    "Skill name must be {} characters or less",
                    MAX_SKILL_NAME_LENGTH
                ),
            ));
        }
        Ok(())
    }

    fn validate_location(location: &str) -> Result<(), DomainError> {
        if location.trim().is_empty() {
            return Err(DomainError::validation(
                "location",
                "Location cannot be empty",
            ));
        }
        Ok(())
    }

    fn validate_capacity(max_participants: u32) -> Result<(), DomainError> {
        if max_participants == 0 {
            return Err(DomainError::validation(
                "max_participants",
                "Capacity must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator() -> UserId {
        UserId::new("coordinator-1").unwrap()
    }

    fn schedule() -> SessionSchedule {
        SessionSchedule::new(
            "2030-06-01".parse().unwrap(),
            "10:00:00".parse().unwrap(),
            "12:00:00".parse().unwrap(),
        )
        .unwrap()
    }

    fn test_session() -> TrainingSession {
        TrainingSession::new(
            SessionId::new(),
            coordinator(),
            "Rust Fundamentals".to_string(),
            schedule(),
            "Room 2B".to_string(),
            12,
        )
        .unwrap()
    }

    // Construction tests

    #[test]
    fn new_session_is_active() {
        let session = test_session();
        assert_eq!(session.status(), SessionStatus::Active);
    }

    #[test]
    fn new_session_has_no_trainer_or_category() {
        let session = test_session();
        assert!(session.trainer_id().is_none());
        assert!(session.category_id().is_none());
    }

    #[test]
    fn new_session_rejects_empty_skill_name() {
        let result = TrainingSession::new(
            SessionId::new(),
            coordinator(),
            "  ".to_string(),
            schedule(),
            "Room 2B".to_string(),
            12,
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_session_rejects_too_long_skill_name() {
        let result = TrainingSession::new(
            SessionId::new(),
            coordinator(),
            "x".repeat(MAX_SKILL_NAME_LENGTH + 1),
            schedule(),
            "Room 2B".to_string(),
            12,
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_session_rejects_empty_location() {
        let result = TrainingSession::new(
            SessionId::new(),
            coordinator(),
            "Rust Fundamentals".to_string(),
            schedule(),
            "".to_string(),
            12,
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_session_rejects_zero_capacity() {
        let result = TrainingSession::new(
            SessionId::new(),
            coordinator(),
            "Rust Fundamentals".to_string(),
            schedule(),
            "Room 2B".to_string(),
            0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn with_description_sets_initial_description() {
        let session = test_session().with_description(Some("Intro course".to_string()));
        assert_eq!(session.description(), Some("Intro course"));
    }

    // Update tests

    #[test]
    fn update_details_replaces_fields() {
        let mut session = test_session();
        session
            .update_details(
                "Advanced Rust".to_string(),
                Some("Lifetimes and traits".to_string()),
                schedule(),
                "Room 4A".to_string(),
                8,
            )
            .unwrap();

        assert_eq!(session.skill_name(), "Advanced Rust");
        assert_eq!(session.description(), Some("Lifetimes and traits"));
        assert_eq!(session.location(), "Room 4A");
        assert_eq!(session.max_participants(), 8);
    }

    #[test]
    fn update_details_fails_when_archived() {
        let mut session = test_session();
        session.archive().unwrap();
        let result = session.update_details(
            "Advanced Rust".to_string(),
            None,
            schedule(),
            "Room 4A".to_string(),
            8,
        );
        assert!(result.is_err());
    }

    // Trainer tests

    #[test]
    fn assign_trainer_returns_previous() {
        let mut session = test_session();
        let first = UserId::new("trainer-1").unwrap();
        let second = UserId::new("trainer-2").unwrap();

        assert_eq!(session.assign_trainer(first.clone()).unwrap(), None);
        assert_eq!(session.assign_trainer(second.clone()).unwrap(), Some(first));
        assert!(session.is_trainer(&second));
    }

    #[test]
    fn assign_trainer_fails_when_archived() {
        let mut session = test_session();
        session.archive().unwrap();
        let result = session.assign_trainer(UserId::new("trainer-1").unwrap());
        assert!(result.is_err());
    }

    // Archive tests

    #[test]
    fn archive_changes_status() {
        let mut session = test_session();
        session.archive().unwrap();
        assert_eq!(session.status(), SessionStatus::Archived);
        assert!(session.is_archived());
    }

    #[test]
    fn archive_twice_fails() {
        let mut session = test_session();
        session.archive().unwrap();
        assert!(session.archive().is_err());
    }

    // Ownership tests

    #[test]
    fn coordinator_is_recognized() {
        let session = test_session();
        assert!(session.is_coordinator(&coordinator()));
        assert!(!session.is_coordinator(&UserId::new("someone-else").unwrap()));
    }

    #[test]
    fn is_trainer_false_when_unassigned() {
        let session = test_session();
        assert!(!session.is_trainer(&UserId::new("trainer-1").unwrap()));
    }

    // Finished check delegation

    #[test]
    fn is_finished_delegates_to_schedule() {
        let session = test_session();
        // Schedule is in 2030; not finished now.
        assert!(!session.is_finished(Timestamp::now()));
    }
}
