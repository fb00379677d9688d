//! Course aggregate entity.

use crate::domain::foundation::{CourseId, DomainError, SessionId, Timestamp};
use serde::{Deserialize, Serialize};

/// Maximum length for the course title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// A unit of learning content attached to one training session.
///
/// # Invariants
///
/// - `title` is 1-200 characters, non-empty
/// - `duration_hours` is at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for this course.
    id: CourseId,

    /// The session this course belongs to.
    session_id: SessionId,

    /// Course title.
    title: String,

    /// Optional description.
    description: Option<String>,

    /// Estimated duration in hours.
    duration_hours: u32,

    /// Whether the course is visible to trainees.
    is_active: bool,

    /// When the course was created.
    created_at: Timestamp,

    /// When the course was last updated.
    updated_at: Timestamp,
}

impl Course {
    /// Create a new active course.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty/too long or duration is zero
    pub fn new(
        id: CourseId,
        session_id: SessionId,
        title: String,
        description: Option<String>,
        duration_hours: u32,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_duration(duration_hours)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            session_id,
            title,
            description,
            duration_hours,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a course from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CourseId,
        session_id: SessionId,
        title: String,
        description: Option<String>,
        duration_hours: u32,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            title,
            description,
            duration_hours,
            is_active,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Update course details.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for invalid fields
    pub fn update_details(
        &mut self,
        title: String,
        description: Option<String>,
        duration_hours: u32,
    ) -> Result<(), DomainError> {
        Self::validate_title(&title)?;
        Self::validate_duration(duration_hours)?;

        self.title = title;
        self.description = description;
        self.duration_hours = duration_hours;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Toggle the active flag.
    ///
    /// Returns the new value.
    pub fn toggle_active(&mut self) -> bool {
        self.is_active = !self.is_active;
        self.updated_at = Timestamp::now();
        self.is_active
    }

    fn validate_title(title: &str) -> Result<(), DomainError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("title", "Title cannot be empty"));
        }
        if trimmed.len() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(
                "title",
                format!("Title must be {} characters or less", MAX_TITLE_LENGTH),
            ));
        }
        Ok(())
    }

    fn validate_duration(duration_hours: u32) -> Result<(), DomainError> {
        if duration_hours == 0 {
            return Err(DomainError::validation(
                "duration_hours",
                "Duration must be at least 1 hour",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_course() -> Course {
        Course::new(
            CourseId::new(),
            SessionId::new(),
            "Ownership and Borrowing".to_string(),
            None,
            3,
        )
        .unwrap()
    }

    #[test]
    fn new_course_is_active() {
        let course = test_course();
        assert!(course.is_active());
        assert_eq!(course.duration_hours(), 3);
    }

    #[test]
    fn new_course_rejects_empty_title() {
        let result = Course::new(CourseId::new(), SessionId::new(), "  ".to_string(), None, 3);
        assert!(result.is_err());
    }

    #[test]
    fn new_course_rejects_zero_duration() {
        let result = Course::new(
            CourseId::new(),
            SessionId::new(),
            "Ownership".to_string(),
            None,
            0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn update_details_replaces_fields() {
        let mut course = test_course();
        course
            .update_details(
                "Lifetimes".to_string(),
                Some("Deep dive".to_string()),
                5,
            )
            .unwrap();

        assert_eq!(course.title(), "Lifetimes");
        assert_eq!(course.description(), Some("Deep dive"));
        assert_eq!(course.duration_hours(), 5);
    }

    #[test]
    fn toggle_active_flips_and_returns_new_value() {
        let mut course = test_course();
        assert!(!course.toggle_active());
        assert!(!course.is_active());
        assert!(course.toggle_active());
        assert!(course.is_active());
    }
}
