//! Course domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, ContentId, CourseId, EventId, SessionId, Timestamp, UserId,
};

use super::ContentType;

/// Published when a course is added to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCreated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the created course.
    pub course_id: CourseId,

    /// Session the course belongs to.
    pub session_id: SessionId,

    /// User who created the course.
    pub created_by: UserId,

    /// When the course was created.
    pub created_at: Timestamp,
}

domain_event!(
    CourseCreated,
    event_type = "course.created",
    aggregate_id = course_id,
    aggregate_type = "Course",
    occurred_at = created_at,
    event_id = event_id
);

/// Published when a course's active flag flips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseActiveToggled {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the toggled course.
    pub course_id: CourseId,

    /// New value of the flag.
    pub is_active: bool,

    /// User who toggled.
    pub toggled_by: UserId,

    /// When the toggle happened.
    pub toggled_at: Timestamp,
}

domain_event!(
    CourseActiveToggled,
    event_type = "course.active_toggled",
    aggregate_id = course_id,
    aggregate_type = "Course",
    occurred_at = toggled_at,
    event_id = event_id
);

/// Published when course content is created or replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseContentSaved {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the content item.
    pub content_id: ContentId,

    /// Course the content belongs to.
    pub course_id: CourseId,

    /// Content kind after the save.
    pub content_type: ContentType,

    /// True if a new row was created, false if the current one was updated.
    pub created: bool,

    /// User who saved.
    pub saved_by: UserId,

    /// When the save happened.
    pub saved_at: Timestamp,
}

domain_event!(
    CourseContentSaved,
    event_type = "course.content_saved",
    aggregate_id = course_id,
    aggregate_type = "Course",
    occurred_at = saved_at,
    event_id = event_id
);

/// Published when a trainee completes a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCompleted {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the completed course.
    pub course_id: CourseId,

    /// The completing trainee.
    pub user_id: UserId,

    /// When the completion was recorded.
    pub completed_at: Timestamp,
}

domain_event!(
    CourseCompleted,
    event_type = "course.completed",
    aggregate_id = course_id,
    aggregate_type = "Course",
    occurred_at = completed_at,
    event_id = event_id
);
