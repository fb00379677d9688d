//! ToggleCourseActiveHandler - flips a course's visibility flag.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::course::{Course, CourseActiveToggled, CourseError};
use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, CourseId, EventId, SerializableDomainEvent, Timestamp,
};
use crate::ports::{CourseRepository, EventPublisher, SessionRepository};

/// Command to toggle a course's active flag.
#[derive(Debug, Clone)]
pub struct ToggleCourseActiveCommand {
    pub actor: AuthenticatedUser,
    pub course_id: CourseId,
}

/// Handler for the active toggle.
pub struct ToggleCourseActiveHandler {
    courses: Arc<dyn CourseRepository>,
    sessions: Arc<dyn SessionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ToggleCourseActiveHandler {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        sessions: Arc<dyn SessionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            courses,
            sessions,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ToggleCourseActiveCommand,
        metadata: CommandMetadata,
    ) -> Result<Course, CourseError> {
        let mut course = self
            .courses
            .find_by_id(&cmd.course_id)
            .await?
            .ok_or_else(|| CourseError::not_found(cmd.course_id))?;

        let session = self
            .sessions
            .find_by_id(course.session_id())
            .await?
            .ok_or(CourseError::SessionNotFound)?;

        authorize(&cmd.actor, Action::EditCourse, &session)?;

        let is_active = course.toggle_active();
        self.courses.update(&course).await?;

        let event = CourseActiveToggled {
            event_id: EventId::new(),
            course_id: cmd.course_id,
            is_active,
            toggled_by: cmd.actor.id.clone(),
            toggled_at: Timestamp::now(),
        };
        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(course)
    }
}
