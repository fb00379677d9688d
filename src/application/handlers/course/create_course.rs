//! CreateCourseHandler - Command handler for adding courses to sessions.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::course::{Course, CourseCreated, CourseError};
use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, CourseId, EventId, SerializableDomainEvent, SessionId,
};
use crate::ports::{CourseRepository, EventPublisher, SessionRepository};

/// Command to create a course in a session.
#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    pub actor: AuthenticatedUser,
    pub session_id: SessionId,
    pub title: String,
    pub description: Option<String>,
    pub duration_hours: u32,
}

/// Handler for creating courses.
pub struct CreateCourseHandler {
    sessions: Arc<dyn SessionRepository>,
    courses: Arc<dyn CourseRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateCourseHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        courses: Arc<dyn CourseRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            sessions,
            courses,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateCourseCommand,
        metadata: CommandMetadata,
    ) -> Result<Course, CourseError> {
        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(CourseError::SessionNotFound)?;

        authorize(&cmd.actor, Action::EditCourse, &session)?;

        let course = Course::new(
            CourseId::new(),
            cmd.session_id,
            cmd.title,
            cmd.description,
            cmd.duration_hours,
        )?;
        self.courses.save(&course).await?;

        let event = CourseCreated {
            event_id: EventId::new(),
            course_id: *course.id(),
            session_id: cmd.session_id,
            created_by: cmd.actor.id.clone(),
            created_at: *course.created_at(),
        };
        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(course)
    }
}
