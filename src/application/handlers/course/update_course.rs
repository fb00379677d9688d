//! UpdateCourseHandler - Command handler for editing course details.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::course::{Course, CourseError};
use crate::domain::foundation::{AuthenticatedUser, CommandMetadata, CourseId};
use crate::ports::{CourseRepository, SessionRepository};

/// Command to update a course.
#[derive(Debug, Clone)]
pub struct UpdateCourseCommand {
    pub actor: AuthenticatedUser,
    pub course_id: CourseId,
    pub title: String,
    pub description: Option<String>,
    pub duration_hours: u32,
}

/// Handler for course updates.
pub struct UpdateCourseHandler {
    courses: Arc<dyn CourseRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl UpdateCourseHandler {
    pub fn new(courses: Arc<dyn CourseRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { courses, sessions }
    }

    pub async fn handle(
        &self,
        cmd: UpdateCourseCommand,
        _metadata: CommandMetadata,
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

        course.update_details(cmd.title, cmd.description, cmd.duration_hours)?;
        self.courses.update(&course).await?;

        Ok(course)
    }
}
