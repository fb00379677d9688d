//! DeleteContentHandler - removes a course's content item.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::course::{ContentPayload, CourseError};
use crate::domain::foundation::{AuthenticatedUser, CommandMetadata, ContentId, CourseId};
use crate::ports::{ContentRepository, ContentStorage, CourseRepository, SessionRepository};

/// Command to delete a content item.
#[derive(Debug, Clone)]
pub struct DeleteContentCommand {
    pub actor: AuthenticatedUser,
    pub course_id: CourseId,
    pub content_id: ContentId,
}

/// Handler for content deletion.
///
/// Uploaded binaries are deleted from storage after the row is gone;
/// a storage miss is tolerated (the row is already deleted).
pub struct DeleteContentHandler {
    courses: Arc<dyn CourseRepository>,
    sessions: Arc<dyn SessionRepository>,
    contents: Arc<dyn ContentRepository>,
    storage: Arc<dyn ContentStorage>,
}

impl DeleteContentHandler {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        sessions: Arc<dyn SessionRepository>,
        contents: Arc<dyn ContentRepository>,
        storage: Arc<dyn ContentStorage>,
    ) -> Self {
        Self {
            courses,
            sessions,
            contents,
            storage,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteContentCommand,
        _metadata: CommandMetadata,
    ) -> Result<(), CourseError> {
        let course = self
            .courses
            .find_by_id(&cmd.course_id)
            .await?
            .ok_or_else(|| CourseError::not_found(cmd.course_id))?;

        let session = self
            .sessions
            .find_by_id(course.session_id())
            .await?
            .ok_or(CourseError::SessionNotFound)?;

        authorize(&cmd.actor, Action::EditCourseContent, &session)?;

        let contents = self.contents.list_by_course(&cmd.course_id).await?;
        let target = contents
            .iter()
            .find(|c| c.id() == &cmd.content_id)
            .ok_or_else(|| {
                CourseError::validation("content_id", "Content does not belong to this course")
            })?;

        let stored_key = match target.payload() {
            ContentPayload::File { file } | ContentPayload::Image { file } => {
                Some(file.key.clone())
            }
            _ => None,
        };

        self.contents.delete(&cmd.content_id).await?;

        if let Some(key) = stored_key {
            self.storage.delete(&key).await?;
        }

        Ok(())
    }
}
