//! SaveContentHandler - create-or-update for course content.
//!
//! The create-vs-update branch comes from the domain's `save_disposition`:
//! no content yet means create, otherwise the current item is replaced in
//! place. Binary payloads (image, file) have already been streamed to
//! storage by the HTTP adapter; this handler persists the reference.

use std::sync::Arc;

use crate::domain::access::{authorize, Action};
use crate::domain::course::{
    save_disposition, ContentPayload, CourseContent, CourseContentSaved, CourseError,
    SaveDisposition,
};
use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, ContentId, CourseId, EventId, SerializableDomainEvent,
    Timestamp,
};
use crate::ports::{ContentRepository, CourseRepository, EventPublisher, SessionRepository};

/// Command to save (create or update) a course's content.
#[derive(Debug, Clone)]
pub struct SaveContentCommand {
    pub actor: AuthenticatedUser,
    pub course_id: CourseId,
    pub payload: ContentPayload,
}

/// Result of a content save.
#[derive(Debug, Clone)]
pub struct SaveContentResult {
    pub content: CourseContent,
    /// True if a new row was created, false if the current one was updated.
    pub created: bool,
}

/// Handler for saving course content.
pub struct SaveContentHandler {
    courses: Arc<dyn CourseRepository>,
    sessions: Arc<dyn SessionRepository>,
    contents: Arc<dyn ContentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SaveContentHandler {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        sessions: Arc<dyn SessionRepository>,
        contents: Arc<dyn ContentRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            courses,
            sessions,
            contents,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SaveContentCommand,
        metadata: CommandMetadata,
    ) -> Result<SaveContentResult, CourseError> {
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

        let existing = self.contents.list_by_course(&cmd.course_id).await?;
        let (content, created) = match save_disposition(&existing) {
            SaveDisposition::Create => {
                let content =
                    CourseContent::new(ContentId::new(), cmd.course_id, cmd.payload)?;
                self.contents.save(&content).await?;
                (content, true)
            }
            SaveDisposition::Update(current_id) => {
                let mut content = existing
                    .into_iter()
                    .find(|c| c.id() == &current_id)
                    .expect("save_disposition returned an id from the collection");
                content.replace_payload(cmd.payload)?;
                self.contents.update(&content).await?;
                (content, false)
            }
        };

        let event = CourseContentSaved {
            event_id: EventId::new(),
            content_id: *content.id(),
            course_id: cmd.course_id,
            content_type: content.content_type(),
            created,
            saved_by: cmd.actor.id.clone(),
            saved_at: Timestamp::now(),
        };
        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(SaveContentResult { content, created })
    }
}
