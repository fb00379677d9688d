//! MarkCourseCompleteHandler - idempotent course completion.

use std::sync::Arc;

use crate::domain::course::{CourseCompleted, CourseCompletion, CourseError};
use crate::domain::foundation::{
    AuthenticatedUser, CommandMetadata, CompletionId, CourseId, EventId, Role,
    SerializableDomainEvent, Timestamp,
};
use crate::ports::{CompletionRepository, CourseRepository, EventPublisher};

/// Command for a trainee to mark a course complete for themself.
#[derive(Debug, Clone)]
pub struct MarkCourseCompleteCommand {
    pub actor: AuthenticatedUser,
    pub course_id: CourseId,
}

/// Handler for marking courses complete.
///
/// Exactly one completion record per (user, course): a missing record is
/// created completed, an in-progress one is transitioned, a completed one
/// is returned untouched. Calling twice never duplicates a row.
pub struct MarkCourseCompleteHandler {
    courses: Arc<dyn CourseRepository>,
    completions: Arc<dyn CompletionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl MarkCourseCompleteHandler {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        completions: Arc<dyn CompletionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            courses,
            completions,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: MarkCourseCompleteCommand,
        metadata: CommandMetadata,
    ) -> Result<CourseCompletion, CourseError> {
        if cmd.actor.role != Role::Trainee {
            return Err(CourseError::Forbidden);
        }

        self.courses
            .find_by_id(&cmd.course_id)
            .await?
            .ok_or_else(|| CourseError::not_found(cmd.course_id))?;

        let existing = self
            .completions
            .find_by_user_and_course(&cmd.actor.id, &cmd.course_id)
            .await?;

        let (completion, changed) = match existing {
            Some(mut completion) => {
                let changed = completion.mark_completed();
                if changed {
                    self.completions.update(&completion).await?;
                }
                (completion, changed)
            }
            None => {
                let mut completion = CourseCompletion::start(
                    CompletionId::new(),
                    cmd.actor.id.clone(),
                    cmd.course_id,
                );
                completion.mark_completed();
                self.completions.save(&completion).await?;
                (completion, true)
            }
        };

        if changed {
            let event = CourseCompleted {
                event_id: EventId::new(),
                course_id: cmd.course_id,
                user_id: cmd.actor.id.clone(),
                completed_at: Timestamp::now(),
            };
            let envelope = event
                .to_envelope()
                .with_correlation_id(metadata.correlation_id())
                .with_user_id(metadata.user_id.to_string());
            self.event_publisher.publish(envelope).await?;
        }

        Ok(completion)
    }
}
