//! Per-trainee course completion records.

use crate::domain::foundation::{CompletionId, CourseId, StateMachine, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Progress status of a trainee's work on a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    InProgress,
    Completed,
}

impl StateMachine for CompletionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (CompletionStatus::InProgress, CompletionStatus::Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            CompletionStatus::InProgress => vec![CompletionStatus::Completed],
            CompletionStatus::Completed => vec![],
        }
    }
}

/// Completion record unique per (user, course).
///
/// Marking complete is idempotent: the unique pair constraint in the store
/// plus the no-op second call guarantee exactly one completed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCompletion {
    id: CompletionId,
    user_id: UserId,
    course_id: CourseId,
    status: CompletionStatus,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl CourseCompletion {
    /// Starts a course for a trainee.
    pub fn start(id: CompletionId, user_id: UserId, course_id: CourseId) -> Self {
        Self {
            id,
            user_id,
            course_id,
            status: CompletionStatus::InProgress,
            started_at: Timestamp::now(),
            completed_at: None,
        }
    }

    /// Reconstitute from persistence.
    pub fn reconstitute(
        id: CompletionId,
        user_id: UserId,
        course_id: CourseId,
        status: CompletionStatus,
        started_at: Timestamp,
        completed_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            user_id,
            course_id,
            status,
            started_at,
            completed_at,
        }
    }

    pub fn id(&self) -> &CompletionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    pub fn status(&self) -> CompletionStatus {
        self.status
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    /// Marks the course complete.
    ///
    /// Returns `true` if the status changed, `false` if it was already
    /// completed - never an error, and never a second completion record.
    pub fn mark_completed(&mut self) -> bool {
        if self.status == CompletionStatus::Completed {
            return false;
        }
        self.status = CompletionStatus::Completed;
        self.completed_at = Some(Timestamp::now());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion() -> CourseCompletion {
        CourseCompletion::start(
            CompletionId::new(),
            UserId::new("trainee-1").unwrap(),
            CourseId::new(),
        )
    }

    #[test]
    fn start_creates_in_progress_record() {
        let completion = completion();
        assert_eq!(completion.status(), CompletionStatus::InProgress);
        assert!(completion.completed_at().is_none());
    }

    #[test]
    fn mark_completed_sets_status_and_timestamp() {
        let mut completion = completion();
        assert!(completion.mark_completed());
        assert_eq!(completion.status(), CompletionStatus::Completed);
        assert!(completion.completed_at().is_some());
    }

    #[test]
    fn mark_completed_twice_is_noop() {
        let mut completion = completion();
        completion.mark_completed();
        let completed_at = *completion.completed_at().unwrap();

        assert!(!completion.mark_completed());
        assert_eq!(completion.completed_at(), Some(&completed_at));
    }

    #[test]
    fn completed_is_terminal() {
        assert!(CompletionStatus::Completed.is_terminal());
        assert!(!CompletionStatus::InProgress.is_terminal());
    }

    #[test]
    fn in_progress_can_only_complete() {
        assert_eq!(
            CompletionStatus::InProgress.valid_transitions(),
            vec![CompletionStatus::Completed]
        );
    }
}
