//! In-memory course, content, and completion repositories.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::course::{Course, CourseCompletion, CourseContent};
use crate::domain::foundation::{ContentId, CourseId, DomainError, ErrorCode, SessionId, UserId};
use crate::ports::{CompletionRepository, ContentRepository, CourseRepository};

/// In-memory `CourseRepository`.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: Mutex<Vec<Course>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_course(course: Course) -> Self {
        Self {
            courses: Mutex::new(vec![course]),
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn save(&self, course: &Course) -> Result<(), DomainError> {
        self.courses
            .lock()
            .expect("InMemoryCourseRepository: lock poisoned")
            .push(course.clone());
        Ok(())
    }

    async fn update(&self, course: &Course) -> Result<(), DomainError> {
        let mut courses = self
            .courses
            .lock()
            .expect("InMemoryCourseRepository: lock poisoned");
        match courses.iter().position(|c| c.id() == course.id()) {
            Some(pos) => {
                courses[pos] = course.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::CourseNotFound,
                format!("Course not found: {}", course.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        Ok(self
            .courses
            .lock()
            .expect("InMemoryCourseRepository: lock poisoned")
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    async fn list_by_session(&self, session_id: &SessionId) -> Result<Vec<Course>, DomainError> {
        Ok(self
            .courses
            .lock()
            .expect("InMemoryCourseRepository: lock poisoned")
            .iter()
            .filter(|c| c.session_id() == session_id)
            .cloned()
            .collect())
    }
}

/// In-memory `ContentRepository`.
#[derive(Default)]
pub struct InMemoryContentRepository {
    contents: Mutex<Vec<CourseContent>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: Vec<CourseContent>) -> Self {
        Self {
            contents: Mutex::new(contents),
        }
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn save(&self, content: &CourseContent) -> Result<(), DomainError> {
        self.contents
            .lock()
            .expect("InMemoryContentRepository: lock poisoned")
            .push(content.clone());
        Ok(())
    }

    async fn update(&self, content: &CourseContent) -> Result<(), DomainError> {
        let mut contents = self
            .contents
            .lock()
            .expect("InMemoryContentRepository: lock poisoned");
        match contents.iter().position(|c| c.id() == content.id()) {
            Some(pos) => {
                contents[pos] = content.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ContentNotFound,
                format!("Content not found: {}", content.id()),
            )),
        }
    }

    async fn list_by_course(
        &self,
        course_id: &CourseId,
    ) -> Result<Vec<CourseContent>, DomainError> {
        Ok(self
            .contents
            .lock()
            .expect("InMemoryContentRepository: lock poisoned")
            .iter()
            .filter(|c| c.course_id() == course_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &ContentId) -> Result<(), DomainError> {
        let mut contents = self
            .contents
            .lock()
            .expect("InMemoryContentRepository: lock poisoned");
        match contents.iter().position(|c| c.id() == id) {
            Some(pos) => {
                contents.remove(pos);
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ContentNotFound,
                format!("Content not found: {}", id),
            )),
        }
    }
}

/// In-memory `CompletionRepository`.
#[derive(Default)]
pub struct InMemoryCompletionRepository {
    completions: Mutex<Vec<CourseCompletion>>,
}

impl InMemoryCompletionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored completion rows (test assertions).
    pub fn row_count(&self) -> usize {
        self.completions
            .lock()
            .expect("InMemoryCompletionRepository: lock poisoned")
            .len()
    }
}

#[async_trait]
impl CompletionRepository for InMemoryCompletionRepository {
    async fn save(&self, completion: &CourseCompletion) -> Result<(), DomainError> {
        let mut completions = self
            .completions
            .lock()
            .expect("InMemoryCompletionRepository: lock poisoned");

        let duplicate = completions.iter().any(|c| {
            c.user_id() == completion.user_id() && c.course_id() == completion.course_id()
        });
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Unique constraint violation: completion exists for (user, course)",
            ));
        }

        completions.push(completion.clone());
        Ok(())
    }

    async fn update(&self, completion: &CourseCompletion) -> Result<(), DomainError> {
        let mut completions = self
            .completions
            .lock()
            .expect("InMemoryCompletionRepository: lock poisoned");
        match completions.iter().position(|c| c.id() == completion.id()) {
            Some(pos) => {
                completions[pos] = completion.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Completion not found: {}", completion.id()),
            )),
        }
    }

    async fn find_by_user_and_course(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<Option<CourseCompletion>, DomainError> {
        Ok(self
            .completions
            .lock()
            .expect("InMemoryCompletionRepository: lock poisoned")
            .iter()
            .find(|c| c.user_id() == user_id && c.course_id() == course_id)
            .cloned())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CourseCompletion>, DomainError> {
        Ok(self
            .completions
            .lock()
            .expect("InMemoryCompletionRepository: lock poisoned")
            .iter()
            .filter(|c| c.user_id() == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::ContentPayload;
    use crate::domain::foundation::CompletionId;

    fn course() -> Course {
        Course::new(
            CourseId::new(),
            SessionId::new(),
            "Ownership".to_string(),
            None,
            3,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn course_save_and_find_round_trips() {
        let repo = InMemoryCourseRepository::new();
        let course = course();

        repo.save(&course).await.unwrap();
        assert_eq!(repo.find_by_id(course.id()).await.unwrap(), Some(course));
    }

    #[tokio::test]
    async fn content_delete_removes_item() {
        let repo = InMemoryContentRepository::new();
        let content = CourseContent::new(
            ContentId::new(),
            CourseId::new(),
            ContentPayload::Text {
                body: "notes".to_string(),
            },
        )
        .unwrap();

        repo.save(&content).await.unwrap();
        repo.delete(content.id()).await.unwrap();
        assert!(repo
            .list_by_course(content.course_id())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn duplicate_completion_pair_is_rejected() {
        let repo = InMemoryCompletionRepository::new();
        let user = UserId::new("trainee-1").unwrap();
        let course_id = CourseId::new();

        repo.save(&CourseCompletion::start(
            CompletionId::new(),
            user.clone(),
            course_id,
        ))
        .await
        .unwrap();

        let result = repo
            .save(&CourseCompletion::start(CompletionId::new(), user, course_id))
            .await;
        assert!(result.is_err());
        assert_eq!(repo.row_count(), 1);
    }
}
