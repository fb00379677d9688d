//! HTTP DTOs for course, content, and completion endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::course::SaveContentResult;
use crate::domain::course::{CompletionStatus, ContentPayload, Course, CourseCompletion};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub training_session_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub duration_hours: u32,
}

/// Request to update a course.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub duration_hours: u32,
}

/// JSON request to save text or video content.
///
/// Binary types (image, file) arrive as multipart instead, with the same
/// `type` / `training_course_id` / `content` field names.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveContentRequest {
    #[serde(rename = "type")]
    pub content_type: String,
    pub training_course_id: String,
    pub content: String,
}

/// Request to mark a course complete.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkCompleteRequest {
    pub training_course_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Course view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub training_session_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration_hours: u32,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            training_session_id: course.session_id().to_string(),
            title: course.title().to_string(),
            description: course.description().map(str::to_string),
            duration_hours: course.duration_hours(),
            is_active: course.is_active(),
            created_at: course.created_at().as_datetime().to_rfc3339(),
            updated_at: course.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Content view for API responses. The payload flattens to the wire shape
/// `{"type": "text", "body": ...}` and friends.
#[derive(Debug, Clone, Serialize)]
pub struct ContentResponse {
    pub id: String,
    pub training_course_id: String,
    #[serde(flatten)]
    pub payload: ContentPayload,
    pub created: bool,
}

impl From<&SaveContentResult> for ContentResponse {
    fn from(result: &SaveContentResult) -> Self {
        Self {
            id: result.content.id().to_string(),
            training_course_id: result.content.course_id().to_string(),
            payload: result.content.payload().clone(),
            created: result.created,
        }
    }
}

/// Completion view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionResponse {
    pub id: String,
    pub user_id: String,
    pub training_course_id: String,
    pub status: CompletionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl From<&CourseCompletion> for CompletionResponse {
    fn from(completion: &CourseCompletion) -> Self {
        Self {
            id: completion.id().to_string(),
            user_id: completion.user_id().to_string(),
            training_course_id: completion.course_id().to_string(),
            status: completion.status(),
            completed_at: completion
                .completed_at()
                .map(|t| t.as_datetime().to_rfc3339()),
        }
    }
}
