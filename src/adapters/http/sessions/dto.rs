//! HTTP DTOs for session endpoints.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::session::{Category, SessionStatus, TrainingSession};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new training session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    pub skill_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub max_participants: u32,
    #[serde(default)]
    pub trainer_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
}

/// Request to update a session.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSessionRequest {
    pub skill_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub max_participants: u32,
    #[serde(default)]
    pub trainer_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
}

/// Query parameters for listing sessions.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSessionsParams {
    #[serde(default)]
    pub include_archived: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Session view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub coordinator_id: String,
    pub skill_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub max_participants: u32,
    pub status: SessionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TrainingSession> for SessionResponse {
    fn from(session: &TrainingSession) -> Self {
        Self {
            id: session.id().to_string(),
            coordinator_id: session.coordinator_id().to_string(),
            skill_name: session.skill_name().to_string(),
            description: session.description().map(str::to_string),
            date: session.schedule().date(),
            start_time: session.schedule().start_time(),
            end_time: session.schedule().end_time(),
            location: session.location().to_string(),
            max_participants: session.max_participants(),
            status: session.status(),
            trainer_id: session.trainer_id().map(|t| t.to_string()),
            category_id: session.category_id().map(|c| c.to_string()),
            created_at: session.created_at().as_datetime().to_rfc3339(),
            updated_at: session.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Category view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
        }
    }
}
