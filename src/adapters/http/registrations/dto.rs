//! HTTP DTOs for registration and dashboard endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::dashboard::DashboardOverview;
use crate::domain::dashboard::{ActivityEntry, RegistrationStats};
use crate::domain::registration::{Registration, RegistrationStatus};
use crate::ports::RosterEntry;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to enroll into a session.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollRequest {
    pub training_session_id: String,
}

/// Request to submit feedback for a registration.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Registration view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub id: String,
    pub user_id: String,
    pub training_session_id: String,
    pub status: RegistrationStatus,
    pub registered_at: String,
    pub updated_at: String,
}

impl From<&Registration> for RegistrationResponse {
    fn from(registration: &Registration) -> Self {
        Self {
            id: registration.id().to_string(),
            user_id: registration.user_id().to_string(),
            training_session_id: registration.session_id().to_string(),
            status: registration.status(),
            registered_at: registration.registered_at().as_datetime().to_rfc3339(),
            updated_at: registration.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Roster row for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntryResponse {
    pub registration_id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: RegistrationStatus,
    pub registered_at: String,
}

impl From<&RosterEntry> for RosterEntryResponse {
    fn from(entry: &RosterEntry) -> Self {
        Self {
            registration_id: entry.registration_id.to_string(),
            user_id: entry.user_id.to_string(),
            display_name: entry.display_name.clone(),
            email: entry.email.clone(),
            status: entry.status,
            registered_at: entry.registered_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Feedback view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub id: String,
    pub registration_id: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: String,
}

impl From<&crate::domain::registration::Feedback> for FeedbackResponse {
    fn from(feedback: &crate::domain::registration::Feedback) -> Self {
        Self {
            id: feedback.id().to_string(),
            registration_id: feedback.registration_id().to_string(),
            rating: feedback.rating().value(),
            comment: feedback.comment().map(str::to_string),
            created_at: feedback.created_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Dashboard overview for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub stats: RegistrationStats,
    pub current_sessions: usize,
    pub past_sessions: usize,
    pub recent_activity: Vec<ActivityEntry>,
    pub unread_notifications: usize,
}

impl From<DashboardOverview> for DashboardResponse {
    fn from(overview: DashboardOverview) -> Self {
        Self {
            stats: overview.stats,
            current_sessions: overview.buckets.current.len(),
            past_sessions: overview.buckets.past.len(),
            recent_activity: overview.recent_activity,
            unread_notifications: overview.unread_notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RegistrationId, SessionId, UserId};

    #[test]
    fn enroll_request_deserializes() {
        let json = r#"{"training_session_id": "550e8400-e29b-41d4-a716-446655440000"}"#;
        let req: EnrollRequest = serde_json::from_str(json).unwrap();
        assert!(req.training_session_id.starts_with("550e8400"));
    }

    #[test]
    fn registration_response_conversion() {
        let registration = Registration::new(
            RegistrationId::new(),
            UserId::new("trainee-1").unwrap(),
            SessionId::new(),
        );

        let response = RegistrationResponse::from(&registration);
        assert_eq!(response.user_id, "trainee-1");
        assert_eq!(response.status, RegistrationStatus::Pending);
    }
}
