//! Recent-activity feed derivation.

use serde::Serialize;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::registration::{Registration, RegistrationStatus};
use crate::domain::session::{Category, SessionStatus, TrainingSession};

/// What happened, as shown in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Created,
    Confirmed,
    Cancelled,
    Updated,
}

/// One line of the dashboard activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    /// Session this entry relates to.
    pub session_id: SessionId,
    /// Human-readable narrative combining skill, category, trainer, location.
    pub description: String,
    /// When the underlying change happened.
    pub occurred_at: Timestamp,
    /// ID of the source entity; ascending tie-break for equal timestamps.
    pub source_id: String,
}

/// Builds the recent-activity feed from sessions and registrations.
///
/// Kind derivation:
/// - archived session -> `Cancelled`
/// - session never modified after creation -> `Created`
/// - otherwise -> `Updated`
/// - pending registration -> `Created`, confirmed -> `Confirmed`,
///   cancelled -> `Cancelled`, completed -> `Updated`
///
/// Ordering: most recent first; equal timestamps break ties by source
/// entity id ascending so the feed is deterministic.
pub fn recent_activity(
    sessions: &[TrainingSession],
    registrations: &[Registration],
    categories: &[Category],
    limit: usize,
) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = Vec::new();

    for session in sessions {
        entries.push(ActivityEntry {
            kind: session_kind(session),
            session_id: *session.id(),
            description: describe_session(session, categories),
            occurred_at: *session.updated_at(),
            source_id: session.id().to_string(),
        });
    }

    for registration in registrations {
        let Some(kind) = registration_kind(registration) else {
            continue;
        };
        let session = sessions
            .iter()
            .find(|s| s.id() == registration.session_id());
        let skill = session.map(TrainingSession::skill_name).unwrap_or("a session");
        entries.push(ActivityEntry {
            kind,
            session_id: *registration.session_id(),
            description: format!(
                "Registration {} for {}",
                registration.status(),
                skill
            ),
            occurred_at: *registration.updated_at(),
            source_id: registration.id().to_string(),
        });
    }

    entries.sort_by(|a, b| {
        b.occurred_at
            .cmp(&a.occurred_at)
            .then_with(|| a.source_id.cmp(&b.source_id))
    });
    entries.truncate(limit);
    entries
}

fn session_kind(session: &TrainingSession) -> ActivityKind {
    if session.status() == SessionStatus::Archived {
        ActivityKind::Cancelled
    } else if session.updated_at() == session.created_at() {
        ActivityKind::Created
    } else {
        ActivityKind::Updated
    }
}

fn registration_kind(registration: &Registration) -> Option<ActivityKind> {
    match registration.status() {
        RegistrationStatus::Pending => Some(ActivityKind::Created),
        RegistrationStatus::Confirmed => Some(ActivityKind::Confirmed),
        RegistrationStatus::Cancelled => Some(ActivityKind::Cancelled),
        RegistrationStatus::Completed => Some(ActivityKind::Updated),
        RegistrationStatus::Failed => None,
    }
}

fn describe_session(session: &TrainingSession, categories: &[Category]) -> String {
    let mut description = session.skill_name().to_string();

    if let Some(category) = session
        .category_id()
        .and_then(|id| categories.iter().find(|c| c.id() == id))
    {
        description.push_str(&format!(" ({})", category.name()));
    }

    if let Some(trainer) = session.trainer_id() {
        description.push_str(&format!(" with {}", trainer));
    }

    description.push_str(&format!(" at {}", session.location()));
    description
}

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;
