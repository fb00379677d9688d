//! Session domain events.
//!
//! Events published when session lifecycle changes occur:
//! - `SessionCreated` - New session created by a coordinator
//! - `SessionUpdated` - Session details changed
//! - `TrainerAssigned` - Trainer assigned or replaced
//! - `SessionArchived` - Session archived (soft delete)

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, SessionId, Timestamp, UserId};

/// Published when a coordinator creates a new training session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the created session.
    pub session_id: SessionId,

    /// Coordinator who created the session.
    pub coordinator_id: UserId,

    /// Skill being taught.
    pub skill_name: String,

    /// When the session was created.
    pub created_at: Timestamp,
}

domain_event!(
    SessionCreated,
    event_type = "session.created",
    aggregate_id = session_id,
    aggregate_type = "TrainingSession",
    occurred_at = created_at,
    event_id = event_id
);

/// Published when a session's details are changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUpdated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the updated session.
    pub session_id: SessionId,

    /// User who updated the session.
    pub updated_by: UserId,

    /// When the update occurred.
    pub updated_at: Timestamp,
}

domain_event!(
    SessionUpdated,
    event_type = "session.updated",
    aggregate_id = session_id,
    aggregate_type = "TrainingSession",
    occurred_at = updated_at,
    event_id = event_id
);

/// Published when a trainer is assigned to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerAssigned {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the session.
    pub session_id: SessionId,

    /// Newly assigned trainer.
    pub trainer_id: UserId,

    /// Trainer replaced by this assignment, if any.
    pub previous_trainer_id: Option<UserId>,

    /// When the assignment occurred.
    pub assigned_at: Timestamp,
}

domain_event!(
    TrainerAssigned,
    event_type = "session.trainer_assigned",
    aggregate_id = session_id,
    aggregate_type = "TrainingSession",
    occurred_at = assigned_at,
    event_id = event_id
);

/// Published when a session is archived (soft delete).
///
/// Archived sessions are hidden from active lists but data is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionArchived {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the archived session.
    pub session_id: SessionId,

    /// User who archived the session.
    pub archived_by: UserId,

    /// When the session was archived.
    pub archived_at: Timestamp,
}

domain_event!(
    SessionArchived,
    event_type = "session.archived",
    aggregate_id = session_id,
    aggregate_type = "TrainingSession",
    occurred_at = archived_at,
    event_id = event_id
);
