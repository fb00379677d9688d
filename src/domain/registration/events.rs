//! Registration domain events.
//!
//! One event per lifecycle edge:
//! - `TraineeEnrolled` - registration created (pending)
//! - `RegistrationApproved` - pending -> confirmed
//! - `RegistrationRejected` - pending -> cancelled (coordinator decision)
//! - `RegistrationCancelled` - cancelled by the trainee (withdraw) or
//!   revoked from confirmed by the coordinator
//! - `RegistrationCompleted` - confirmed -> completed (system sweep)

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, EventId, RegistrationId, SessionId, Timestamp, UserId,
};

/// Published when a trainee enrolls into a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraineeEnrolled {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the new registration.
    pub registration_id: RegistrationId,

    /// Session enrolled into.
    pub session_id: SessionId,

    /// The enrolling trainee.
    pub user_id: UserId,

    /// When the enrollment happened.
    pub registered_at: Timestamp,
}

domain_event!(
    TraineeEnrolled,
    event_type = "registration.enrolled",
    aggregate_id = registration_id,
    aggregate_type = "Registration",
    occurred_at = registered_at,
    event_id = event_id
);

/// Published when a coordinator approves a pending registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationApproved {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the approved registration.
    pub registration_id: RegistrationId,

    /// Session the registration belongs to.
    pub session_id: SessionId,

    /// The registered trainee.
    pub user_id: UserId,

    /// Coordinator who approved.
    pub approved_by: UserId,

    /// When the approval happened.
    pub approved_at: Timestamp,
}

domain_event!(
    RegistrationApproved,
    event_type = "registration.approved",
    aggregate_id = registration_id,
    aggregate_type = "Registration",
    occurred_at = approved_at,
    event_id = event_id
);

/// Published when a coordinator rejects a pending registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRejected {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the rejected registration.
    pub registration_id: RegistrationId,

    /// Session the registration belongs to.
    pub session_id: SessionId,

    /// The registered trainee.
    pub user_id: UserId,

    /// Coordinator who rejected.
    pub rejected_by: UserId,

    /// When the rejection happened.
    pub rejected_at: Timestamp,
}

domain_event!(
    RegistrationRejected,
    event_type = "registration.rejected",
    aggregate_id = registration_id,
    aggregate_type = "Registration",
    occurred_at = rejected_at,
    event_id = event_id
);

/// Published when a registration is cancelled outside the reject path:
/// trainee withdrawal, or coordinator revoking a confirmed seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationCancelled {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the cancelled registration.
    pub registration_id: RegistrationId,

    /// Session the registration belongs to.
    pub session_id: SessionId,

    /// The registered trainee.
    pub user_id: UserId,

    /// Who triggered the cancellation (the trainee for a withdrawal).
    pub cancelled_by: UserId,

    /// When the cancellation happened.
    pub cancelled_at: Timestamp,
}

domain_event!(
    RegistrationCancelled,
    event_type = "registration.cancelled",
    aggregate_id = registration_id,
    aggregate_type = "Registration",
    occurred_at = cancelled_at,
    event_id = event_id
);

/// Published when the system completes a confirmed registration after the
/// session's end time has passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationCompleted {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the completed registration.
    pub registration_id: RegistrationId,

    /// Session the registration belongs to.
    pub session_id: SessionId,

    /// The registered trainee.
    pub user_id: UserId,

    /// When the completion was recorded.
    pub completed_at: Timestamp,
}

domain_event!(
    RegistrationCompleted,
    event_type = "registration.completed",
    aggregate_id = registration_id,
    aggregate_type = "Registration",
    occurred_at = completed_at,
    event_id = event_id
);
