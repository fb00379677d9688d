//! Roster read-side port.
//!
//! The registered-trainee list joins registrations with user profile data
//! the write-side aggregates don't carry. Kept as a separate read port so
//! the join lives in the adapter.

use crate::domain::foundation::{DomainError, RegistrationId, SessionId, Timestamp, UserId};
use crate::domain::registration::RegistrationStatus;
use async_trait::async_trait;
use serde::Serialize;

/// One row of a session's registered-trainee list.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub registration_id: RegistrationId,
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub status: RegistrationStatus,
    pub registered_at: Timestamp,
}

/// Read port for session rosters.
#[async_trait]
pub trait RosterReader: Send + Sync {
    /// The roster of a session, ordered by registration time.
    async fn list_roster(&self, session_id: &SessionId) -> Result<Vec<RosterEntry>, DomainError>;
}
