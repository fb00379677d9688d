//! PostgreSQL implementation of the RosterReader port.
//!
//! Joins registrations with the users table; the join is LEFT so a
//! registration survives a missing profile row.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, RegistrationId, SessionId, Timestamp, UserId};
use crate::domain::registration::RegistrationStatus;
use crate::ports::{RosterEntry, RosterReader};

use super::{column_error, db_error};

/// PostgreSQL implementation of RosterReader.
#[derive(Clone)]
pub struct PostgresRosterReader {
    pool: PgPool,
}

impl PostgresRosterReader {
    /// Creates a new PostgresRosterReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RosterReader for PostgresRosterReader {
    async fn list_roster(&self, session_id: &SessionId) -> Result<Vec<RosterEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.user_id, r.status, r.registered_at,
                   u.display_name, u.email
            FROM registrations r
            LEFT JOIN users u ON u.id = r.user_id
            WHERE r.training_session_id = $1
            ORDER BY r.registered_at
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch roster", e))?;

        rows.into_iter().map(row_to_entry).collect()
    }
}

fn row_to_entry(row: sqlx::postgres::PgRow) -> Result<RosterEntry, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let user_id: String = row.try_get("user_id").map_err(|e| column_error("user_id", e))?;
    let status_str: String = row.try_get("status").map_err(|e| column_error("status", e))?;
    let registered_at: chrono::DateTime<chrono::Utc> = row
        .try_get("registered_at")
        .map_err(|e| column_error("registered_at", e))?;
    let display_name: Option<String> = row
        .try_get("display_name")
        .map_err(|e| column_error("display_name", e))?;
    let email: Option<String> = row.try_get("email").map_err(|e| column_error("email", e))?;

    let status = match status_str.as_str() {
        "pending" => RegistrationStatus::Pending,
        "confirmed" => RegistrationStatus::Confirmed,
        "cancelled" => RegistrationStatus::Cancelled,
        "completed" => RegistrationStatus::Completed,
        "failed" => RegistrationStatus::Failed,
        other => {
            return Err(db_error(
                "Invalid registration status in roster",
                other.to_string(),
            ))
        }
    };

    Ok(RosterEntry {
        registration_id: RegistrationId::from_uuid(id),
        user_id: UserId::new(user_id).map_err(|e| db_error("Invalid user_id", e))?,
        display_name,
        email,
        status,
        registered_at: Timestamp::from_datetime(registered_at),
    })
}
