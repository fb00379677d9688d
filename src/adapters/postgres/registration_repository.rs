//! PostgreSQL implementation of RegistrationRepository.
//!
//! The table carries a partial unique index over (user_id,
//! training_session_id) for rows in blocking statuses, so a duplicate
//! enrollment racing past the client-side eligibility check fails here.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, RegistrationId, SessionId, Timestamp, UserId,
};
use crate::domain::registration::{Registration, RegistrationStatus};
use crate::ports::RegistrationRepository;

use super::{column_error, db_error};

/// PostgreSQL implementation of RegistrationRepository.
#[derive(Clone)]
pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    /// Creates a new PostgresRegistrationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, training_session_id, status, registered_at, updated_at
    FROM registrations
"#;

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn save(&self, registration: &Registration) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO registrations (
                id, user_id, training_session_id, status, registered_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(registration.id().as_uuid())
        .bind(registration.user_id().as_str())
        .bind(registration.session_id().as_uuid())
        .bind(status_to_str(registration.status()))
        .bind(registration.registered_at().as_datetime())
        .bind(registration.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert registration", e))?;

        Ok(())
    }

    async fn update(&self, registration: &Registration) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE registrations SET
                status = $2,
                updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(registration.id().as_uuid())
        .bind(status_to_str(registration.status()))
        .bind(registration.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update registration", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RegistrationNotFound,
                format!("Registration not found: {}", registration.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &RegistrationId,
    ) -> Result<Option<Registration>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch registration", e))?;

        row.map(row_to_registration).transpose()
    }

    async fn list_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Registration>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE training_session_id = $1 ORDER BY registered_at",
            SELECT_COLUMNS
        ))
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list registrations by session", e))?;

        rows.into_iter().map(row_to_registration).collect()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Registration>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE user_id = $1 ORDER BY registered_at DESC",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list registrations by user", e))?;

        rows.into_iter().map(row_to_registration).collect()
    }

    async fn list_all(&self) -> Result<Vec<Registration>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY registered_at DESC", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list registrations", e))?;

        rows.into_iter().map(row_to_registration).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn status_to_str(status: RegistrationStatus) -> &'static str {
    match status {
        RegistrationStatus::Pending => "pending",
        RegistrationStatus::Confirmed => "confirmed",
        RegistrationStatus::Cancelled => "cancelled",
        RegistrationStatus::Completed => "completed",
        RegistrationStatus::Failed => "failed",
    }
}

fn str_to_status(s: &str) -> Result<RegistrationStatus, DomainError> {
    match s {
        "pending" => Ok(RegistrationStatus::Pending),
        "confirmed" => Ok(RegistrationStatus::Confirmed),
        "cancelled" => Ok(RegistrationStatus::Cancelled),
        "completed" => Ok(RegistrationStatus::Completed),
        "failed" => Ok(RegistrationStatus::Failed),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid registration status: {}", s),
        )),
    }
}

fn row_to_registration(row: sqlx::postgres::PgRow) -> Result<Registration, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let user_id: String = row.try_get("user_id").map_err(|e| column_error("user_id", e))?;
    let session_id: uuid::Uuid = row
        .try_get("training_session_id")
        .map_err(|e| column_error("training_session_id", e))?;
    let status_str: String = row.try_get("status").map_err(|e| column_error("status", e))?;
    let registered_at: chrono::DateTime<chrono::Utc> = row
        .try_get("registered_at")
        .map_err(|e| column_error("registered_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| column_error("updated_at", e))?;

    Ok(Registration::reconstitute(
        RegistrationId::from_uuid(id),
        UserId::new(user_id).map_err(|e| db_error("Invalid user_id", e))?,
        SessionId::from_uuid(session_id),
        str_to_status(&status_str)?,
        Timestamp::from_datetime(registered_at),
        Timestamp::from_datetime(updated_at),
    ))
}
