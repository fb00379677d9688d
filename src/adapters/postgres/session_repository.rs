//! PostgreSQL implementation of SessionRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    CategoryId, DomainError, ErrorCode, SessionId, Timestamp, UserId,
};
use crate::domain::session::{SessionSchedule, SessionStatus, TrainingSession};
use crate::ports::SessionRepository;

use super::{column_error, db_error};

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, coordinator_id, skill_name, description, date, start_time,
           end_time, location, max_participants, status, trainer_id,
           category_id, created_at, updated_at
    FROM training_sessions
"#;

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &TrainingSession) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO training_sessions (
                id, coordinator_id, skill_name, description, date, start_time,
                end_time, location, max_participants, status, trainer_id,
                category_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.coordinator_id().as_str())
        .bind(session.skill_name())
        .bind(session.description())
        .bind(session.schedule().date())
        .bind(session.schedule().start_time())
        .bind(session.schedule().end_time())
        .bind(session.location())
        .bind(session.max_participants() as i32)
        .bind(session_status_to_str(session.status()))
        .bind(session.trainer_id().map(|t| t.as_str()))
        .bind(session.category_id().map(|c| c.as_uuid()))
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert session", e))?;

        Ok(())
    }

    async fn update(&self, session: &TrainingSession) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE training_sessions SET
                skill_name = $2,
                description = $3,
                date = $4,
                start_time = $5,
                end_time = $6,
                location = $7,
                max_participants = $8,
                status = $9,
                trainer_id = $10,
                category_id = $11,
                updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.skill_name())
        .bind(session.description())
        .bind(session.schedule().date())
        .bind(session.schedule().start_time())
        .bind(session.schedule().end_time())
        .bind(session.location())
        .bind(session.max_participants() as i32)
        .bind(session_status_to_str(session.status()))
        .bind(session.trainer_id().map(|t| t.as_str()))
        .bind(session.category_id().map(|c| c.as_uuid()))
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update session", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<TrainingSession>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch session", e))?;

        row.map(row_to_session).transpose()
    }

    async fn list_active(&self) -> Result<Vec<TrainingSession>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE status = 'active' ORDER BY date DESC, start_time DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list active sessions", e))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn list_all(&self) -> Result<Vec<TrainingSession>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} ORDER BY date DESC, start_time DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list sessions", e))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn list_by_coordinator(
        &self,
        coordinator_id: &UserId,
    ) -> Result<Vec<TrainingSession>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE coordinator_id = $1 ORDER BY date DESC",
            SELECT_COLUMNS
        ))
        .bind(coordinator_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list sessions by coordinator", e))?;

        rows.into_iter().map(row_to_session).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn session_status_to_str(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Active => "active",
        SessionStatus::Archived => "archived",
    }
}

fn str_to_session_status(s: &str) -> Result<SessionStatus, DomainError> {
    match s {
        "active" => Ok(SessionStatus::Active),
        "archived" => Ok(SessionStatus::Archived),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session status: {}", s),
        )),
    }
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<TrainingSession, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let coordinator_id: String = row
        .try_get("coordinator_id")
        .map_err(|e| column_error("coordinator_id", e))?;
    let skill_name: String = row
        .try_get("skill_name")
        .map_err(|e| column_error("skill_name", e))?;
    let description: Option<String> = row
        .try_get("description")
        .map_err(|e| column_error("description", e))?;
    let date: chrono::NaiveDate = row.try_get("date").map_err(|e| column_error("date", e))?;
    let start_time: chrono::NaiveTime = row
        .try_get("start_time")
        .map_err(|e| column_error("start_time", e))?;
    let end_time: chrono::NaiveTime = row
        .try_get("end_time")
        .map_err(|e| column_error("end_time", e))?;
    let location: String = row
        .try_get("location")
        .map_err(|e| column_error("location", e))?;
    let max_participants: i32 = row
        .try_get("max_participants")
        .map_err(|e| column_error("max_participants", e))?;
    let status_str: String = row.try_get("status").map_err(|e| column_error("status", e))?;
    let trainer_id: Option<String> = row
        .try_get("trainer_id")
        .map_err(|e| column_error("trainer_id", e))?;
    let category_id: Option<uuid::Uuid> = row
        .try_get("category_id")
        .map_err(|e| column_error("category_id", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| column_error("updated_at", e))?;

    let schedule = SessionSchedule::new(date, start_time, end_time)
        .map_err(|e| db_error("Invalid schedule in store", e))?;

    let trainer_id = trainer_id
        .map(UserId::new)
        .transpose()
        .map_err(|e| db_error("Invalid trainer_id", e))?;

    Ok(TrainingSession::reconstitute(
        SessionId::from_uuid(id),
        UserId::new(coordinator_id).map_err(|e| db_error("Invalid coordinator_id", e))?,
        skill_name,
        description,
        schedule,
        location,
        max_participants as u32,
        str_to_session_status(&status_str)?,
        trainer_id,
        category_id.map(CategoryId::from_uuid),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
