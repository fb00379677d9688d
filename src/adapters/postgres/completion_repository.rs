//! PostgreSQL implementation of CompletionRepository.
//!
//! The table carries a unique index over (user_id, training_course_id),
//! the store-side half of completion idempotence.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::course::{CompletionStatus, CourseCompletion};
use crate::domain::foundation::{CompletionId, CourseId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::CompletionRepository;

use super::{column_error, db_error};

/// PostgreSQL implementation of CompletionRepository.
#[derive(Clone)]
pub struct PostgresCompletionRepository {
    pool: PgPool,
}

impl PostgresCompletionRepository {
    /// Creates a new PostgresCompletionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, training_course_id, status, started_at, completed_at
    FROM course_completions
"#;

#[async_trait]
impl CompletionRepository for PostgresCompletionRepository {
    async fn save(&self, completion: &CourseCompletion) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO course_completions (
                id, user_id, training_course_id, status, started_at, completed_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(completion.id().as_uuid())
        .bind(completion.user_id().as_str())
        .bind(completion.course_id().as_uuid())
        .bind(status_to_str(completion.status()))
        .bind(completion.started_at().as_datetime())
        .bind(completion.completed_at().map(|t| t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert completion", e))?;

        Ok(())
    }

    async fn update(&self, completion: &CourseCompletion) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE course_completions SET
                status = $2,
                completed_at = $3
            WHERE id = $1
            "#,
        )
        .bind(completion.id().as_uuid())
        .bind(status_to_str(completion.status()))
        .bind(completion.completed_at().map(|t| t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update completion", e))?;

        if result.rows_affected() == 0 {
            return Err(db_error(
                "Failed to update completion",
                format!("not found: {}", completion.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_user_and_course(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<Option<CourseCompletion>, DomainError> {
        let row = sqlx::query(&format!(
            "{} WHERE user_id = $1 AND training_course_id = $2",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_str())
        .bind(course_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch completion", e))?;

        row.map(row_to_completion).transpose()
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CourseCompletion>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE user_id = $1 ORDER BY started_at DESC",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list completions", e))?;

        rows.into_iter().map(row_to_completion).collect()
    }
}

fn status_to_str(status: CompletionStatus) -> &'static str {
    match status {
        CompletionStatus::InProgress => "in_progress",
        CompletionStatus::Completed => "completed",
    }
}

fn str_to_status(s: &str) -> Result<CompletionStatus, DomainError> {
    match s {
        "in_progress" => Ok(CompletionStatus::InProgress),
        "completed" => Ok(CompletionStatus::Completed),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid completion status: {}", s),
        )),
    }
}

fn row_to_completion(row: sqlx::postgres::PgRow) -> Result<CourseCompletion, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let user_id: String = row.try_get("user_id").map_err(|e| column_error("user_id", e))?;
    let course_id: uuid::Uuid = row
        .try_get("training_course_id")
        .map_err(|e| column_error("training_course_id", e))?;
    let status_str: String = row.try_get("status").map_err(|e| column_error("status", e))?;
    let started_at: chrono::DateTime<chrono::Utc> = row
        .try_get("started_at")
        .map_err(|e| column_error("started_at", e))?;
    let completed_at: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("completed_at")
        .map_err(|e| column_error("completed_at", e))?;

    Ok(CourseCompletion::reconstitute(
        CompletionId::from_uuid(id),
        UserId::new(user_id).map_err(|e| db_error("Invalid user_id", e))?,
        CourseId::from_uuid(course_id),
        str_to_status(&status_str)?,
        Timestamp::from_datetime(started_at),
        completed_at.map(Timestamp::from_datetime),
    ))
}
