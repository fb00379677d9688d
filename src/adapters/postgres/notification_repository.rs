//! PostgreSQL implementation of NotificationRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, NotificationId, Timestamp, UserId};
use crate::domain::notification::{Notification, Priority};
use crate::ports::NotificationRepository;

use super::{column_error, db_error};

/// PostgreSQL implementation of NotificationRepository.
#[derive(Clone)]
pub struct PostgresNotificationRepository {
    pool: PgPool,
}

impl PostgresNotificationRepository {
    /// Creates a new PostgresNotificationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, title, message, priority, is_read, created_at, read_at
    FROM notifications
"#;

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn save(&self, notification: &Notification) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO notifications (
                id, user_id, title, message, priority, is_read, created_at, read_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(notification.id().as_uuid())
        .bind(notification.user_id().as_str())
        .bind(notification.title())
        .bind(notification.message())
        .bind(priority_to_str(notification.priority()))
        .bind(notification.is_read())
        .bind(notification.created_at().as_datetime())
        .bind(notification.read_at().map(|t| t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert notification", e))?;

        Ok(())
    }

    async fn update(&self, notification: &Notification) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE notifications SET
                is_read = $2,
                read_at = $3
            WHERE id = $1
            "#,
        )
        .bind(notification.id().as_uuid())
        .bind(notification.is_read())
        .bind(notification.read_at().map(|t| t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update notification", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::NotificationNotFound,
                format!("Notification not found: {}", notification.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &NotificationId,
    ) -> Result<Option<Notification>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch notification", e))?;

        row.map(row_to_notification).transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Notification>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE user_id = $1 ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list notifications", e))?;

        rows.into_iter().map(row_to_notification).collect()
    }

    async fn mark_all_read(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE notifications SET
                is_read = TRUE,
                read_at = NOW()
            WHERE user_id = $1 AND is_read = FALSE
            "#,
        )
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to mark notifications read", e))?;

        Ok(result.rows_affected())
    }
}

fn priority_to_str(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Normal => "normal",
        Priority::High => "high",
        Priority::Urgent => "urgent",
    }
}

fn str_to_priority(s: &str) -> Result<Priority, DomainError> {
    match s {
        "low" => Ok(Priority::Low),
        "normal" => Ok(Priority::Normal),
        "high" => Ok(Priority::High),
        "urgent" => Ok(Priority::Urgent),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid notification priority: {}", s),
        )),
    }
}

fn row_to_notification(row: sqlx::postgres::PgRow) -> Result<Notification, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let user_id: String = row.try_get("user_id").map_err(|e| column_error("user_id", e))?;
    let title: String = row.try_get("title").map_err(|e| column_error("title", e))?;
    let message: String = row.try_get("message").map_err(|e| column_error("message", e))?;
    let priority_str: String = row
        .try_get("priority")
        .map_err(|e| column_error("priority", e))?;
    let is_read: bool = row.try_get("is_read").map_err(|e| column_error("is_read", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;
    let read_at: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("read_at")
        .map_err(|e| column_error("read_at", e))?;

    Ok(Notification::reconstitute(
        NotificationId::from_uuid(id),
        UserId::new(user_id).map_err(|e| db_error("Invalid user_id", e))?,
        title,
        message,
        str_to_priority(&priority_str)?,
        is_read,
        Timestamp::from_datetime(created_at),
        read_at.map(Timestamp::from_datetime),
    ))
}
