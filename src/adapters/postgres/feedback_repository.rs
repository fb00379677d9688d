//! PostgreSQL implementation of FeedbackRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, FeedbackId, Rating, RegistrationId, Timestamp};
use crate::domain::registration::Feedback;
use crate::ports::FeedbackRepository;

use super::{column_error, db_error};

/// PostgreSQL implementation of FeedbackRepository.
#[derive(Clone)]
pub struct PostgresFeedbackRepository {
    pool: PgPool,
}

impl PostgresFeedbackRepository {
    /// Creates a new PostgresFeedbackRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PostgresFeedbackRepository {
    async fn save(&self, feedback: &Feedback) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO feedback (
                id, registration_id, rating, comment, created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(feedback.id().as_uuid())
        .bind(feedback.registration_id().as_uuid())
        .bind(feedback.rating().value() as i16)
        .bind(feedback.comment())
        .bind(feedback.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert feedback", e))?;

        Ok(())
    }

    async fn find_by_registration(
        &self,
        registration_id: &RegistrationId,
    ) -> Result<Option<Feedback>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, registration_id, rating, comment, created_at
            FROM feedback
            WHERE registration_id = $1
            "#,
        )
        .bind(registration_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch feedback", e))?;

        row.map(row_to_feedback).transpose()
    }
}

fn row_to_feedback(row: sqlx::postgres::PgRow) -> Result<Feedback, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let registration_id: uuid::Uuid = row
        .try_get("registration_id")
        .map_err(|e| column_error("registration_id", e))?;
    let rating: i16 = row.try_get("rating").map_err(|e| column_error("rating", e))?;
    let comment: Option<String> = row
        .try_get("comment")
        .map_err(|e| column_error("comment", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;

    Ok(Feedback::reconstitute(
        FeedbackId::from_uuid(id),
        RegistrationId::from_uuid(registration_id),
        Rating::new(rating as u8).map_err(|e| db_error("Invalid rating in store", e))?,
        comment,
        Timestamp::from_datetime(created_at),
    ))
}
