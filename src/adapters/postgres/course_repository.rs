//! PostgreSQL implementation of CourseRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, SessionId, Timestamp};
use crate::ports::CourseRepository;

use super::{column_error, db_error};

/// PostgreSQL implementation of CourseRepository.
#[derive(Clone)]
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    /// Creates a new PostgresCourseRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, training_session_id, title, description, duration_hours,
           is_active, created_at, updated_at
    FROM training_courses
"#;

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn save(&self, course: &Course) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO training_courses (
                id, training_session_id, title, description, duration_hours,
                is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(course.id().as_uuid())
        .bind(course.session_id().as_uuid())
        .bind(course.title())
        .bind(course.description())
        .bind(course.duration_hours() as i32)
        .bind(course.is_active())
        .bind(course.created_at().as_datetime())
        .bind(course.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert course", e))?;

        Ok(())
    }

    async fn update(&self, course: &Course) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE training_courses SET
                title = $2,
                description = $3,
                duration_hours = $4,
                is_active = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(course.id().as_uuid())
        .bind(course.title())
        .bind(course.description())
        .bind(course.duration_hours() as i32)
        .bind(course.is_active())
        .bind(course.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update course", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CourseNotFound,
                format!("Course not found: {}", course.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch course", e))?;

        row.map(row_to_course).transpose()
    }

    async fn list_by_session(&self, session_id: &SessionId) -> Result<Vec<Course>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE training_session_id = $1 ORDER BY created_at",
            SELECT_COLUMNS
        ))
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list courses by session", e))?;

        rows.into_iter().map(row_to_course).collect()
    }
}

fn row_to_course(row: sqlx::postgres::PgRow) -> Result<Course, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let session_id: uuid::Uuid = row
        .try_get("training_session_id")
        .map_err(|e| column_error("training_session_id", e))?;
    let title: String = row.try_get("title").map_err(|e| column_error("title", e))?;
    let description: Option<String> = row
        .try_get("description")
        .map_err(|e| column_error("description", e))?;
    let duration_hours: i32 = row
        .try_get("duration_hours")
        .map_err(|e| column_error("duration_hours", e))?;
    let is_active: bool = row
        .try_get("is_active")
        .map_err(|e| column_error("is_active", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| column_error("updated_at", e))?;

    Ok(Course::reconstitute(
        CourseId::from_uuid(id),
        SessionId::from_uuid(session_id),
        title,
        description,
        duration_hours as u32,
        is_active,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
