//! PostgreSQL implementation of ContentRepository.
//!
//! The payload is stored discriminated on `content_type`: text bodies in
//! `body`, video URLs in `url`, uploads in `file_key` + `file_name`.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::course::{ContentPayload, CourseContent, StoredFile};
use crate::domain::foundation::{ContentId, CourseId, DomainError, ErrorCode, Timestamp};
use crate::ports::ContentRepository;

use super::{column_error, db_error};

/// PostgreSQL implementation of ContentRepository.
#[derive(Clone)]
pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    /// Creates a new PostgresContentRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Column values for one payload.
struct PayloadColumns<'a> {
    content_type: &'static str,
    body: Option<&'a str>,
    url: Option<&'a str>,
    file_key: Option<&'a str>,
    file_name: Option<&'a str>,
}

fn payload_columns(payload: &ContentPayload) -> PayloadColumns<'_> {
    match payload {
        ContentPayload::Text { body } => PayloadColumns {
            content_type: "text",
            body: Some(body),
            url: None,
            file_key: None,
            file_name: None,
        },
        ContentPayload::Video { url } => PayloadColumns {
            content_type: "video",
            body: None,
            url: Some(url),
            file_key: None,
            file_name: None,
        },
        ContentPayload::File { file } => PayloadColumns {
            content_type: "file",
            body: None,
            url: None,
            file_key: Some(&file.key),
            file_name: Some(&file.filename),
        },
        ContentPayload::Image { file } => PayloadColumns {
            content_type: "image",
            body: None,
            url: None,
            file_key: Some(&file.key),
            file_name: Some(&file.filename),
        },
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn save(&self, content: &CourseContent) -> Result<(), DomainError> {
        let columns = payload_columns(content.payload());
        sqlx::query(
            r#"
            INSERT INTO course_content (
                id, training_course_id, content_type, body, url, file_key,
                file_name, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(content.id().as_uuid())
        .bind(content.course_id().as_uuid())
        .bind(columns.content_type)
        .bind(columns.body)
        .bind(columns.url)
        .bind(columns.file_key)
        .bind(columns.file_name)
        .bind(content.created_at().as_datetime())
        .bind(content.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert course content", e))?;

        Ok(())
    }

    async fn update(&self, content: &CourseContent) -> Result<(), DomainError> {
        let columns = payload_columns(content.payload());
        let result = sqlx::query(
            r#"
            UPDATE course_content SET
                content_type = $2,
                body = $3,
                url = $4,
                file_key = $5,
                file_name = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(content.id().as_uuid())
        .bind(columns.content_type)
        .bind(columns.body)
        .bind(columns.url)
        .bind(columns.file_key)
        .bind(columns.file_name)
        .bind(content.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update course content", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ContentNotFound,
                format!("Content not found: {}", content.id()),
            ));
        }

        Ok(())
    }

    async fn list_by_course(
        &self,
        course_id: &CourseId,
    ) -> Result<Vec<CourseContent>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, training_course_id, content_type, body, url, file_key,
                   file_name, created_at, updated_at
            FROM course_content
            WHERE training_course_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(course_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list course content", e))?;

        rows.into_iter().map(row_to_content).collect()
    }

    async fn delete(&self, id: &ContentId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM course_content WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete course content", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ContentNotFound,
                format!("Content not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_content(row: sqlx::postgres::PgRow) -> Result<CourseContent, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let course_id: uuid::Uuid = row
        .try_get("training_course_id")
        .map_err(|e| column_error("training_course_id", e))?;
    let content_type: String = row
        .try_get("content_type")
        .map_err(|e| column_error("content_type", e))?;
    let body: Option<String> = row.try_get("body").map_err(|e| column_error("body", e))?;
    let url: Option<String> = row.try_get("url").map_err(|e| column_error("url", e))?;
    let file_key: Option<String> = row
        .try_get("file_key")
        .map_err(|e| column_error("file_key", e))?;
    let file_name: Option<String> = row
        .try_get("file_name")
        .map_err(|e| column_error("file_name", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| column_error("updated_at", e))?;

    let stored_file = || -> Result<StoredFile, DomainError> {
        match (file_key.clone(), file_name.clone()) {
            (Some(key), Some(filename)) => Ok(StoredFile { key, filename }),
            _ => Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Upload content row missing file columns",
            )),
        }
    };

    let payload = match content_type.as_str() {
        "text" => ContentPayload::Text {
            body: body.unwrap_or_default(),
        },
        "video" => ContentPayload::Video {
            url: url.unwrap_or_default(),
        },
        "file" => ContentPayload::File { file: stored_file()? },
        "image" => ContentPayload::Image { file: stored_file()? },
        other => {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid content type: {}", other),
            ))
        }
    };

    Ok(CourseContent::reconstitute(
        ContentId::from_uuid(id),
        CourseId::from_uuid(course_id),
        payload,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
