//! PostgreSQL implementation of CategoryRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{CategoryId, DomainError, ErrorCode, Timestamp};
use crate::domain::session::Category;
use crate::ports::CategoryRepository;

use super::{column_error, db_error};

/// PostgreSQL implementation of CategoryRepository.
#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new PostgresCategoryRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn save(&self, category: &Category) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(category.id().as_uuid())
        .bind(category.name())
        .bind(category.description())
        .bind(category.is_active())
        .bind(category.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert category", e))?;

        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE categories SET
                name = $2,
                description = $3,
                is_active = $4
            WHERE id = $1
            "#,
        )
        .bind(category.id().as_uuid())
        .bind(category.name())
        .bind(category.description())
        .bind(category.is_active())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update category", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CategoryNotFound,
                format!("Category not found: {}", category.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, description, is_active, created_at FROM categories WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch category", e))?;

        row.map(row_to_category).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Category>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, is_active, created_at
            FROM categories
            ORDER BY is_active DESC, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list categories", e))?;

        rows.into_iter().map(row_to_category).collect()
    }
}

fn row_to_category(row: sqlx::postgres::PgRow) -> Result<Category, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let name: String = row.try_get("name").map_err(|e| column_error("name", e))?;
    let description: Option<String> = row
        .try_get("description")
        .map_err(|e| column_error("description", e))?;
    let is_active: bool = row
        .try_get("is_active")
        .map_err(|e| column_error("is_active", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;

    Ok(Category::reconstitute(
        CategoryId::from_uuid(id),
        name,
        description,
        is_active,
        Timestamp::from_datetime(created_at),
    ))
}
