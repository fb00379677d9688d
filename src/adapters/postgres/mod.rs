//! PostgreSQL adapter implementations.
//!
//! One repository per aggregate, sharing a `PgPool`. Status enums travel
//! as snake_case strings; the mapping helpers reject unknown values
//! instead of defaulting.

mod category_repository;
mod completion_repository;
mod content_repository;
mod course_repository;
mod feedback_repository;
mod notification_repository;
mod registration_repository;
mod roster_reader;
mod session_repository;

pub use category_repository::PostgresCategoryRepository;
pub use completion_repository::PostgresCompletionRepository;
pub use content_repository::PostgresContentRepository;
pub use course_repository::PostgresCourseRepository;
pub use feedback_repository::PostgresFeedbackRepository;
pub use notification_repository::PostgresNotificationRepository;
pub use registration_repository::PostgresRegistrationRepository;
pub use roster_reader::PostgresRosterReader;
pub use session_repository::PostgresSessionRepository;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Wraps a database error with context.
pub(crate) fn db_error(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

/// Wraps a column decoding failure.
pub(crate) fn column_error(column: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to read column '{}': {}", column, e),
    )
}
