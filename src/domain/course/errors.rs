//! Course-specific error types.

use crate::domain::foundation::{CourseId, DomainError, ErrorCode};

/// Course-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    /// Course was not found.
    NotFound(CourseId),
    /// Parent session was not found.
    SessionNotFound,
    /// User is not authorized.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Upload storage failed.
    Storage(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl CourseError {
    pub fn not_found(id: CourseId) -> Self {
        CourseError::NotFound(id)
    }
    pub fn forbidden() -> Self {
        CourseError::Forbidden
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CourseError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn storage(message: impl Into<String>) -> Self {
        CourseError::Storage(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CourseError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            CourseError::NotFound(_) => ErrorCode::CourseNotFound,
            CourseError::SessionNotFound => ErrorCode::SessionNotFound,
            CourseError::Forbidden => ErrorCode::Forbidden,
            CourseError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CourseError::Storage(_) => ErrorCode::StorageError,
            CourseError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            CourseError::NotFound(id) => format!("Course not found: {}", id),
            CourseError::SessionNotFound => "Session not found".to_string(),
            CourseError::Forbidden => "Permission denied".to_string(),
            CourseError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CourseError::Storage(msg) => format!("Storage error: {}", msg),
            CourseError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CourseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CourseError {}

impl From<DomainError> for CourseError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => CourseError::Forbidden,
            ErrorCode::SessionNotFound => CourseError::SessionNotFound,
            ErrorCode::StorageError => CourseError::Storage(err.message),
            ErrorCode::ValidationFailed => CourseError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => CourseError::Infrastructure(err.to_string()),
        }
    }
}
