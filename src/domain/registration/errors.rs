//! Registration-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, RegistrationId};

use super::{DenialReason, RegistrationStatus};

/// Registration-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Registration was not found.
    NotFound(RegistrationId),
    /// Attempted transition from a non-matching source state.
    InvalidTransition {
        from: RegistrationStatus,
        to: RegistrationStatus,
    },
    /// Enrollment gate denied the request.
    EnrollmentDenied(DenialReason),
    /// User is not authorized.
    Forbidden,
    /// Target session does not exist.
    SessionNotFound,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl RegistrationError {
    pub fn not_found(id: RegistrationId) -> Self {
        RegistrationError::NotFound(id)
    }
    pub fn invalid_transition(from: RegistrationStatus, to: RegistrationStatus) -> Self {
        RegistrationError::InvalidTransition { from, to }
    }
    pub fn enrollment_denied(reason: DenialReason) -> Self {
        RegistrationError::EnrollmentDenied(reason)
    }
    pub fn forbidden() -> Self {
        RegistrationError::Forbidden
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RegistrationError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        RegistrationError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistrationError::NotFound(_) => ErrorCode::RegistrationNotFound,
            RegistrationError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            RegistrationError::EnrollmentDenied(_) => ErrorCode::EnrollmentDenied,
            RegistrationError::Forbidden => ErrorCode::Forbidden,
            RegistrationError::SessionNotFound => ErrorCode::SessionNotFound,
            RegistrationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            RegistrationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            RegistrationError::NotFound(id) => format!("Registration not found: {}", id),
            RegistrationError::InvalidTransition { from, to } => {
                format!("Cannot transition registration from {} to {}", from, to)
            }
            RegistrationError::EnrollmentDenied(reason) => reason.user_message(),
            RegistrationError::Forbidden => "Permission denied".to_string(),
            RegistrationError::SessionNotFound => "Session not found".to_string(),
            RegistrationError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            RegistrationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RegistrationError {}

impl From<DomainError> for RegistrationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => RegistrationError::Forbidden,
            ErrorCode::SessionNotFound => RegistrationError::SessionNotFound,
            ErrorCode::ValidationFailed => RegistrationError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => RegistrationError::Infrastructure(err.to_string()),
        }
    }
}
