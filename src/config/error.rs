//! Configuration error types

use thiserror::Error;

/// Errors while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors while validating configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Server port must be non-zero")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Database URL must be a postgres:// or postgresql:// URL")]
    InvalidDatabaseUrl,

    #[error("Database pool size must be non-zero")]
    InvalidPoolSize,

    #[error("JWT secret must not be empty")]
    MissingJwtSecret,

    #[error("Auth issuer and audience must not be empty")]
    InvalidAuthConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_display_reasons() {
        assert!(format!("{}", ValidationError::InvalidPort).contains("port"));
        assert!(format!("{}", ValidationError::MissingJwtSecret).contains("JWT"));
    }
}
