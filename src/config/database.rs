//! Database configuration

use serde::Deserialize;

use super::error::ValidationError;

/// PostgreSQL configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL (postgresql://...)
    pub url: String,

    /// Maximum pool connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }

    #[test]
    fn accepts_postgres_urls() {
        assert!(config("postgresql://user@localhost/db").validate().is_ok());
        assert!(config("postgres://user@localhost/db").validate().is_ok());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(config("mysql://user@localhost/db").validate().is_err());
    }

    #[test]
    fn rejects_zero_pool_size() {
        let mut cfg = config("postgresql://user@localhost/db");
        cfg.max_connections = 0;
        assert!(cfg.validate().is_err());
    }
}
