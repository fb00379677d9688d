//! Command metadata for CQRS handlers.
//!
//! Instead of each handler accepting `user_id`, `correlation_id` and
//! `source` separately, they accept a single `CommandMetadata` struct
//! that flows through command processing and into emitted events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Metadata context for command handlers.
///
/// Carries the acting user plus tracing context through the command
/// pipeline. Propagated to every emitted event envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The user executing this command.
    pub user_id: UserId,

    /// Links related operations across a single request.
    /// Generated at the API boundary if not provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g., "api", "sweep").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata for the given user.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
            source: None,
        }
    }

    /// Builder: add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture with a test user ID.
    pub fn test_fixture() -> Self {
        Self::new(UserId::new("test-user-123").unwrap())
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_with_user_id() {
        let user_id = UserId::new("user-123").unwrap();
        let metadata = CommandMetadata::new(user_id.clone());

        assert_eq!(metadata.user_id, user_id);
        assert!(metadata.correlation_id.is_none());
        assert!(metadata.source.is_none());
    }

    #[test]
    fn builder_chain_sets_all_fields() {
        let metadata = CommandMetadata::new(UserId::new("user-456").unwrap())
            .with_correlation_id("corr-123")
            .with_source("api");

        assert_eq!(metadata.correlation_id(), "corr-123");
        assert_eq!(metadata.source(), Some("api"));
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new(UserId::new("user").unwrap());
        assert!(!metadata.correlation_id().is_empty());
    }

    #[test]
    fn serialization_skips_none_fields() {
        let metadata = CommandMetadata::new(UserId::new("user-skip").unwrap());
        let json = serde_json::to_string(&metadata).unwrap();

        assert!(json.contains("user_id"));
        assert!(!json.contains("correlation_id"));
        assert!(!json.contains("source"));
    }

    #[test]
    fn test_fixture_creates_valid_metadata() {
        let metadata = CommandMetadata::test_fixture();

        assert_eq!(metadata.user_id.as_str(), "test-user-123");
        assert_eq!(metadata.correlation_id(), "test-correlation-id");
        assert_eq!(metadata.source(), Some("test"));
    }
}
