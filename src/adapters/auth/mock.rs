//! Mock TokenVerifier for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::TokenVerifier;

/// Maps fixed token strings to users; everything else is invalid.
#[derive(Default)]
pub struct MockTokenVerifier {
    users: RwLock<HashMap<String, AuthenticatedUser>>,
}

impl MockTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token/user pair.
    pub fn with_user(self, token: &str, user: AuthenticatedUser) -> Self {
        self.users
            .write()
            .expect("MockTokenVerifier: lock poisoned")
            .insert(token.to_string(), user);
        self
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.users
            .read()
            .expect("MockTokenVerifier: lock poisoned")
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Role, UserId};

    #[tokio::test]
    async fn known_token_resolves() {
        let user = AuthenticatedUser::new(
            UserId::new("user-1").unwrap(),
            "u@example.com",
            None,
            Role::Trainee,
        );
        let verifier = MockTokenVerifier::new().with_user("token-1", user);

        let resolved = verifier.verify("token-1").await.unwrap();
        assert_eq!(resolved.id.as_str(), "user-1");
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let verifier = MockTokenVerifier::new();
        let result = verifier.verify("nope").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
