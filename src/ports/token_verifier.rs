//! Token verification port.

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use async_trait::async_trait;

/// Port for validating bearer tokens.
///
/// Keeps the HTTP middleware provider-agnostic: a JWT verifier in
/// production, a mock in tests.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Validates a bearer token and returns the authenticated user.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` / `TokenExpired` for bad tokens
    /// - `MissingRole` when the token has no usable role claim
    /// - `ServiceUnavailable` for transient verification failures
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_verifier_is_object_safe() {
        fn _accepts_dyn(_verifier: &dyn TokenVerifier) {}
    }
}
