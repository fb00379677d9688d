//! JWT implementation of the TokenVerifier port.
//!
//! Validates HS256 bearer tokens issued by the identity service and maps
//! the claims onto the domain's `AuthenticatedUser`. The role claim is a
//! snake_case string parsed into the closed `Role` enum; unknown roles are
//! rejected rather than defaulted.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, Role, UserId};
use crate::ports::TokenVerifier;

/// Claims expected in the access token.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtClaims {
    /// Subject: the user id.
    pub sub: String,
    /// Email address.
    pub email: String,
    /// Display name, if the provider sets one.
    #[serde(default)]
    pub name: Option<String>,
    /// Platform role as a snake_case string.
    pub role: String,
    /// Expiry (validated by the library).
    pub exp: usize,
}

/// HS256 token verifier.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    /// Builds a verifier from the auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_secret(&config.jwt_secret, &config.issuer, &config.audience)
    }

    /// Builds a verifier from raw parameters (tests, tooling).
    pub fn with_secret(secret: &SecretString, issuer: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<JwtClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            },
        )?;

        let claims = data.claims;
        let role: Role = claims.role.parse().map_err(|_| AuthError::MissingRole)?;
        let id = UserId::new(claims.sub).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedUser::new(id, claims.email, claims.name, role))
    }
}
