//! Token verification adapters.

mod jwt;
mod mock;

pub use jwt::{JwtClaims, JwtTokenVerifier};
pub use mock::MockTokenVerifier;
