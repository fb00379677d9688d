//! Adapters - implementations of the ports.
//!
//! - `auth` - token verification (JWT, mock)
//! - `events` - event publishing (tracing, in-memory)
//! - `http` - axum routes, handlers, DTOs, middleware
//! - `memory` - in-memory repositories for tests and dev mode
//! - `postgres` - sqlx repositories
//! - `storage` - upload storage (local filesystem)

pub mod auth;
pub mod events;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod storage;
