//! HTTP routes for session and category endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    archive_session, create_session, list_categories, list_sessions, update_session,
    SessionHandlers,
};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/", get(list_sessions))
        .route("/:id", patch(update_session))
        .route("/:id/archive", post(archive_session))
        .with_state(handlers)
}

/// Creates the category router.
pub fn category_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", get(list_categories))
        .with_state(handlers)
}
