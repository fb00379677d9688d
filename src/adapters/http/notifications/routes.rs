//! HTTP routes for notification endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_notifications, mark_all_read, mark_read, NotificationHandlers};

/// Creates the notification router.
pub fn notification_routes(handlers: NotificationHandlers) -> Router {
    Router::new()
        .route("/", get(list_notifications))
        .route("/:id/read", post(mark_read))
        .route("/read-all", post(mark_all_read))
        .with_state(handlers)
}
