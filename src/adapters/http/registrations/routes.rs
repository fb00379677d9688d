//! HTTP routes for registration endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    approve_registration, cancel_registration, dashboard_stats, enroll, list_pending,
    reject_registration, session_roster, submit_feedback, withdraw_registration,
    RegistrationHandlers,
};

/// Creates the registration router with all endpoints.
pub fn registration_routes(handlers: RegistrationHandlers) -> Router {
    Router::new()
        .route("/", post(enroll))
        .route("/:id/approve", post(approve_registration))
        .route("/:id/reject", post(reject_registration))
        .route("/:id/withdraw", post(withdraw_registration))
        .route("/:id/cancel", post(cancel_registration))
        .route("/:id/feedback", post(submit_feedback))
        .route("/status/pending", get(list_pending))
        .route("/session/:session_id", get(session_roster))
        .route("/dashboard/stats", get(dashboard_stats))
        .with_state(handlers)
}
