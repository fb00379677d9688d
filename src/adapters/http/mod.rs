//! HTTP adapter - axum routes, handlers, and DTOs.
//!
//! Resource routers are assembled here; the auth middleware is layered on
//! in `main` so tests can mount routers with a mock verifier.

pub mod courses;
pub mod middleware;
pub mod notifications;
pub mod registrations;
pub mod responses;
pub mod sessions;

use axum::Router;

/// Assembles the full API router from per-resource states.
pub fn api_router(
    sessions: sessions::SessionHandlers,
    registrations: registrations::RegistrationHandlers,
    courses: courses::CourseHandlers,
    notifications: notifications::NotificationHandlers,
) -> Router {
    Router::new()
        .nest("/api/training-sessions", sessions::session_routes(sessions.clone()))
        .nest("/api/categories", sessions::category_routes(sessions))
        .nest(
            "/api/registrations",
            registrations::registration_routes(registrations),
        )
        .nest("/api/training-courses", courses::course_routes(courses.clone()))
        .nest("/api/course-content", courses::content_routes(courses.clone()))
        .nest(
            "/api/course-completions",
            courses::completion_routes(courses),
        )
        .nest(
            "/api/notifications",
            notifications::notification_routes(notifications),
        )
}
