//! HTTP routes for course, content, and completion endpoints.

use axum::{
    routing::{delete, patch, post},
    Router,
};

use super::handlers::{
    create_course, delete_content, mark_complete, save_content, toggle_course_active,
    update_course, CourseHandlers,
};

/// Creates the course router.
pub fn course_routes(handlers: CourseHandlers) -> Router {
    Router::new()
        .route("/", post(create_course))
        .route("/:id", patch(update_course))
        .route("/:id/toggle-active", post(toggle_course_active))
        .with_state(handlers)
}

/// Creates the course-content router.
pub fn content_routes(handlers: CourseHandlers) -> Router {
    Router::new()
        .route("/", post(save_content))
        .route("/:course_id/:content_id", delete(delete_content))
        .with_state(handlers)
}

/// Creates the completion router.
pub fn completion_routes(handlers: CourseHandlers) -> Router {
    Router::new()
        .route("/mark-complete", post(mark_complete))
        .with_state(handlers)
}
