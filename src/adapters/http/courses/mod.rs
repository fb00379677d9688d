//! HTTP surface for courses, course content, and completions.

mod dto;
mod handlers;
mod routes;

pub use handlers::CourseHandlers;
pub use routes::{completion_routes, content_routes, course_routes};
