//! HTTP surface for training sessions and categories.

mod dto;
mod handlers;
mod routes;

pub use handlers::SessionHandlers;
pub use routes::{category_routes, session_routes};
