//! HTTP surface for notifications.

mod dto;
mod handlers;
mod routes;

pub use handlers::NotificationHandlers;
pub use routes::notification_routes;
