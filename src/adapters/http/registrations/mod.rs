//! HTTP surface for registrations, rosters, and the dashboard.

mod dto;
mod handlers;
mod routes;

pub use handlers::RegistrationHandlers;
pub use routes::registration_routes;
