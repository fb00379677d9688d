//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `SessionRepository`, `RegistrationRepository`, `CourseRepository`,
//!   `ContentRepository`, `CompletionRepository`, `FeedbackRepository`,
//!   `NotificationRepository`, `CategoryRepository`
//! - `RosterReader` - read-side view joining registrations with user info
//!
//! ## Infrastructure Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `TokenVerifier` - Bearer-token validation for the HTTP layer
//! - `ContentStorage` - Binary upload storage for course content

mod category_repository;
mod completion_repository;
mod content_repository;
mod content_storage;
mod course_repository;
mod event_publisher;
mod feedback_repository;
mod notification_repository;
mod registration_repository;
mod roster_reader;
mod session_repository;
mod token_verifier;

pub use category_repository::CategoryRepository;
pub use completion_repository::CompletionRepository;
pub use content_repository::ContentRepository;
pub use content_storage::ContentStorage;
pub use course_repository::CourseRepository;
pub use event_publisher::EventPublisher;
pub use feedback_repository::FeedbackRepository;
pub use notification_repository::NotificationRepository;
pub use registration_repository::RegistrationRepository;
pub use roster_reader::{RosterEntry, RosterReader};
pub use session_repository::SessionRepository;
pub use token_verifier::TokenVerifier;
