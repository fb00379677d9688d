//! In-memory adapter implementations.
//!
//! Deterministic, lock-based implementations of the persistence ports.
//! Used by handler tests and the integration suite; also handy as a dev
//! mode backend. Not for production - locks use `.expect()` and data dies
//! with the process.

mod courses;
mod notifications;
mod registrations;
mod sessions;

pub use courses::{InMemoryCompletionRepository, InMemoryContentRepository, InMemoryCourseRepository};
pub use notifications::InMemoryNotificationRepository;
pub use registrations::{
    InMemoryFeedbackRepository, InMemoryRegistrationRepository, InMemoryRosterReader,
};
pub use sessions::{InMemoryCategoryRepository, InMemorySessionRepository};
