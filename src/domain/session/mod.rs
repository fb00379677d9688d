//! Training session module.
//!
//! Sessions are the top-level scheduling unit: a skill taught at a date and
//! time window, at a location, with bounded capacity. Each session is owned
//! by one coordinator, optionally assigned a trainer and a category, and
//! carries courses and registrations (referenced by ID, not owned).

mod aggregate;
mod category;
mod errors;
mod events;
mod schedule;
mod status;

pub use aggregate::{TrainingSession, MAX_SKILL_NAME_LENGTH};
pub use category::Category;
pub use errors::SessionError;
pub use events::{SessionArchived, SessionCreated, SessionUpdated, TrainerAssigned};
pub use schedule::SessionSchedule;
pub use status::SessionStatus;
