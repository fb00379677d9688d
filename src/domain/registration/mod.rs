//! Registration module - the enrollment lifecycle.
//!
//! A registration is a trainee's request to attend a training session. It
//! is created `pending`, decided by the owning coordinator
//! (`confirmed`/`cancelled`), and completed by the system once the session
//! has ended. Registrations are never hard-deleted; history feeds the
//! dashboard statistics.

mod aggregate;
mod eligibility;
mod errors;
mod events;
mod feedback;
mod status;

pub use aggregate::Registration;
pub use eligibility::{can_enroll, DenialReason, Eligibility};
pub use errors::RegistrationError;
pub use events::{
    RegistrationApproved, RegistrationCancelled, RegistrationCompleted, RegistrationRejected,
    TraineeEnrolled,
};
pub use feedback::{Feedback, MAX_COMMENT_LENGTH};
pub use status::RegistrationStatus;
