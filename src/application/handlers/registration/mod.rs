//! Registration command and query handlers.

mod approve;
mod cancel;
mod complete_elapsed;
mod enroll;
mod get_roster;
mod list_pending;
mod reject;
mod withdraw;

pub use approve::{ApproveRegistrationCommand, ApproveRegistrationHandler};
pub use cancel::{CancelRegistrationCommand, CancelRegistrationHandler};
pub use complete_elapsed::{
    CompleteElapsedRegistrationsHandler, CompleteElapsedResult,
};
pub use enroll::{EnrollCommand, EnrollHandler, EnrollResult};
pub use get_roster::{GetRosterHandler, GetRosterQuery};
pub use list_pending::{ListPendingRegistrationsHandler, ListPendingRegistrationsQuery};
pub use reject::{RejectRegistrationCommand, RejectRegistrationHandler};
pub use withdraw::{WithdrawRegistrationCommand, WithdrawRegistrationHandler};
