//! Application layer - command and query handlers.
//!
//! One handler per operation, CQRS style: load, authorize via the access
//! matrix, validate the domain rule, persist, publish events.

pub mod handlers;
