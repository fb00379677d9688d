//! Dashboard module - the aggregation engine.
//!
//! Pure functions over entity collections. Recomputed whenever a backing
//! collection changes; every function is idempotent and order-independent,
//! so refetch-and-recompute is always safe.

mod activity;
mod stats;

pub use activity::{recent_activity, ActivityEntry, ActivityKind};
pub use stats::{registration_stats, session_buckets, RegistrationStats, SessionBuckets};
