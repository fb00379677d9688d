//! Notification module.
//!
//! Notifications are per-user messages with a read flag and a priority.
//! The unread badge count is a pure function over the user's collection.

mod aggregate;

pub use aggregate::{unread_count, Notification, NotificationError, Priority};
