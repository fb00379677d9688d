//! Notification command and query handlers.

mod list_notifications;
mod mark_all_read;
mod mark_read;

pub use list_notifications::{
    ListNotificationsHandler, ListNotificationsQuery, NotificationList,
};
pub use mark_all_read::{MarkAllReadCommand, MarkAllReadHandler};
pub use mark_read::{MarkNotificationReadCommand, MarkNotificationReadHandler};
