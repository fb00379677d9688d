//! Notification repository port.

use crate::domain::foundation::{DomainError, NotificationId, UserId};
use crate::domain::notification::Notification;
use async_trait::async_trait;

/// Repository port for Notification persistence.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Save a new notification.
    async fn save(&self, notification: &Notification) -> Result<(), DomainError>;

    /// Update an existing notification.
    ///
    /// # Errors
    ///
    /// - `NotificationNotFound` if the notification doesn't exist
    async fn update(&self, notification: &Notification) -> Result<(), DomainError>;

    /// Find a notification by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &NotificationId)
        -> Result<Option<Notification>, DomainError>;

    /// All notifications of a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Notification>, DomainError>;

    /// Mark every unread notification of a user as read.
    ///
    /// Returns the number of notifications flipped. Idempotent: a second
    /// call returns 0.
    async fn mark_all_read(&self, user_id: &UserId) -> Result<u64, DomainError>;
}
