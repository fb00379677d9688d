//! Notification entity and unread counting.

use crate::domain::foundation::{DomainError, ErrorCode, NotificationId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Notification priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// A message delivered to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    user_id: UserId,
    title: String,
    message: String,
    priority: Priority,
    is_read: bool,
    created_at: Timestamp,
    read_at: Option<Timestamp>,
}

impl Notification {
    /// Creates an unread notification.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title or message is empty
    pub fn new(
        id: NotificationId,
        user_id: UserId,
        title: String,
        message: String,
        priority: Priority,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("title", "Title cannot be empty"));
        }
        if message.trim().is_empty() {
            return Err(DomainError::validation("message", "Message cannot be empty"));
        }
        Ok(Self {
            id,
            user_id,
            title,
            message,
            priority,
            is_read: false,
            created_at: Timestamp::now(),
            read_at: None,
        })
    }

    /// Reconstitute from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: NotificationId,
        user_id: UserId,
        title: String,
        message: String,
        priority: Priority,
        is_read: bool,
        created_at: Timestamp,
        read_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            message,
            priority,
            is_read,
            created_at,
            read_at,
        }
    }

    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn read_at(&self) -> Option<&Timestamp> {
        self.read_at.as_ref()
    }

    /// Checks that the given user owns this notification.
    ///
    /// # Errors
    ///
    /// - `Forbidden` for any other user
    pub fn authorize(&self, user_id: &UserId) -> Result<(), DomainError> {
        if &self.user_id == user_id {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "Notification belongs to another user",
            ))
        }
    }

    /// Marks the notification read.
    ///
    /// Returns `true` if the flag changed, `false` if it was already read.
    pub fn mark_read(&mut self) -> bool {
        if self.is_read {
            return false;
        }
        self.is_read = true;
        self.read_at = Some(Timestamp::now());
        true
    }
}

/// Number of unread notifications in the collection.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read()).count()
}

/// Notification-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// Notification was not found.
    NotFound(NotificationId),
    /// Notification belongs to another user.
    Forbidden,
    /// Infrastructure error.
    Infrastructure(String),
}

impl NotificationError {
    pub fn not_found(id: NotificationId) -> Self {
        NotificationError::NotFound(id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        NotificationError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            NotificationError::NotFound(_) => ErrorCode::NotificationNotFound,
            NotificationError::Forbidden => ErrorCode::Forbidden,
            NotificationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl std::fmt::Display for NotificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationError::NotFound(id) => write!(f, "Notification not found: {}", id),
            NotificationError::Forbidden => write!(f, "Permission denied"),
            NotificationError::Infrastructure(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for NotificationError {}

impl From<DomainError> for NotificationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => NotificationError::Forbidden,
            _ => NotificationError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification_for(user: &str) -> Notification {
        Notification::new(
            NotificationId::new(),
            UserId::new(user).unwrap(),
            "Registration approved".to_string(),
            "Your seat for Rust Fundamentals is confirmed.".to_string(),
            Priority::Normal,
        )
        .unwrap()
    }

    #[test]
    fn new_notification_is_unread() {
        let notification = notification_for("trainee-1");
        assert!(!notification.is_read());
        assert!(notification.read_at().is_none());
    }

    #[test]
    fn new_notification_rejects_empty_title() {
        let result = Notification::new(
            NotificationId::new(),
            UserId::new("trainee-1").unwrap(),
            "  ".to_string(),
            "body".to_string(),
            Priority::Low,
        );
        assert!(result.is_err());
    }

    #[test]
    fn mark_read_sets_flag_and_timestamp() {
        let mut notification = notification_for("trainee-1");
        assert!(notification.mark_read());
        assert!(notification.is_read());
        assert!(notification.read_at().is_some());
    }

    #[test]
    fn mark_read_twice_is_noop() {
        let mut notification = notification_for("trainee-1");
        notification.mark_read();
        let read_at = *notification.read_at().unwrap();

        assert!(!notification.mark_read());
        assert_eq!(notification.read_at(), Some(&read_at));
    }

    #[test]
    fn owner_is_authorized_others_are_not() {
        let notification = notification_for("trainee-1");
        assert!(notification.authorize(&UserId::new("trainee-1").unwrap()).is_ok());
        assert!(notification.authorize(&UserId::new("trainee-2").unwrap()).is_err());
    }

    #[test]
    fn unread_count_counts_only_unread() {
        let mut read = notification_for("trainee-1");
        read.mark_read();

        let notifications = vec![
            notification_for("trainee-1"),
            read,
            notification_for("trainee-1"),
        ];

        assert_eq!(unread_count(&notifications), 2);
    }

    #[test]
    fn unread_count_of_empty_collection_is_zero() {
        assert_eq!(unread_count(&[]), 0);
    }

    #[test]
    fn priority_orders_low_to_urgent() {
        assert!(Priority::Low < Priority::Normal);
        assert!(Priority::Normal < Priority::High);
        assert!(Priority::High < Priority::Urgent);
    }

    #[test]
    fn priority_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Priority::Urgent).unwrap(), "\"urgent\"");
    }
}
