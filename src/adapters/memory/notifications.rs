//! In-memory notification repository.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, NotificationId, UserId};
use crate::domain::notification::Notification;
use crate::ports::NotificationRepository;

/// In-memory `NotificationRepository`.
#[derive(Default)]
pub struct InMemoryNotificationRepository {
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: Mutex::new(notifications),
        }
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn save(&self, notification: &Notification) -> Result<(), DomainError> {
        self.notifications
            .lock()
            .expect("InMemoryNotificationRepository: lock poisoned")
            .push(notification.clone());
        Ok(())
    }

    async fn update(&self, notification: &Notification) -> Result<(), DomainError> {
        let mut notifications = self
            .notifications
            .lock()
            .expect("InMemoryNotificationRepository: lock poisoned");
        match notifications.iter().position(|n| n.id() == notification.id()) {
            Some(pos) => {
                notifications[pos] = notification.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::NotificationNotFound,
                format!("Notification not found: {}", notification.id()),
            )),
        }
    }

    async fn find_by_id(
        &self,
        id: &NotificationId,
    ) -> Result<Option<Notification>, DomainError> {
        Ok(self
            .notifications
            .lock()
            .expect("InMemoryNotificationRepository: lock poisoned")
            .iter()
            .find(|n| n.id() == id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Notification>, DomainError> {
        let mut list: Vec<Notification> = self
            .notifications
            .lock()
            .expect("InMemoryNotificationRepository: lock poisoned")
            .iter()
            .filter(|n| n.user_id() == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(list)
    }

    async fn mark_all_read(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let mut notifications = self
            .notifications
            .lock()
            .expect("InMemoryNotificationRepository: lock poisoned");
        let mut flipped = 0;
        for notification in notifications
            .iter_mut()
            .filter(|n| n.user_id() == user_id)
        {
            if notification.mark_read() {
                flipped += 1;
            }
        }
        Ok(flipped)
    }
}
