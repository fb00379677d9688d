//! ListNotificationsHandler - a user's inbox with unread count.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::notification::{unread_count, Notification, NotificationError};
use crate::ports::NotificationRepository;

/// Query for the acting user's notifications.
#[derive(Debug, Clone)]
pub struct ListNotificationsQuery {
    pub actor: AuthenticatedUser,
}

/// Inbox view: items plus the derived unread badge count.
#[derive(Debug, Clone)]
pub struct NotificationList {
    pub items: Vec<Notification>,
    pub unread: usize,
}

/// Handler for the notification inbox.
pub struct ListNotificationsHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl ListNotificationsHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn handle(
        &self,
        query: ListNotificationsQuery,
    ) -> Result<NotificationList, NotificationError> {
        let items = self.notifications.list_by_user(&query.actor.id).await?;
        let unread = unread_count(&items);
        Ok(NotificationList { items, unread })
    }
}
