//! HTTP DTOs for notification endpoints.

use serde::Serialize;

use crate::application::handlers::notification::NotificationList;
use crate::domain::notification::{Notification, Priority};

/// Notification view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub is_read: bool,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<String>,
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id().to_string(),
            title: notification.title().to_string(),
            message: notification.message().to_string(),
            priority: notification.priority(),
            is_read: notification.is_read(),
            created_at: notification.created_at().as_datetime().to_rfc3339(),
            read_at: notification
                .read_at()
                .map(|t| t.as_datetime().to_rfc3339()),
        }
    }
}

/// Inbox view with the derived unread badge count.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationListResponse {
    pub items: Vec<NotificationResponse>,
    pub unread: usize,
}

impl From<NotificationList> for NotificationListResponse {
    fn from(list: NotificationList) -> Self {
        Self {
            items: list.items.iter().map(NotificationResponse::from).collect(),
            unread: list.unread,
        }
    }
}

/// Response for bulk mark-read.
#[derive(Debug, Clone, Serialize)]
pub struct MarkAllReadResponse {
    pub marked: u64,
}
