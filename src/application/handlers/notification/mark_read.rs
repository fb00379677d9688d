//! MarkNotificationReadHandler - marks one notification read.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, CommandMetadata, NotificationId};
use crate::domain::notification::{Notification, NotificationError};
use crate::ports::NotificationRepository;

/// Command to mark a notification as read.
#[derive(Debug, Clone)]
pub struct MarkNotificationReadCommand {
    pub actor: AuthenticatedUser,
    pub notification_id: NotificationId,
}

/// Handler for marking a single notification read. Idempotent.
pub struct MarkNotificationReadHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl MarkNotificationReadHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn handle(
        &self,
        cmd: MarkNotificationReadCommand,
        _metadata: CommandMetadata,
    ) -> Result<Notification, NotificationError> {
        let mut notification = self
            .notifications
            .find_by_id(&cmd.notification_id)
            .await?
            .ok_or_else(|| NotificationError::not_found(cmd.notification_id))?;

        notification.authorize(&cmd.actor.id)?;

        if notification.mark_read() {
            self.notifications.update(&notification).await?;
        }

        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryNotificationRepository;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::notification::Priority;

    fn trainee(id: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(id).unwrap(),
            format!("{}@example.com", id),
            None,
            Role::Trainee,
        )
    }

    fn fixture() -> (MarkNotificationReadHandler, Arc<InMemoryNotificationRepository>, NotificationId) {
        let notification = Notification::new(
            NotificationId::new(),
            UserId::new("trainee-1").unwrap(),
            "Registration approved".to_string(),
            "Your seat is confirmed.".to_string(),
            Priority::Normal,
        )
        .unwrap();
        let notification_id = *notification.id();

        let repo = Arc::new(InMemoryNotificationRepository::with_notifications(vec![
            notification,
        ]));
        let handler = MarkNotificationReadHandler::new(repo.clone());
        (handler, repo, notification_id)
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(UserId::new("trainee-1").unwrap())
    }

    #[tokio::test]
    async fn marks_notification_read() {
        let (handler, repo, notification_id) = fixture();

        let notification = handler
            .handle(
                MarkNotificationReadCommand {
                    actor: trainee("trainee-1"),
                    notification_id,
                },
                metadata(),
            )
            .await
            .unwrap();

        assert!(notification.is_read());

        let stored = repo.find_by_id(&notification_id).await.unwrap().unwrap();
        assert!(stored.is_read());
    }

    #[tokio::test]
    async fn marking_twice_is_idempotent() {
        let (handler, _repo, notification_id) = fixture();
        let cmd = MarkNotificationReadCommand {
            actor: trainee("trainee-1"),
            notification_id,
        };

        let first = handler.handle(cmd.clone(), metadata()).await.unwrap();
        let second = handler.handle(cmd, metadata()).await.unwrap();

        assert_eq!(first.read_at(), second.read_at());
    }

    #[tokio::test]
    async fn foreign_notification_is_forbidden() {
        let (handler, _repo, notification_id) = fixture();

        let result = handler
            .handle(
                MarkNotificationReadCommand {
                    actor: trainee("trainee-2"),
                    notification_id,
                },
                metadata(),
            )
            .await;

        assert!(matches!(result, Err(NotificationError::Forbidden)));
    }

    #[tokio::test]
    async fn missing_notification_fails() {
        let (handler, _repo, _notification_id) = fixture();

        let result = handler
            .handle(
                MarkNotificationReadCommand {
                    actor: trainee("trainee-1"),
                    notification_id: NotificationId::new(),
                },
                metadata(),
            )
            .await;

        assert!(matches!(result, Err(NotificationError::NotFound(_))));
    }
}
