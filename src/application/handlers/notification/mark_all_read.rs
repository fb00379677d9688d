//! MarkAllReadHandler - clears a user's unread badge in one go.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, CommandMetadata};
use crate::domain::notification::NotificationError;
use crate::ports::NotificationRepository;

/// Command to mark every notification of the acting user as read.
#[derive(Debug, Clone)]
pub struct MarkAllReadCommand {
    pub actor: AuthenticatedUser,
}

/// Handler for bulk mark-read. Idempotent; always scoped to the actor.
pub struct MarkAllReadHandler {
    notifications: Arc<dyn NotificationRepository>,
}

impl MarkAllReadHandler {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    /// Returns the number of notifications flipped to read.
    pub async fn handle(
        &self,
        cmd: MarkAllReadCommand,
        _metadata: CommandMetadata,
    ) -> Result<u64, NotificationError> {
        Ok(self.notifications.mark_all_read(&cmd.actor.id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryNotificationRepository;
    use crate::domain::foundation::{NotificationId, Role, UserId};
    use crate::domain::notification::{Notification, Priority};
    use crate::ports::NotificationRepository as _;

    fn trainee() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("trainee-1").unwrap(),
            "t@example.com",
            None,
            Role::Trainee,
        )
    }

    fn notification(user: &str) -> Notification {
        Notification::new(
            NotificationId::new(),
            UserId::new(user).unwrap(),
            "Reminder".to_string(),
            "Session starts soon.".to_string(),
            Priority::High,
        )
        .unwrap()
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(UserId::new("trainee-1").unwrap())
    }

    #[tokio::test]
    async fn marks_only_own_notifications() {
        let repo = Arc::new(InMemoryNotificationRepository::with_notifications(vec![
            notification("trainee-1"),
            notification("trainee-1"),
            notification("trainee-2"),
        ]));
        let handler = MarkAllReadHandler::new(repo.clone());

        let flipped = handler
            .handle(MarkAllReadCommand { actor: trainee() }, metadata())
            .await
            .unwrap();
        assert_eq!(flipped, 2);

        let other = repo
            .list_by_user(&UserId::new("trainee-2").unwrap())
            .await
            .unwrap();
        assert!(!other[0].is_read());
    }

    #[tokio::test]
    async fn second_run_flips_nothing() {
        let repo = Arc::new(InMemoryNotificationRepository::with_notifications(vec![
            notification("trainee-1"),
        ]));
        let handler = MarkAllReadHandler::new(repo);

        handler
            .handle(MarkAllReadCommand { actor: trainee() }, metadata())
            .await
            .unwrap();
        let second = handler
            .handle(MarkAllReadCommand { actor: trainee() }, metadata())
            .await
            .unwrap();

        assert_eq!(second, 0);
    }
}
