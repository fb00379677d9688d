//! HTTP handlers for notification endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::responses::{error_response, ErrorResponse};
use crate::application::handlers::notification::{
    ListNotificationsHandler, ListNotificationsQuery, MarkAllReadCommand, MarkAllReadHandler,
    MarkNotificationReadCommand, MarkNotificationReadHandler,
};
use crate::domain::foundation::{CommandMetadata, NotificationId};
use crate::domain::notification::NotificationError;

use super::dto::{MarkAllReadResponse, NotificationListResponse, NotificationResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct NotificationHandlers {
    list_handler: Arc<ListNotificationsHandler>,
    mark_read_handler: Arc<MarkNotificationReadHandler>,
    mark_all_read_handler: Arc<MarkAllReadHandler>,
}

impl NotificationHandlers {
    pub fn new(
        list_handler: Arc<ListNotificationsHandler>,
        mark_read_handler: Arc<MarkNotificationReadHandler>,
        mark_all_read_handler: Arc<MarkAllReadHandler>,
    ) -> Self {
        Self {
            list_handler,
            mark_read_handler,
            mark_all_read_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/notifications - The actor's inbox
pub async fn list_notifications(
    State(handlers): State<NotificationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListNotificationsQuery { actor: user };

    match handlers.list_handler.handle(query).await {
        Ok(list) => {
            (StatusCode::OK, Json(NotificationListResponse::from(list))).into_response()
        }
        Err(e) => handle_notification_error(e),
    }
}

/// POST /api/notifications/:id/read - Mark one notification read
pub async fn mark_read(
    State(handlers): State<NotificationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(notification_id): Path<String>,
) -> Response {
    let notification_id = match notification_id.parse::<NotificationId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid notification ID")),
            )
                .into_response()
        }
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = MarkNotificationReadCommand {
        actor: user,
        notification_id,
    };

    match handlers.mark_read_handler.handle(cmd, metadata).await {
        Ok(notification) => {
            (StatusCode::OK, Json(NotificationResponse::from(&notification))).into_response()
        }
        Err(e) => handle_notification_error(e),
    }
}

/// POST /api/notifications/read-all - Mark every notification read
pub async fn mark_all_read(
    State(handlers): State<NotificationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = MarkAllReadCommand { actor: user };

    match handlers.mark_all_read_handler.handle(cmd, metadata).await {
        Ok(marked) => (StatusCode::OK, Json(MarkAllReadResponse { marked })).into_response(),
        Err(e) => handle_notification_error(e),
    }
}

fn handle_notification_error(error: NotificationError) -> Response {
    error_response(error.code(), error.to_string())
}
