//! ListSessionsHandler - active sessions for browsing and enrollment.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::session::{SessionError, TrainingSession};
use crate::ports::SessionRepository;

/// Query for the session list.
///
/// `include_archived` is honored for admins only; everyone else always
/// gets the active view.
#[derive(Debug, Clone)]
pub struct ListSessionsQuery {
    pub actor: AuthenticatedUser,
    pub include_archived: bool,
}

/// Handler for listing sessions.
pub struct ListSessionsHandler {
    sessions: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        query: ListSessionsQuery,
    ) -> Result<Vec<TrainingSession>, SessionError> {
        let sessions = if query.include_archived && query.actor.role.is_admin() {
            self.sessions.list_all().await?
        } else {
            self.sessions.list_active().await?
        };
        Ok(sessions)
    }
}
