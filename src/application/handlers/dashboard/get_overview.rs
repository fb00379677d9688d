//! GetDashboardOverviewHandler - derived views for the landing page.
//!
//! Recomputes every aggregate from freshly fetched collections on each
//! call. Nothing is cached: refetch-and-recompute after every mutation is
//! the consistency model.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::dashboard::{
    recent_activity, registration_stats, session_buckets, ActivityEntry, RegistrationStats,
    SessionBuckets,
};
use crate::domain::foundation::{AuthenticatedUser, Role, Timestamp};
use crate::domain::notification::unread_count;
use crate::domain::registration::{Registration, RegistrationError};
use crate::ports::{
    CategoryRepository, NotificationRepository, RegistrationRepository, SessionRepository,
};

/// Number of entries in the recent-activity feed.
const ACTIVITY_LIMIT: usize = 10;

/// Query for the dashboard overview.
#[derive(Debug, Clone)]
pub struct GetDashboardOverviewQuery {
    pub actor: AuthenticatedUser,
}

/// Aggregated dashboard view.
#[derive(Debug, Clone)]
pub struct DashboardOverview {
    pub stats: RegistrationStats,
    pub buckets: SessionBuckets,
    pub recent_activity: Vec<ActivityEntry>,
    pub unread_notifications: usize,
}

/// Handler computing the dashboard overview.
///
/// Statistics are scoped to what the actor may see: trainees their own
/// registrations, coordinators the registrations of their sessions,
/// admins everything.
pub struct GetDashboardOverviewHandler {
    sessions: Arc<dyn SessionRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    notifications: Arc<dyn NotificationRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl GetDashboardOverviewHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        notifications: Arc<dyn NotificationRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            sessions,
            registrations,
            notifications,
            categories,
        }
    }

    pub async fn handle(
        &self,
        query: GetDashboardOverviewQuery,
    ) -> Result<DashboardOverview, RegistrationError> {
        let (sessions, notifications, categories) = futures::try_join!(
            self.sessions.list_active(),
            self.notifications.list_by_user(&query.actor.id),
            self.categories.list_all(),
        )?;

        let registrations = self.visible_registrations(&query.actor).await?;

        let today = Timestamp::now().date();
        Ok(DashboardOverview {
            stats: registration_stats(&registrations),
            buckets: session_buckets(&sessions, today),
            recent_activity: recent_activity(
                &sessions,
                &registrations,
                &categories,
                ACTIVITY_LIMIT,
            ),
            unread_notifications: unread_count(&notifications),
        })
    }

    /// Registrations in the actor's view scope.
    async fn visible_registrations(
        &self,
        actor: &AuthenticatedUser,
    ) -> Result<Vec<Registration>, RegistrationError> {
        if actor.role.is_admin() {
            return Ok(self.registrations.list_all().await?);
        }

        match actor.role {
            Role::Coordinator => {
                let own_sessions = self.sessions.list_by_coordinator(&actor.id).await?;
                let per_session = try_join_all(
                    own_sessions
                        .iter()
                        .map(|s| self.registrations.list_by_session(s.id())),
                )
                .await?;
                Ok(per_session.into_iter().flatten().collect())
            }
            _ => Ok(self.registrations.list_by_user(&actor.id).await?),
        }
    }
}
