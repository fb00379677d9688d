//! TrainHub server binary.
//!
//! Wires configuration, the PostgreSQL pool, repositories, command
//! handlers, and the HTTP router, then serves. A background task sweeps
//! confirmed registrations of ended sessions to completed.

use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use sqlx::postgres::PgPoolOptions;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trainhub::adapters::auth::JwtTokenVerifier;
use trainhub::adapters::events::TracingEventPublisher;
use trainhub::adapters::http::middleware::{auth_middleware, AuthState};
use trainhub::adapters::http::{
    api_router, courses::CourseHandlers, notifications::NotificationHandlers,
    registrations::RegistrationHandlers, sessions::SessionHandlers,
};
use trainhub::adapters::postgres::{
    PostgresCategoryRepository, PostgresCompletionRepository, PostgresContentRepository,
    PostgresCourseRepository, PostgresFeedbackRepository, PostgresNotificationRepository,
    PostgresRegistrationRepository, PostgresRosterReader, PostgresSessionRepository,
};
use trainhub::adapters::storage::LocalFileStorage;
use trainhub::application::handlers::course::{
    CreateCourseHandler, DeleteContentHandler, MarkCourseCompleteHandler, SaveContentHandler,
    ToggleCourseActiveHandler, UpdateCourseHandler,
};
use trainhub::application::handlers::dashboard::GetDashboardOverviewHandler;
use trainhub::application::handlers::feedback::SubmitFeedbackHandler;
use trainhub::application::handlers::notification::{
    ListNotificationsHandler, MarkAllReadHandler, MarkNotificationReadHandler,
};
use trainhub::application::handlers::registration::{
    ApproveRegistrationHandler, CancelRegistrationHandler, CompleteElapsedRegistrationsHandler,
    EnrollHandler, GetRosterHandler, ListPendingRegistrationsHandler, RejectRegistrationHandler,
    WithdrawRegistrationHandler,
};
use trainhub::application::handlers::session::{
    ArchiveSessionHandler, CreateSessionHandler, ListCategoriesHandler, ListSessionsHandler,
    UpdateSessionHandler,
};
use trainhub::config::AppConfig;
use trainhub::domain::foundation::Timestamp;
use trainhub::ports::EventPublisher;

/// How often the completion sweep runs.
const SWEEP_INTERVAL_SECS: u64 = 300;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    // Adapters
    let sessions = Arc::new(PostgresSessionRepository::new(pool.clone()));
    let registrations = Arc::new(PostgresRegistrationRepository::new(pool.clone()));
    let courses = Arc::new(PostgresCourseRepository::new(pool.clone()));
    let contents = Arc::new(PostgresContentRepository::new(pool.clone()));
    let completions = Arc::new(PostgresCompletionRepository::new(pool.clone()));
    let feedback = Arc::new(PostgresFeedbackRepository::new(pool.clone()));
    let notifications = Arc::new(PostgresNotificationRepository::new(pool.clone()));
    let categories = Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let roster = Arc::new(PostgresRosterReader::new(pool.clone()));
    let storage = Arc::new(LocalFileStorage::new(config.storage.upload_dir.clone()));
    let events: Arc<dyn EventPublisher> = Arc::new(TracingEventPublisher::new());
    let verifier: AuthState = Arc::new(JwtTokenVerifier::new(&config.auth));

    // Session handlers
    let session_handlers = SessionHandlers::new(
        Arc::new(CreateSessionHandler::new(sessions.clone(), events.clone())),
        Arc::new(UpdateSessionHandler::new(sessions.clone(), events.clone())),
        Arc::new(ArchiveSessionHandler::new(sessions.clone(), events.clone())),
        Arc::new(ListSessionsHandler::new(sessions.clone())),
        Arc::new(ListCategoriesHandler::new(categories.clone())),
    );

    // Registration handlers
    let sweep_handler = Arc::new(CompleteElapsedRegistrationsHandler::new(
        sessions.clone(),
        registrations.clone(),
        events.clone(),
    ));
    let registration_handlers = RegistrationHandlers::new(
        Arc::new(EnrollHandler::new(
            sessions.clone(),
            registrations.clone(),
            events.clone(),
        )),
        Arc::new(ApproveRegistrationHandler::new(
            registrations.clone(),
            sessions.clone(),
            notifications.clone(),
            events.clone(),
        )),
        Arc::new(RejectRegistrationHandler::new(
            registrations.clone(),
            sessions.clone(),
            notifications.clone(),
            events.clone(),
        )),
        Arc::new(WithdrawRegistrationHandler::new(
            registrations.clone(),
            events.clone(),
        )),
        Arc::new(CancelRegistrationHandler::new(
            registrations.clone(),
            sessions.clone(),
            events.clone(),
        )),
        Arc::new(ListPendingRegistrationsHandler::new(
            sessions.clone(),
            registrations.clone(),
        )),
        Arc::new(GetRosterHandler::new(sessions.clone(), roster)),
        Arc::new(GetDashboardOverviewHandler::new(
            sessions.clone(),
            registrations.clone(),
            notifications.clone(),
            categories.clone(),
        )),
        Arc::new(SubmitFeedbackHandler::new(registrations.clone(), feedback)),
    );

    // Course handlers
    let course_handlers = CourseHandlers::new(
        Arc::new(CreateCourseHandler::new(
            sessions.clone(),
            courses.clone(),
            events.clone(),
        )),
        Arc::new(UpdateCourseHandler::new(courses.clone(), sessions.clone())),
        Arc::new(ToggleCourseActiveHandler::new(
            courses.clone(),
            sessions.clone(),
            events.clone(),
        )),
        Arc::new(SaveContentHandler::new(
            courses.clone(),
            sessions.clone(),
            contents.clone(),
            events.clone(),
        )),
        Arc::new(DeleteContentHandler::new(
            courses.clone(),
            sessions.clone(),
            contents.clone(),
            storage.clone(),
        )),
        Arc::new(MarkCourseCompleteHandler::new(
            courses.clone(),
            completions.clone(),
            events.clone(),
        )),
        storage.clone(),
    );
    // Notification handlers
    let notification_handlers = NotificationHandlers::new(
        Arc::new(ListNotificationsHandler::new(notifications.clone())),
        Arc::new(MarkNotificationReadHandler::new(notifications.clone())),
        Arc::new(MarkAllReadHandler::new(notifications.clone())),
    );

    // Background completion sweep
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(SWEEP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            if let Err(e) = sweep_handler.handle(Timestamp::now()).await {
                tracing::error!("completion sweep failed: {}", e);
            }
        }
    });

    let app = api_router(
        session_handlers,
        registration_handlers,
        course_handlers,
        notification_handlers,
    )
    .layer(middleware::from_fn_with_state(verifier, auth_middleware))
    .layer(TraceLayer::new_for_http())
    .layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )))
    .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr();
    tracing::info!("trainhub listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
