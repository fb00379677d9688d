//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::responses::{error_response, ErrorResponse};
use crate::application::handlers::session::{
    ArchiveSessionCommand, ArchiveSessionHandler, CreateSessionCommand, CreateSessionHandler,
    ListCategoriesHandler, ListCategoriesQuery, ListSessionsHandler, ListSessionsQuery,
    UpdateSessionCommand, UpdateSessionHandler,
};
use crate::domain::foundation::{CategoryId, CommandMetadata, SessionId, UserId};
use crate::domain::session::{SessionError, SessionSchedule};

use super::dto::{
    CategoryResponse, CreateSessionRequest, ListSessionsParams, SessionResponse,
    UpdateSessionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    update_handler: Arc<UpdateSessionHandler>,
    archive_handler: Arc<ArchiveSessionHandler>,
    list_handler: Arc<ListSessionsHandler>,
    categories_handler: Arc<ListCategoriesHandler>,
}

impl SessionHandlers {
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        update_handler: Arc<UpdateSessionHandler>,
        archive_handler: Arc<ArchiveSessionHandler>,
        list_handler: Arc<ListSessionsHandler>,
        categories_handler: Arc<ListCategoriesHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            archive_handler,
            list_handler,
            categories_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/training-sessions - Create a session
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateSessionRequest>,
) -> Response {
    let schedule = match SessionSchedule::new(req.date, req.start_time, req.end_time) {
        Ok(schedule) => schedule,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let trainer_id = match parse_trainer(req.trainer_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let category_id = match parse_category(req.category_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = CreateSessionCommand {
        actor: user,
        skill_name: req.skill_name,
        description: req.description,
        schedule,
        location: req.location,
        max_participants: req.max_participants,
        trainer_id,
        category_id,
    };

    match handlers.create_handler.handle(cmd, metadata).await {
        Ok(result) => {
            (StatusCode::CREATED, Json(SessionResponse::from(&result.session))).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/training-sessions - List sessions
pub async fn list_sessions(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListSessionsParams>,
) -> Response {
    let query = ListSessionsQuery {
        actor: user,
        include_archived: params.include_archived,
    };

    match handlers.list_handler.handle(query).await {
        Ok(sessions) => {
            let body: Vec<SessionResponse> = sessions.iter().map(SessionResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// PATCH /api/training-sessions/:id - Update a session
pub async fn update_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
    Json(req): Json<UpdateSessionRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let schedule = match SessionSchedule::new(req.date, req.start_time, req.end_time) {
        Ok(schedule) => schedule,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };
    let trainer_id = match parse_trainer(req.trainer_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let category_id = match parse_category(req.category_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = UpdateSessionCommand {
        actor: user,
        session_id,
        skill_name: req.skill_name,
        description: req.description,
        schedule,
        location: req.location,
        max_participants: req.max_participants,
        trainer_id,
        category_id,
    };

    match handlers.update_handler.handle(cmd, metadata).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/training-sessions/:id/archive - Archive a session
pub async fn archive_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = ArchiveSessionCommand {
        actor: user,
        session_id,
    };

    match handlers.archive_handler.handle(cmd, metadata).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/categories - List categories
pub async fn list_categories(
    State(handlers): State<SessionHandlers>,
    RequireAuth(_user): RequireAuth,
) -> Response {
    match handlers.categories_handler.handle(ListCategoriesQuery).await {
        Ok(categories) => {
            let body: Vec<CategoryResponse> =
                categories.iter().map(CategoryResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn parse_trainer(raw: Option<String>) -> Result<Option<UserId>, Response> {
    raw.map(UserId::new).transpose().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid trainer ID")),
        )
            .into_response()
    })
}

fn parse_category(raw: Option<String>) -> Result<Option<CategoryId>, Response> {
    raw.map(|s| s.parse::<CategoryId>()).transpose().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid category ID")),
        )
            .into_response()
    })
}

fn handle_session_error(error: SessionError) -> Response {
    error_response(error.code(), error.message())
}
