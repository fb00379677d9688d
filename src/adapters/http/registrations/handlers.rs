//! HTTP handlers for registration and dashboard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::responses::{error_response, ErrorResponse};
use crate::application::handlers::dashboard::{
    GetDashboardOverviewHandler, GetDashboardOverviewQuery,
};
use crate::application::handlers::feedback::{SubmitFeedbackCommand, SubmitFeedbackHandler};
use crate::application::handlers::registration::{
    ApproveRegistrationCommand, ApproveRegistrationHandler, CancelRegistrationCommand,
    CancelRegistrationHandler, EnrollCommand, EnrollHandler, GetRosterHandler, GetRosterQuery,
    ListPendingRegistrationsHandler, ListPendingRegistrationsQuery, RejectRegistrationCommand,
    RejectRegistrationHandler, WithdrawRegistrationCommand, WithdrawRegistrationHandler,
};
use crate::domain::foundation::{CommandMetadata, Rating, RegistrationId, SessionId};
use crate::domain::registration::{DenialReason, RegistrationError};

use super::dto::{
    DashboardResponse, EnrollRequest, FeedbackResponse, RegistrationResponse, RosterEntryResponse,
    SubmitFeedbackRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RegistrationHandlers {
    enroll_handler: Arc<EnrollHandler>,
    approve_handler: Arc<ApproveRegistrationHandler>,
    reject_handler: Arc<RejectRegistrationHandler>,
    withdraw_handler: Arc<WithdrawRegistrationHandler>,
    cancel_handler: Arc<CancelRegistrationHandler>,
    pending_handler: Arc<ListPendingRegistrationsHandler>,
    roster_handler: Arc<GetRosterHandler>,
    dashboard_handler: Arc<GetDashboardOverviewHandler>,
    feedback_handler: Arc<SubmitFeedbackHandler>,
}

impl RegistrationHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        enroll_handler: Arc<EnrollHandler>,
        approve_handler: Arc<ApproveRegistrationHandler>,
        reject_handler: Arc<RejectRegistrationHandler>,
        withdraw_handler: Arc<WithdrawRegistrationHandler>,
        cancel_handler: Arc<CancelRegistrationHandler>,
        pending_handler: Arc<ListPendingRegistrationsHandler>,
        roster_handler: Arc<GetRosterHandler>,
        dashboard_handler: Arc<GetDashboardOverviewHandler>,
        feedback_handler: Arc<SubmitFeedbackHandler>,
    ) -> Self {
        Self {
            enroll_handler,
            approve_handler,
            reject_handler,
            withdraw_handler,
            cancel_handler,
            pending_handler,
            roster_handler,
            dashboard_handler,
            feedback_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/registrations - Enroll into a session
pub async fn enroll(
    State(handlers): State<RegistrationHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<EnrollRequest>,
) -> Response {
    let session_id = match req.training_session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid session ID")),
            )
                .into_response()
        }
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = EnrollCommand {
        actor: user,
        session_id,
    };

    match handlers.enroll_handler.handle(cmd, metadata).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(RegistrationResponse::from(&result.registration)),
        )
            .into_response(),
        Err(e) => handle_registration_error(e),
    }
}

/// POST /api/registrations/:id/approve
pub async fn approve_registration(
    State(handlers): State<RegistrationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(registration_id): Path<String>,
) -> Response {
    let registration_id = match parse_registration_id(&registration_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = ApproveRegistrationCommand {
        actor: user,
        registration_id,
    };

    match handlers.approve_handler.handle(cmd, metadata).await {
        Ok(registration) => {
            (StatusCode::OK, Json(RegistrationResponse::from(&registration))).into_response()
        }
        Err(e) => handle_registration_error(e),
    }
}

/// POST /api/registrations/:id/reject
pub async fn reject_registration(
    State(handlers): State<RegistrationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(registration_id): Path<String>,
) -> Response {
    let registration_id = match parse_registration_id(&registration_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = RejectRegistrationCommand {
        actor: user,
        registration_id,
    };

    match handlers.reject_handler.handle(cmd, metadata).await {
        Ok(registration) => {
            (StatusCode::OK, Json(RegistrationResponse::from(&registration))).into_response()
        }
        Err(e) => handle_registration_error(e),
    }
}

/// POST /api/registrations/:id/withdraw
pub async fn withdraw_registration(
    State(handlers): State<RegistrationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(registration_id): Path<String>,
) -> Response {
    let registration_id = match parse_registration_id(&registration_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = WithdrawRegistrationCommand {
        actor: user,
        registration_id,
    };

    match handlers.withdraw_handler.handle(cmd, metadata).await {
        Ok(registration) => {
            (StatusCode::OK, Json(RegistrationResponse::from(&registration))).into_response()
        }
        Err(e) => handle_registration_error(e),
    }
}

/// POST /api/registrations/:id/cancel
pub async fn cancel_registration(
    State(handlers): State<RegistrationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(registration_id): Path<String>,
) -> Response {
    let registration_id = match parse_registration_id(&registration_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = CancelRegistrationCommand {
        actor: user,
        registration_id,
    };

    match handlers.cancel_handler.handle(cmd, metadata).await {
        Ok(registration) => {
            (StatusCode::OK, Json(RegistrationResponse::from(&registration))).into_response()
        }
        Err(e) => handle_registration_error(e),
    }
}

/// POST /api/registrations/:id/feedback - Submit feedback
pub async fn submit_feedback(
    State(handlers): State<RegistrationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(registration_id): Path<String>,
    Json(req): Json<SubmitFeedbackRequest>,
) -> Response {
    let registration_id = match parse_registration_id(&registration_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let rating = match Rating::new(req.rating) {
        Ok(rating) => rating,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = SubmitFeedbackCommand {
        actor: user,
        registration_id,
        rating,
        comment: req.comment,
    };

    match handlers.feedback_handler.handle(cmd, metadata).await {
        Ok(feedback) => {
            (StatusCode::CREATED, Json(FeedbackResponse::from(&feedback))).into_response()
        }
        Err(e) => handle_registration_error(e),
    }
}

/// GET /api/registrations/status/pending - Approval queue
pub async fn list_pending(
    State(handlers): State<RegistrationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListPendingRegistrationsQuery { actor: user };

    match handlers.pending_handler.handle(query).await {
        Ok(registrations) => {
            let body: Vec<RegistrationResponse> =
                registrations.iter().map(RegistrationResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_registration_error(e),
    }
}

/// GET /api/registrations/session/:session_id - Session roster
pub async fn session_roster(
    State(handlers): State<RegistrationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid session ID")),
            )
                .into_response()
        }
    };

    let query = GetRosterQuery {
        actor: user,
        session_id,
    };

    match handlers.roster_handler.handle(query).await {
        Ok(roster) => {
            let body: Vec<RosterEntryResponse> =
                roster.iter().map(RosterEntryResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_registration_error(e),
    }
}

/// GET /api/registrations/dashboard/stats - Dashboard overview
pub async fn dashboard_stats(
    State(handlers): State<RegistrationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetDashboardOverviewQuery { actor: user };

    match handlers.dashboard_handler.handle(query).await {
        Ok(overview) => {
            (StatusCode::OK, Json(DashboardResponse::from(overview))).into_response()
        }
        Err(e) => handle_registration_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_registration_id(raw: &str) -> Result<RegistrationId, Response> {
    raw.parse::<RegistrationId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid registration ID")),
        )
            .into_response()
    })
}

fn handle_registration_error(error: RegistrationError) -> Response {
    // Eligibility denials carry a reason code so the client renders the
    // specific copy, not a generic failure.
    if let RegistrationError::EnrollmentDenied(reason) = &error {
        return (
            StatusCode::CONFLICT,
            Json(
                ErrorResponse::new(reason.code(), reason.user_message()).with_details(
                    serde_json::json!({
                        "current_status": denial_status(reason),
                    }),
                ),
            ),
        )
            .into_response();
    }

    error_response(error.code(), error.message())
}

fn denial_status(reason: &DenialReason) -> Option<String> {
    match reason {
        DenialReason::AlreadyRegistered(status) => Some(status.to_string()),
        _ => None,
    }
}
