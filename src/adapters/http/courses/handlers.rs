//! HTTP handlers for course, content, and completion endpoints.

use std::sync::Arc;

use axum::{
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::responses::{error_response, ErrorResponse};
use crate::application::handlers::course::{
    CreateCourseCommand, CreateCourseHandler, DeleteContentCommand, DeleteContentHandler,
    MarkCourseCompleteCommand, MarkCourseCompleteHandler, SaveContentCommand, SaveContentHandler,
    ToggleCourseActiveCommand, ToggleCourseActiveHandler, UpdateCourseCommand,
    UpdateCourseHandler,
};
use crate::domain::course::{ContentPayload, CourseError};
use crate::domain::foundation::{CommandMetadata, ContentId, CourseId, SessionId};
use crate::ports::ContentStorage;

use super::dto::{
    CompletionResponse, ContentResponse, CourseResponse, CreateCourseRequest, MarkCompleteRequest,
    SaveContentRequest, UpdateCourseRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CourseHandlers {
    create_handler: Arc<CreateCourseHandler>,
    update_handler: Arc<UpdateCourseHandler>,
    toggle_handler: Arc<ToggleCourseActiveHandler>,
    save_content_handler: Arc<SaveContentHandler>,
    delete_content_handler: Arc<DeleteContentHandler>,
    mark_complete_handler: Arc<MarkCourseCompleteHandler>,
    storage: Arc<dyn ContentStorage>,
}

impl CourseHandlers {
    pub fn new(
        create_handler: Arc<CreateCourseHandler>,
        update_handler: Arc<UpdateCourseHandler>,
        toggle_handler: Arc<ToggleCourseActiveHandler>,
        save_content_handler: Arc<SaveContentHandler>,
        delete_content_handler: Arc<DeleteContentHandler>,
        mark_complete_handler: Arc<MarkCourseCompleteHandler>,
        storage: Arc<dyn ContentStorage>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            toggle_handler,
            save_content_handler,
            delete_content_handler,
            mark_complete_handler,
            storage,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Course handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/training-courses - Create a course
pub async fn create_course(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateCourseRequest>,
) -> Response {
    let session_id = match req.training_session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid session ID"),
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = CreateCourseCommand {
        actor: user,
        session_id,
        title: req.title,
        description: req.description,
        duration_hours: req.duration_hours,
    };

    match handlers.create_handler.handle(cmd, metadata).await {
        Ok(course) => (StatusCode::CREATED, Json(CourseResponse::from(&course))).into_response(),
        Err(e) => handle_course_error(e),
    }
}

/// PATCH /api/training-courses/:id - Update a course
pub async fn update_course(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path(course_id): Path<String>,
    Json(req): Json<UpdateCourseRequest>,
) -> Response {
    let course_id = match parse_course_id(&course_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = UpdateCourseCommand {
        actor: user,
        course_id,
        title: req.title,
        description: req.description,
        duration_hours: req.duration_hours,
    };

    match handlers.update_handler.handle(cmd, metadata).await {
        Ok(course) => (StatusCode::OK, Json(CourseResponse::from(&course))).into_response(),
        Err(e) => handle_course_error(e),
    }
}

/// POST /api/training-courses/:id/toggle-active
pub async fn toggle_course_active(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path(course_id): Path<String>,
) -> Response {
    let course_id = match parse_course_id(&course_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = ToggleCourseActiveCommand {
        actor: user,
        course_id,
    };

    match handlers.toggle_handler.handle(cmd, metadata).await {
        Ok(course) => (StatusCode::OK, Json(CourseResponse::from(&course))).into_response(),
        Err(e) => handle_course_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Content handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/course-content - Save course content.
///
/// Text and video payloads arrive as JSON; image and file payloads as
/// multipart form data with fields `type`, `training_course_id`,
/// `content`. Both shapes funnel into the same save command.
pub async fn save_content(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    request: Request,
) -> Response {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("multipart/form-data"))
        .unwrap_or(false);

    let parsed = if is_multipart {
        match Multipart::from_request(request, &()).await {
            Ok(multipart) => parse_multipart_content(multipart, handlers.storage.as_ref()).await,
            Err(e) => Err(format!("Invalid multipart body: {}", e)),
        }
    } else {
        match Json::<SaveContentRequest>::from_request(request, &()).await {
            Ok(Json(req)) => parse_json_content(req),
            Err(e) => Err(format!("Invalid JSON body: {}", e)),
        }
    };

    let (course_id, payload) = match parsed {
        Ok(parts) => parts,
        Err(message) => return bad_request(&message),
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = SaveContentCommand {
        actor: user,
        course_id,
        payload,
    };

    match handlers.save_content_handler.handle(cmd, metadata).await {
        Ok(result) => {
            let status = if result.created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(ContentResponse::from(&result))).into_response()
        }
        Err(e) => handle_course_error(e),
    }
}

/// DELETE /api/course-content/:course_id/:content_id
pub async fn delete_content(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path((course_id, content_id)): Path<(String, String)>,
) -> Response {
    let course_id = match parse_course_id(&course_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let content_id = match content_id.parse::<ContentId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid content ID"),
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = DeleteContentCommand {
        actor: user,
        course_id,
        content_id,
    };

    match handlers.delete_content_handler.handle(cmd, metadata).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_course_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Completion handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/course-completions/mark-complete
pub async fn mark_complete(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<MarkCompleteRequest>,
) -> Response {
    let course_id = match req.training_course_id.parse::<CourseId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid course ID"),
    };

    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    let cmd = MarkCourseCompleteCommand {
        actor: user,
        course_id,
    };

    match handlers.mark_complete_handler.handle(cmd, metadata).await {
        Ok(completion) => {
            (StatusCode::OK, Json(CompletionResponse::from(&completion))).into_response()
        }
        Err(e) => handle_course_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Payload parsing
// ════════════════════════════════════════════════════════════════════════════

fn parse_json_content(req: SaveContentRequest) -> Result<(CourseId, ContentPayload), String> {
    let course_id = req
        .training_course_id
        .parse::<CourseId>()
        .map_err(|_| "Invalid course ID".to_string())?;

    let payload = match req.content_type.as_str() {
        "text" => ContentPayload::Text { body: req.content },
        "video" => ContentPayload::Video { url: req.content },
        "image" | "file" => {
            return Err("Binary content must be sent as multipart form data".to_string())
        }
        other => return Err(format!("Unknown content type: {}", other)),
    };

    Ok((course_id, payload))
}

async fn parse_multipart_content(
    mut multipart: Multipart,
    storage: &dyn ContentStorage,
) -> Result<(CourseId, ContentPayload), String> {
    let mut content_type: Option<String> = None;
    let mut course_id: Option<CourseId> = None;
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Invalid multipart field: {}", e))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("type") => {
                content_type = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| format!("Invalid type field: {}", e))?,
                );
            }
            Some("training_course_id") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| format!("Invalid course id field: {}", e))?;
                course_id = Some(raw.parse().map_err(|_| "Invalid course ID".to_string())?);
            }
            Some("content") => {
                let filename = field
                    .file_name()
                    .unwrap_or("upload")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Invalid content field: {}", e))?;
                upload = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let content_type = content_type.ok_or_else(|| "Missing 'type' field".to_string())?;
    let course_id = course_id.ok_or_else(|| "Missing 'training_course_id' field".to_string())?;
    let (filename, bytes) = upload.ok_or_else(|| "Missing 'content' field".to_string())?;

    let file = storage
        .store(&filename, bytes)
        .await
        .map_err(|e| format!("Upload failed: {}", e))?;

    let payload = match content_type.as_str() {
        "image" => ContentPayload::Image { file },
        "file" => ContentPayload::File { file },
        other => return Err(format!("Multipart content type must be image or file, got {}", other)),
    };

    Ok((course_id, payload))
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_course_id(raw: &str) -> Result<CourseId, Response> {
    raw.parse::<CourseId>().map_err(|_| bad_request("Invalid course ID"))
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

fn handle_course_error(error: CourseError) -> Response {
    error_response(error.code(), error.message())
}
