//! Course content and the content resolver.
//!
//! A course's material is one item of exactly one type: a text blob, a
//! video URL, or an uploaded image/file. The store's schema allows several
//! rows per course; the product treats the newest row as "the" content.
//! That simplification is deliberate and lives in `current_content` - if
//! ordered multi-content syllabi ever become real, this is the one place
//! to change.

use crate::domain::foundation::{ContentId, CourseId, DomainError, Timestamp};
use serde::{Deserialize, Serialize};

/// The four content kinds, as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Text,
    Video,
    File,
    Image,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContentType::Text => "text",
            ContentType::Video => "video",
            ContentType::File => "file",
            ContentType::Image => "image",
        };
        write!(f, "{}", s)
    }
}

/// Reference to an uploaded binary stored by the `ContentStorage` port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Storage key returned by the storage adapter.
    pub key: String,
    /// Original filename, for download headers.
    pub filename: String,
}

/// Content payload - one interpretation per type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPayload {
    /// Inline text material.
    Text { body: String },
    /// External video URL.
    Video { url: String },
    /// Uploaded document.
    File { file: StoredFile },
    /// Uploaded image.
    Image { file: StoredFile },
}

impl ContentPayload {
    /// Returns the content type of this payload.
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentPayload::Text { .. } => ContentType::Text,
            ContentPayload::Video { .. } => ContentType::Video,
            ContentPayload::File { .. } => ContentType::File,
            ContentPayload::Image { .. } => ContentType::Image,
        }
    }
}

/// One content item of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseContent {
    id: ContentId,
    course_id: CourseId,
    payload: ContentPayload,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl CourseContent {
    /// Creates a content item.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a text body or video URL is empty
    pub fn new(
        id: ContentId,
        course_id: CourseId,
        payload: ContentPayload,
    ) -> Result<Self, DomainError> {
        Self::validate_payload(&payload)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            course_id,
            payload,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute from persistence.
    pub fn reconstitute(
        id: ContentId,
        course_id: CourseId,
        payload: ContentPayload,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            course_id,
            payload,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &ContentId {
        &self.id
    }

    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    pub fn payload(&self) -> &ContentPayload {
        &self.payload
    }

    pub fn content_type(&self) -> ContentType {
        self.payload.content_type()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Replace the payload, switching type if needed.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for an invalid payload
    pub fn replace_payload(&mut self, payload: ContentPayload) -> Result<(), DomainError> {
        Self::validate_payload(&payload)?;
        self.payload = payload;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn validate_payload(payload: &ContentPayload) -> Result<(), DomainError> {
        match payload {
            ContentPayload::Text { body } if body.trim().is_empty() => Err(
                DomainError::validation("content", "Text content cannot be empty"),
            ),
            ContentPayload::Video { url } if url.trim().is_empty() => Err(
                DomainError::validation("content", "Video URL cannot be empty"),
            ),
            _ => Ok(()),
        }
    }
}

/// How course content renders in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Text,
    Video,
    File,
    Image,
    /// Nothing to render; a neutral empty state, never an error.
    Empty,
}

/// Whether a "save content" action creates a new row or updates the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveDisposition {
    Create,
    Update(ContentId),
}

/// Selects the single current content item: newest `created_at` wins,
/// ties broken by id for determinism.
pub fn current_content(contents: &[CourseContent]) -> Option<&CourseContent> {
    contents
        .iter()
        .max_by(|a, b| {
            a.created_at()
                .cmp(b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        })
}

/// Dispatches the render mode for the resolved content.
pub fn render_mode(content: Option<&CourseContent>) -> RenderMode {
    match content.map(CourseContent::content_type) {
        Some(ContentType::Text) => RenderMode::Text,
        Some(ContentType::Video) => RenderMode::Video,
        Some(ContentType::File) => RenderMode::File,
        Some(ContentType::Image) => RenderMode::Image,
        None => RenderMode::Empty,
    }
}

/// Create-vs-update branch for the save-content flow.
pub fn save_disposition(contents: &[CourseContent]) -> SaveDisposition {
    match current_content(contents) {
        Some(content) => SaveDisposition::Update(*content.id()),
        None => SaveDisposition::Create,
    }
}
