//! Course module.
//!
//! Courses are the learning units attached to a training session, edited
//! by the session's assigned trainer. Each course carries at most one
//! "current" content item (the newest row wins when the store holds more)
//! and per-trainee completion records.

mod aggregate;
mod completion;
mod content;
mod errors;
mod events;

pub use aggregate::{Course, MAX_TITLE_LENGTH};
pub use completion::{CompletionStatus, CourseCompletion};
pub use content::{
    current_content, render_mode, save_disposition, ContentPayload, ContentType, CourseContent,
    RenderMode, SaveDisposition, StoredFile,
};
pub use errors::CourseError;
pub use events::{CourseActiveToggled, CourseCompleted, CourseContentSaved, CourseCreated};
