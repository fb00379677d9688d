//! Course command handlers.

mod create_course;
mod delete_content;
mod mark_complete;
mod save_content;
mod toggle_active;
mod update_course;

pub use create_course::{CreateCourseCommand, CreateCourseHandler};
pub use delete_content::{DeleteContentCommand, DeleteContentHandler};
pub use mark_complete::{MarkCourseCompleteCommand, MarkCourseCompleteHandler};
pub use save_content::{SaveContentCommand, SaveContentHandler, SaveContentResult};
pub use toggle_active::{ToggleCourseActiveCommand, ToggleCourseActiveHandler};
pub use update_course::{UpdateCourseCommand, UpdateCourseHandler};
