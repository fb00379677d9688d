//! Session command and query handlers.

mod archive_session;
mod create_session;
mod list_categories;
mod list_sessions;
mod update_session;

pub use archive_session::{ArchiveSessionCommand, ArchiveSessionHandler};
pub use create_session::{CreateSessionCommand, CreateSessionHandler, CreateSessionResult};
pub use list_categories::{ListCategoriesHandler, ListCategoriesQuery};
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
pub use update_session::{UpdateSessionCommand, UpdateSessionHandler};
