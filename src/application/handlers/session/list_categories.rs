//! ListCategoriesHandler - category lookup for session forms and filters.

use std::sync::Arc;

use crate::domain::session::{Category, SessionError};
use crate::ports::CategoryRepository;

/// Query for all categories. No authorization: categories are public
/// read-mostly reference data.
#[derive(Debug, Clone)]
pub struct ListCategoriesQuery;

/// Handler for listing categories.
pub struct ListCategoriesHandler {
    categories: Arc<dyn CategoryRepository>,
}

impl ListCategoriesHandler {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn handle(&self, _query: ListCategoriesQuery) -> Result<Vec<Category>, SessionError> {
        Ok(self.categories.list_all().await?)
    }
}
