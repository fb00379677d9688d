//! Session category entity.

use crate::domain::foundation::{CategoryId, DomainError, Timestamp};
use serde::{Deserialize, Serialize};

/// Category grouping for training sessions. Read-mostly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: Timestamp,
}

impl Category {
    /// Creates an active category.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is empty
    pub fn new(id: CategoryId, name: String, description: Option<String>) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            description,
            is_active: true,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute from persistence.
    pub fn reconstitute(
        id: CategoryId,
        name: String,
        description: Option<String>,
        is_active: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_active,
            created_at,
        }
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Enables or disables the category.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_category_is_active() {
        let category =
            Category::new(CategoryId::new(), "Programming".to_string(), None).unwrap();
        assert!(category.is_active());
        assert_eq!(category.name(), "Programming");
    }

    #[test]
    fn new_category_rejects_empty_name() {
        let result = Category::new(CategoryId::new(), "   ".to_string(), None);
        assert!(result.is_err());
    }

    #[test]
    fn set_active_toggles() {
        let mut category =
            Category::new(CategoryId::new(), "Programming".to_string(), None).unwrap();
        category.set_active(false);
        assert!(!category.is_active());
        category.set_active(true);
        assert!(category.is_active());
    }
}
