//! Feedback attached to a confirmed registration.

use crate::domain::foundation::{
    DomainError, FeedbackId, Rating, RegistrationId, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::{Registration, RegistrationStatus};

/// Maximum feedback comment length.
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Trainee feedback for an attended session.
///
/// # Invariants
///
/// - Only attaches to a registration that is or was confirmed
///   (confirmed or completed)
/// - `rating` is 1-5 (enforced by the `Rating` value object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    id: FeedbackId,
    registration_id: RegistrationId,
    rating: Rating,
    comment: Option<String>,
    created_at: Timestamp,
}

impl Feedback {
    /// Creates feedback for a registration.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the registration was never confirmed, or the
    ///   comment exceeds the length limit
    pub fn for_registration(
        id: FeedbackId,
        registration: &Registration,
        rating: Rating,
        comment: Option<String>,
    ) -> Result<Self, DomainError> {
        match registration.status() {
            RegistrationStatus::Confirmed | RegistrationStatus::Completed => {}
            status => {
                return Err(DomainError::validation(
                    "registration",
                    format!("Feedback requires a confirmed registration (status: {})", status),
                ));
            }
        }

        if let Some(ref comment) = comment {
            if comment.len() > MAX_COMMENT_LENGTH {
                return Err(DomainError::validation(
                    "comment",
                    format!("Comment must be {} characters or less", MAX_COMMENT_LENGTH),
                ));
            }
        }

        Ok(Self {
            id,
            registration_id: *registration.id(),
            rating,
            comment,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute from persistence.
    pub fn reconstitute(
        id: FeedbackId,
        registration_id: RegistrationId,
        rating: Rating,
        comment: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            registration_id,
            rating,
            comment,
            created_at,
        }
    }

    pub fn id(&self) -> &FeedbackId {
        &self.id
    }

    pub fn registration_id(&self) -> &RegistrationId {
        &self.registration_id
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
