//! Rating value object for session feedback (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Feedback rating: 1 (poor) to 5 (excellent).
///
/// Deserialization goes through `TryFrom<u8>` so out-of-range wire values
/// are rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl Rating {
    /// Minimum allowed rating.
    pub const MIN: u8 = 1;
    /// Maximum allowed rating.
    pub const MAX: u8 = 5;

    /// Creates a Rating, returning error if out of the 1-5 range.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "rating",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true for ratings of 4 or above.
    pub fn is_positive(&self) -> bool {
        self.0 >= 4
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_valid_values() {
        for value in 1..=5 {
            assert_eq!(Rating::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn rating_rejects_zero() {
        assert!(Rating::new(0).is_err());
    }

    #[test]
    fn rating_rejects_above_five() {
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(255).is_err());
    }

    #[test]
    fn rating_is_positive_for_four_and_five() {
        assert!(!Rating::new(3).unwrap().is_positive());
        assert!(Rating::new(4).unwrap().is_positive());
        assert!(Rating::new(5).unwrap().is_positive());
    }

    #[test]
    fn rating_displays_with_scale() {
        assert_eq!(format!("{}", Rating::new(4).unwrap()), "4/5");
    }

    #[test]
    fn rating_serializes_as_number() {
        let rating = Rating::new(3).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "3");
    }

    #[test]
    fn rating_deserializes_from_number() {
        let rating: Rating = serde_json::from_str("5").unwrap();
        assert_eq!(rating.value(), 5);
    }

    #[test]
    fn rating_deserialization_rejects_out_of_range() {
        let result: Result<Rating, _> = serde_json::from_str("9");
        assert!(result.is_err());
    }

    #[test]
    fn rating_ordering_works() {
        assert!(Rating::new(1).unwrap() < Rating::new(5).unwrap());
    }
}
