//! User roles for the training platform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Closed set of platform roles.
///
/// The role is immutable for the lifetime of an authenticated session;
/// role changes are an external administrative action. Keeping this a
/// closed enum lets the authorization matrix match exhaustively instead
/// of comparing role strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Enrolls in sessions and completes courses.
    Trainee,
    /// Delivers courses and manages their content.
    Trainer,
    /// Creates sessions and decides on registrations.
    Coordinator,
    /// Platform administrator.
    Admin,
    /// Administrator with user-management powers (outside this service).
    SuperAdmin,
}

impl Role {
    /// All roles, in ascending order of privilege.
    pub const ALL: [Role; 5] = [
        Role::Trainee,
        Role::Trainer,
        Role::Coordinator,
        Role::Admin,
        Role::SuperAdmin,
    ];

    /// Returns true for administrator roles.
    ///
    /// SuperAdmin holds every permission Admin holds.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }

    /// Returns the wire representation (snake_case, as stored in tokens).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Trainee => "trainee",
            Role::Trainer => "trainer",
            Role::Coordinator => "coordinator",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trainee" => Ok(Role::Trainee),
            "trainer" => Ok(Role::Trainer),
            "coordinator" => Ok(Role::Coordinator),
            "admin" => Ok(Role::Admin),
            "super_admin" => Ok(Role::SuperAdmin),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("Unknown role: {}", other),
            )),
        }
    }
}
