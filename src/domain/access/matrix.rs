//! Role/action authorization matrix.
//!
//! The matrix is a total function over `(Role, Action)`; adding a role or
//! an action without deciding every cell is a compile error. Cells resolve
//! to a `Scope`, which `authorize` then grounds against a concrete session.

use crate::domain::foundation::{AuthenticatedUser, DomainError, Role};
use crate::domain::session::TrainingSession;

/// Mutating and privileged operations gated by the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Enroll into a session (self only, by construction).
    EnrollInSession,
    /// Approve, reject, or revoke registrations.
    ManageRegistrations,
    /// Create, edit, or archive a session.
    EditSession,
    /// Create or edit a course, toggle its active flag.
    EditCourse,
    /// Create, edit, or delete course content.
    EditCourseContent,
    /// Submit feedback for an own confirmed registration.
    SubmitFeedback,
    /// View the registered-trainee list of a session.
    ViewRoster,
}

impl Action {
    /// All actions, for exhaustive iteration in tests.
    pub const ALL: [Action; 7] = [
        Action::EnrollInSession,
        Action::ManageRegistrations,
        Action::EditSession,
        Action::EditCourse,
        Action::EditCourseContent,
        Action::SubmitFeedback,
        Action::ViewRoster,
    ];
}

/// How far a role's permission for an action reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Never allowed.
    Denied,
    /// Allowed on any session.
    Any,
    /// Allowed on sessions the actor coordinates.
    OwnSessions,
    /// Allowed on sessions the actor is the assigned trainer of.
    AssignedSessions,
    /// Allowed, acting on the actor's own behalf only.
    SelfOnly,
}

/// The matrix cell for a role and action.
///
/// Trainee content-edit access is `Any`: inherited from the product as
/// shipped, where the content editor is offered to every course viewer.
pub fn scope_for(role: Role, action: Action) -> Scope {
    use Action::*;
    use Role::*;

    // Admin and SuperAdmin share every permission.
    if role.is_admin() {
        return match action {
            EnrollInSession | SubmitFeedback => Scope::Denied,
            ManageRegistrations | EditSession | EditCourse | EditCourseContent | ViewRoster => {
                Scope::Any
            }
        };
    }

    match (role, action) {
        (Trainee, EnrollInSession) => Scope::SelfOnly,
        (Trainee, SubmitFeedback) => Scope::SelfOnly,
        (Trainee, EditCourseContent) => Scope::Any,
        (Trainee, _) => Scope::Denied,

        (Trainer, EditCourse) => Scope::AssignedSessions,
        (Trainer, EditCourseContent) => Scope::AssignedSessions,
        (Trainer, ViewRoster) => Scope::AssignedSessions,
        (Trainer, _) => Scope::Denied,

        (Coordinator, ManageRegistrations) => Scope::OwnSessions,
        (Coordinator, EditSession) => Scope::Any,
        (Coordinator, EditCourseContent) => Scope::OwnSessions,
        (Coordinator, ViewRoster) => Scope::OwnSessions,
        (Coordinator, _) => Scope::Denied,

        // Handled by the is_admin branch above.
        (Admin | SuperAdmin, _) => unreachable!("admin roles resolved earlier"),
    }
}

/// Grounds the actor's scope for `action` against a concrete session.
///
/// `SelfOnly` resolves to allowed: the gated handlers only ever act on the
/// actor's own registration or feedback.
///
/// # Errors
///
/// - `Forbidden` when the scope denies, or the session relation
///   (coordinator/trainer) does not hold
pub fn authorize(
    actor: &AuthenticatedUser,
    action: Action,
    session: &TrainingSession,
) -> Result<(), DomainError> {
    let allowed = match scope_for(actor.role, action) {
        Scope::Denied => false,
        Scope::Any => true,
        Scope::SelfOnly => true,
        Scope::OwnSessions => session.is_coordinator(&actor.id),
        Scope::AssignedSessions => session.is_trainer(&actor.id),
    };

    if allowed {
        Ok(())
    } else {
        Err(DomainError::forbidden(format!(
            "Role {} may not perform {:?} on this session",
            actor.role, action
        ))
        .with_detail("role", actor.role.as_str())
        .with_detail("session_id", session.id().to_string())
        .with_detail("user_id", actor.id.to_string()))
    }
}
