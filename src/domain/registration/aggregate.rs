//! Registration aggregate entity.
//!
//! Registrations are created `pending` by a trainee's enroll action and
//! only ever change status - never disappear. Decision operations are
//! idempotent: repeating an already-applied decision returns `Ok(false)`
//! instead of failing, which absorbs double submits from slow networks.

use crate::domain::foundation::{RegistrationId, SessionId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

use super::{RegistrationError, RegistrationStatus};

/// A trainee's registration for a training session.
///
/// # Invariants
///
/// - At most one registration per (user, session) in a status that
///   blocks re-enrollment (enforced by the eligibility evaluator and a
///   unique index in the store)
/// - `status` only moves along the edges of `RegistrationStatus`
/// - `completed` is only reachable from `confirmed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Unique identifier for this registration.
    id: RegistrationId,

    /// The enrolling trainee.
    user_id: UserId,

    /// The session enrolled into.
    session_id: SessionId,

    /// Current lifecycle status.
    status: RegistrationStatus,

    /// When the trainee enrolled.
    registered_at: Timestamp,

    /// When the status last changed.
    updated_at: Timestamp,
}

impl Registration {
    /// Creates a new pending registration.
    ///
    /// Eligibility must have been checked by the caller; this constructor
    /// only establishes the initial state.
    pub fn new(id: RegistrationId, user_id: UserId, session_id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            user_id,
            session_id,
            status: RegistrationStatus::Pending,
            registered_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a registration from persistence.
    pub fn reconstitute(
        id: RegistrationId,
        user_id: UserId,
        session_id: SessionId,
        status: RegistrationStatus,
        registered_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            session_id,
            status,
            registered_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the registration ID.
    pub fn id(&self) -> &RegistrationId {
        &self.id
    }

    /// Returns the trainee's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the session ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the current status.
    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    /// Returns when the trainee enrolled.
    pub fn registered_at(&self) -> &Timestamp {
        &self.registered_at
    }

    /// Returns when the status last changed.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks if this registration belongs to the given user.
    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Approve a pending registration (pending -> confirmed).
    ///
    /// Returns `Ok(true)` if the status changed, `Ok(false)` if the
    /// registration was already confirmed (idempotent no-op).
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` from any other status
    pub fn approve(&mut self) -> Result<bool, RegistrationError> {
        match self.status {
            RegistrationStatus::Confirmed => Ok(false),
            _ => self.apply(RegistrationStatus::Confirmed),
        }
    }

    /// Reject a pending registration (pending -> cancelled).
    ///
    /// Returns `Ok(true)` if the status changed, `Ok(false)` if the
    /// registration was already cancelled (idempotent no-op).
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` from any other status
    pub fn reject(&mut self) -> Result<bool, RegistrationError> {
        match self.status {
            RegistrationStatus::Cancelled => Ok(false),
            RegistrationStatus::Pending => self.apply(RegistrationStatus::Cancelled),
            from => Err(RegistrationError::invalid_transition(
                from,
                RegistrationStatus::Cancelled,
            )),
        }
    }

    /// Trainee withdraws their own pending registration (pending -> cancelled).
    ///
    /// Same edge as `reject`, kept separate so the acting party is explicit
    /// in handlers and events.
    pub fn withdraw(&mut self) -> Result<bool, RegistrationError> {
        self.reject()
    }

    /// Coordinator revokes a confirmed registration (confirmed -> cancelled).
    ///
    /// Returns `Ok(true)` if the status changed, `Ok(false)` if already
    /// cancelled.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` from any status other than confirmed/cancelled
    pub fn cancel(&mut self) -> Result<bool, RegistrationError> {
        match self.status {
            RegistrationStatus::Cancelled => Ok(false),
            RegistrationStatus::Confirmed => self.apply(RegistrationStatus::Cancelled),
            from => Err(RegistrationError::invalid_transition(
                from,
                RegistrationStatus::Cancelled,
            )),
        }
    }

    /// System completion once the session has ended (confirmed -> completed).
    ///
    /// Returns `Ok(true)` if the status changed, `Ok(false)` if already
    /// completed.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` from any status other than confirmed/completed
    pub fn complete(&mut self) -> Result<bool, RegistrationError> {
        match self.status {
            RegistrationStatus::Completed => Ok(false),
            _ => self.apply(RegistrationStatus::Completed),
        }
    }

    /// Applies a validated transition, leaving state untouched on failure.
    fn apply(&mut self, target: RegistrationStatus) -> Result<bool, RegistrationError> {
        use crate::domain::foundation::StateMachine;

        if !self.status.can_transition_to(&target) {
            return Err(RegistrationError::invalid_transition(self.status, target));
        }
        self.status = target;
        self.updated_at = Timestamp::now();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trainee() -> UserId {
        UserId::new("trainee-1").unwrap()
    }

    fn pending_registration() -> Registration {
        Registration::new(RegistrationId::new(), trainee(), SessionId::new())
    }

    fn confirmed_registration() -> Registration {
        let mut reg = pending_registration();
        reg.approve().unwrap();
        reg
    }

    // Construction

    #[test]
    fn new_registration_is_pending() {
        let reg = pending_registration();
        assert_eq!(reg.status(), RegistrationStatus::Pending);
    }

    #[test]
    fn belongs_to_matches_trainee() {
        let reg = pending_registration();
        assert!(reg.belongs_to(&trainee()));
        assert!(!reg.belongs_to(&UserId::new("other").unwrap()));
    }

    // Approve

    #[test]
    fn approve_pending_confirms() {
        let mut reg = pending_registration();
        assert_eq!(reg.approve(), Ok(true));
        assert_eq!(reg.status(), RegistrationStatus::Confirmed);
    }

    #[test]
    fn approve_twice_is_noop() {
        let mut reg = pending_registration();
        reg.approve().unwrap();
        assert_eq!(reg.approve(), Ok(false));
        assert_eq!(reg.status(), RegistrationStatus::Confirmed);
    }

    #[test]
    fn approve_cancelled_fails_and_leaves_status() {
        let mut reg = pending_registration();
        reg.reject().unwrap();

        let result = reg.approve();
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidTransition { .. })
        ));
        assert_eq!(reg.status(), RegistrationStatus::Cancelled);
    }

    #[test]
    fn approve_completed_fails() {
        let mut reg = confirmed_registration();
        reg.complete().unwrap();
        assert!(reg.approve().is_err());
        assert_eq!(reg.status(), RegistrationStatus::Completed);
    }

    // Reject / withdraw

    #[test]
    fn reject_pending_cancels() {
        let mut reg = pending_registration();
        assert_eq!(reg.reject(), Ok(true));
        assert_eq!(reg.status(), RegistrationStatus::Cancelled);
    }

    #[test]
    fn reject_twice_is_noop() {
        let mut reg = pending_registration();
        reg.reject().unwrap();
        assert_eq!(reg.reject(), Ok(false));
        assert_eq!(reg.status(), RegistrationStatus::Cancelled);
    }

    #[test]
    fn reject_confirmed_fails() {
        let mut reg = confirmed_registration();
        let result = reg.reject();
        assert!(result.is_err());
        assert_eq!(reg.status(), RegistrationStatus::Confirmed);
    }

    #[test]
    fn withdraw_pending_cancels() {
        let mut reg = pending_registration();
        assert_eq!(reg.withdraw(), Ok(true));
        assert_eq!(reg.status(), RegistrationStatus::Cancelled);
    }

    // Cancel (confirmed -> cancelled)

    #[test]
    fn cancel_confirmed_succeeds() {
        let mut reg = confirmed_registration();
        assert_eq!(reg.cancel(), Ok(true));
        assert_eq!(reg.status(), RegistrationStatus::Cancelled);
    }

    #[test]
    fn cancel_pending_fails() {
        // Revoking is only valid for confirmed registrations; pending ones
        // go through reject/withdraw.
        let mut reg = pending_registration();
        assert!(reg.cancel().is_err());
        assert_eq!(reg.status(), RegistrationStatus::Pending);
    }

    #[test]
    fn cancel_already_cancelled_is_noop() {
        let mut reg = confirmed_registration();
        reg.cancel().unwrap();
        assert_eq!(reg.cancel(), Ok(false));
    }

    // Complete

    #[test]
    fn complete_confirmed_succeeds() {
        let mut reg = confirmed_registration();
        assert_eq!(reg.complete(), Ok(true));
        assert_eq!(reg.status(), RegistrationStatus::Completed);
    }

    #[test]
    fn complete_twice_is_noop() {
        let mut reg = confirmed_registration();
        reg.complete().unwrap();
        assert_eq!(reg.complete(), Ok(false));
        assert_eq!(reg.status(), RegistrationStatus::Completed);
    }

    #[test]
    fn complete_pending_fails() {
        let mut reg = pending_registration();
        let result = reg.complete();
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidTransition { .. })
        ));
        assert_eq!(reg.status(), RegistrationStatus::Pending);
    }

    #[test]
    fn complete_cancelled_fails() {
        let mut reg = pending_registration();
        reg.reject().unwrap();
        assert!(reg.complete().is_err());
        assert_eq!(reg.status(), RegistrationStatus::Cancelled);
    }

    // Error contents

    #[test]
    fn invalid_transition_error_names_both_states() {
        let mut reg = pending_registration();
        let err = reg.complete().unwrap_err();
        match err {
            RegistrationError::InvalidTransition { from, to } => {
                assert_eq!(from, RegistrationStatus::Pending);
                assert_eq!(to, RegistrationStatus::Completed);
            }
            other => panic!("Expected InvalidTransition, got {:?}", other),
        }
    }
}
