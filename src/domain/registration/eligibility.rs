//! Enrollment eligibility evaluation.
//!
//! `can_enroll` is a pure function over the current user, the target
//! session, and the session's registrations as last fetched. It must be
//! re-evaluated against freshly loaded registrations after every refresh -
//! a cached verdict is exactly the stale-eligibility race that lets two
//! trainees claim the last seat. Even a fresh verdict is advisory: the
//! store's unique index and transactional capacity check are the authority.

use crate::domain::foundation::{AuthenticatedUser, Role, Timestamp};
use crate::domain::session::TrainingSession;

use super::{Registration, RegistrationStatus};

/// Why enrollment is currently denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// Only trainees enroll.
    WrongRole(Role),
    /// The session is archived and accepts no registrations.
    SessionArchived,
    /// The session has already started.
    SessionFinished,
    /// The trainee already holds a registration in the carried status.
    ///
    /// The current status is carried so the caller can surface it
    /// ("you are pending approval") instead of a generic error.
    AlreadyRegistered(RegistrationStatus),
    /// Pending + confirmed registrations have reached capacity.
    SessionFull,
}

impl DenialReason {
    /// Stable reason code for API payloads.
    pub fn code(&self) -> &'static str {
        match self {
            DenialReason::WrongRole(_) => "WRONG_ROLE",
            DenialReason::SessionArchived => "SESSION_ARCHIVED",
            DenialReason::SessionFinished => "SESSION_FINISHED",
            DenialReason::AlreadyRegistered(_) => "ALREADY_REGISTERED",
            DenialReason::SessionFull => "SESSION_FULL",
        }
    }

    /// Human-readable copy for this specific reason.
    pub fn user_message(&self) -> String {
        match self {
            DenialReason::WrongRole(role) => {
                format!("Only trainees can enroll (current role: {})", role)
            }
            DenialReason::SessionArchived => "This session is no longer available".to_string(),
            DenialReason::SessionFinished => "This session has already started".to_string(),
            DenialReason::AlreadyRegistered(status) => {
                format!("You are already registered (status: {})", status)
            }
            DenialReason::SessionFull => "This session is full".to_string(),
        }
    }
}

/// Outcome of an eligibility evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Allowed,
    Denied(DenialReason),
}

impl Eligibility {
    /// Returns true if enrollment is currently permitted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Eligibility::Allowed)
    }

    /// Returns the denial reason, if denied.
    pub fn denial_reason(&self) -> Option<DenialReason> {
        match self {
            Eligibility::Allowed => None,
            Eligibility::Denied(reason) => Some(*reason),
        }
    }
}

/// Decides whether `user` may enroll into `session` right now.
///
/// `registrations` must be the session's registrations (all trainees), as
/// freshly fetched. Checks run in a fixed order so the surfaced reason is
/// deterministic:
///
/// 1. role must be trainee
/// 2. session must not be archived
/// 3. session must not have started (time-aware)
/// 4. no blocking registration for this user (pending/confirmed/completed)
/// 5. pending + confirmed count must be below capacity
pub fn can_enroll(
    user: &AuthenticatedUser,
    session: &TrainingSession,
    registrations: &[Registration],
    now: Timestamp,
) -> Eligibility {
    if user.role != Role::Trainee {
        return Eligibility::Denied(DenialReason::WrongRole(user.role));
    }

    if session.is_archived() {
        return Eligibility::Denied(DenialReason::SessionArchived);
    }

    if session.is_finished(now) {
        return Eligibility::Denied(DenialReason::SessionFinished);
    }

    if let Some(existing) = registrations
        .iter()
        .filter(|r| r.session_id() == session.id())
        .find(|r| r.belongs_to(&user.id) && r.status().blocks_reenrollment())
    {
        return Eligibility::Denied(DenialReason::AlreadyRegistered(existing.status()));
    }

    let occupied = registrations
        .iter()
        .filter(|r| r.session_id() == session.id())
        .filter(|r| r.status().counts_toward_capacity())
        .count();
    if occupied >= session.max_participants() as usize {
        return Eligibility::Denied(DenialReason::SessionFull);
    }

    Eligibility::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RegistrationId, SessionId, UserId};
    use crate::domain::session::SessionSchedule;

    fn trainee(id: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(id).unwrap(),
            format!("{}@example.com", id),
            None,
            Role::Trainee,
        )
    }

    fn user_with_role(id: &str, role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), format!("{}@example.com", id), None, role)
    }

    fn future_session(max_participants: u32) -> TrainingSession {
        TrainingSession::new(
            SessionId::new(),
            UserId::new("coordinator-1").unwrap(),
            "Rust Fundamentals".to_string(),
            SessionSchedule::new(
                "2030-06-01".parse().unwrap(),
                "10:00:00".parse().unwrap(),
                "12:00:00".parse().unwrap(),
            )
            .unwrap(),
            "Room 2B".to_string(),
            max_participants,
        )
        .unwrap()
    }

    fn past_session(max_participants: u32) -> TrainingSession {
        TrainingSession::new(
            SessionId::new(),
            UserId::new("coordinator-1").unwrap(),
            "Rust Fundamentals".to_string(),
            SessionSchedule::new(
                "2020-06-01".parse().unwrap(),
                "10:00:00".parse().unwrap(),
                "12:00:00".parse().unwrap(),
            )
            .unwrap(),
            "Room 2B".to_string(),
            max_participants,
        )
        .unwrap()
    }

    fn registration_for(
        session: &TrainingSession,
        user_id: &str,
        status: RegistrationStatus,
    ) -> Registration {
        let mut reg = Registration::new(
            RegistrationId::new(),
            UserId::new(user_id).unwrap(),
            *session.id(),
        );
        match status {
            RegistrationStatus::Pending => {}
            RegistrationStatus::Confirmed => {
                reg.approve().unwrap();
            }
            RegistrationStatus::Cancelled => {
                reg.reject().unwrap();
            }
            RegistrationStatus::Completed => {
                reg.approve().unwrap();
                reg.complete().unwrap();
            }
            RegistrationStatus::Failed => {
                reg = Registration::reconstitute(
                    *reg.id(),
                    UserId::new(user_id).unwrap(),
                    *session.id(),
                    RegistrationStatus::Failed,
                    *reg.registered_at(),
                    *reg.updated_at(),
                );
            }
        }
        reg
    }

    #[test]
    fn trainee_can_enroll_in_open_session() {
        let session = future_session(1);
        let result = can_enroll(&trainee("alice"), &session, &[], Timestamp::now());
        assert_eq!(result, Eligibility::Allowed);
    }

    #[test]
    fn non_trainee_roles_are_denied() {
        let session = future_session(10);
        for role in [Role::Trainer, Role::Coordinator, Role::Admin, Role::SuperAdmin] {
            let result = can_enroll(
                &user_with_role("bob", role),
                &session,
                &[],
                Timestamp::now(),
            );
            assert_eq!(
                result,
                Eligibility::Denied(DenialReason::WrongRole(role)),
                "role {:?} should be denied",
                role
            );
        }
    }

    #[test]
    fn archived_session_is_denied() {
        let mut session = future_session(10);
        session.archive().unwrap();

        let result = can_enroll(&trainee("alice"), &session, &[], Timestamp::now());
        assert_eq!(result, Eligibility::Denied(DenialReason::SessionArchived));
    }

    #[test]
    fn finished_session_is_denied_regardless_of_capacity() {
        let session = past_session(100);
        let result = can_enroll(&trainee("alice"), &session, &[], Timestamp::now());
        assert_eq!(result, Eligibility::Denied(DenialReason::SessionFinished));
    }

    #[test]
    fn pending_registration_blocks_reenrollment() {
        let session = future_session(10);
        let existing = vec![registration_for(&session, "alice", RegistrationStatus::Pending)];

        let result = can_enroll(&trainee("alice"), &session, &existing, Timestamp::now());
        assert_eq!(
            result,
            Eligibility::Denied(DenialReason::AlreadyRegistered(RegistrationStatus::Pending))
        );
    }

    #[test]
    fn confirmed_registration_blocks_reenrollment_with_current_status() {
        let session = future_session(10);
        let existing = vec![registration_for(
            &session,
            "alice",
            RegistrationStatus::Confirmed,
        )];

        let result = can_enroll(&trainee("alice"), &session, &existing, Timestamp::now());
        assert_eq!(
            result,
            Eligibility::Denied(DenialReason::AlreadyRegistered(
                RegistrationStatus::Confirmed
            ))
        );
    }

    #[test]
    fn cancelled_registration_allows_reenrollment() {
        let session = future_session(10);
        let existing = vec![registration_for(
            &session,
            "alice",
            RegistrationStatus::Cancelled,
        )];

        let result = can_enroll(&trainee("alice"), &session, &existing, Timestamp::now());
        assert_eq!(result, Eligibility::Allowed);
    }

    #[test]
    fn last_seat_race_second_trainee_sees_full() {
        let session = future_session(1);

        // First trainee sees an open seat.
        let first = can_enroll(&trainee("alice"), &session, &[], Timestamp::now());
        assert_eq!(first, Eligibility::Allowed);

        // After Alice's pending registration lands, Bob is out of luck.
        let existing = vec![registration_for(&session, "alice", RegistrationStatus::Pending)];
        let second = can_enroll(&trainee("bob"), &session, &existing, Timestamp::now());
        assert_eq!(second, Eligibility::Denied(DenialReason::SessionFull));
    }

    #[test]
    fn cancelled_registrations_do_not_occupy_seats() {
        let session = future_session(1);
        let existing = vec![registration_for(
            &session,
            "carol",
            RegistrationStatus::Cancelled,
        )];

        let result = can_enroll(&trainee("bob"), &session, &existing, Timestamp::now());
        assert_eq!(result, Eligibility::Allowed);
    }

    #[test]
    fn completed_registrations_do_not_occupy_seats() {
        let session = future_session(1);
        let existing = vec![registration_for(
            &session,
            "carol",
            RegistrationStatus::Completed,
        )];

        let result = can_enroll(&trainee("bob"), &session, &existing, Timestamp::now());
        assert_eq!(result, Eligibility::Allowed);
    }

    #[test]
    fn other_sessions_registrations_are_ignored() {
        let session = future_session(1);
        let other = future_session(1);
        let existing = vec![registration_for(&other, "alice", RegistrationStatus::Pending)];

        let result = can_enroll(&trainee("alice"), &session, &existing, Timestamp::now());
        assert_eq!(result, Eligibility::Allowed);
    }

    #[test]
    fn own_registration_reported_before_capacity() {
        // A full session where the trainee is one of the occupants reports
        // AlreadyRegistered, not SessionFull - the UI renders the current
        // status, not a generic error.
        let session = future_session(1);
        let existing = vec![registration_for(&session, "alice", RegistrationStatus::Pending)];

        let result = can_enroll(&trainee("alice"), &session, &existing, Timestamp::now());
        assert_eq!(
            result,
            Eligibility::Denied(DenialReason::AlreadyRegistered(RegistrationStatus::Pending))
        );
    }

    #[test]
    fn denial_reason_codes_are_stable() {
        assert_eq!(DenialReason::SessionFull.code(), "SESSION_FULL");
        assert_eq!(
            DenialReason::AlreadyRegistered(RegistrationStatus::Pending).code(),
            "ALREADY_REGISTERED"
        );
        assert_eq!(DenialReason::WrongRole(Role::Trainer).code(), "WRONG_ROLE");
    }

    #[test]
    fn denial_reason_messages_carry_specifics() {
        let msg = DenialReason::AlreadyRegistered(RegistrationStatus::Confirmed).user_message();
        assert!(msg.contains("confirmed"));

        let msg = DenialReason::WrongRole(Role::Coordinator).user_message();
        assert!(msg.contains("coordinator"));
    }
}
