//! Registration status state machine.
//!
//! Defines all possible registration states and valid transitions
//! along the enrollment lifecycle.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a trainee's registration for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Awaiting a coordinator decision. Counts toward capacity.
    Pending,

    /// Approved by the coordinator. Counts toward capacity.
    Confirmed,

    /// Rejected, withdrawn, or revoked. Frees the seat; re-enrollment allowed.
    Cancelled,

    /// Session ended while the registration was confirmed.
    Completed,

    /// Enrollment processing failed. Terminal.
    Failed,
}

impl RegistrationStatus {
    /// All statuses, for exhaustive iteration in tests and statistics.
    pub const ALL: [RegistrationStatus; 5] = [
        RegistrationStatus::Pending,
        RegistrationStatus::Confirmed,
        RegistrationStatus::Cancelled,
        RegistrationStatus::Completed,
        RegistrationStatus::Failed,
    ];

    /// Returns true if this registration occupies a seat.
    ///
    /// Capacity is bounded over pending + confirmed registrations only.
    pub fn counts_toward_capacity(&self) -> bool {
        matches!(
            self,
            RegistrationStatus::Pending | RegistrationStatus::Confirmed
        )
    }

    /// Returns true if an existing registration in this status blocks the
    /// trainee from enrolling again.
    ///
    /// A cancelled registration does not block re-enrollment; a failed one
    /// does not either.
    pub fn blocks_reenrollment(&self) -> bool {
        matches!(
            self,
            RegistrationStatus::Pending
                | RegistrationStatus::Confirmed
                | RegistrationStatus::Completed
        )
    }
}

impl StateMachine for RegistrationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RegistrationStatus::*;
        matches!(
            (self, target),
            // From PENDING: coordinator decision or trainee withdrawal
            (Pending, Confirmed)
                | (Pending, Cancelled)
            // From CONFIRMED: session ends, or coordinator revokes
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RegistrationStatus::*;
        match self {
            Pending => vec![Confirmed, Cancelled],
            Confirmed => vec![Completed, Cancelled],
            Cancelled => vec![],
            Completed => vec![],
            Failed => vec![],
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Confirmed => "confirmed",
            RegistrationStatus::Cancelled => "cancelled",
            RegistrationStatus::Completed => "completed",
            RegistrationStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unit Tests - State Transitions

    #[test]
    fn pending_can_transition_to_confirmed() {
        let status = RegistrationStatus::Pending;
        assert!(status.can_transition_to(&RegistrationStatus::Confirmed));

        let result = status.transition_to(RegistrationStatus::Confirmed);
        assert_eq!(result, Ok(RegistrationStatus::Confirmed));
    }

    #[test]
    fn pending_can_transition_to_cancelled() {
        let status = RegistrationStatus::Pending;
        assert!(status.can_transition_to(&RegistrationStatus::Cancelled));
    }

    #[test]
    fn pending_cannot_transition_to_completed() {
        let status = RegistrationStatus::Pending;
        assert!(!status.can_transition_to(&RegistrationStatus::Completed));

        let result = status.transition_to(RegistrationStatus::Completed);
        assert!(result.is_err());
    }

    #[test]
    fn confirmed_can_transition_to_completed() {
        let status = RegistrationStatus::Confirmed;
        assert!(status.can_transition_to(&RegistrationStatus::Completed));
    }

    #[test]
    fn confirmed_can_transition_to_cancelled() {
        let status = RegistrationStatus::Confirmed;
        assert!(status.can_transition_to(&RegistrationStatus::Cancelled));
    }

    #[test]
    fn confirmed_cannot_return_to_pending() {
        let status = RegistrationStatus::Confirmed;
        assert!(!status.can_transition_to(&RegistrationStatus::Pending));
    }

    #[test]
    fn cancelled_is_terminal() {
        assert!(RegistrationStatus::Cancelled.is_terminal());
    }

    #[test]
    fn completed_is_terminal() {
        assert!(RegistrationStatus::Completed.is_terminal());
    }

    #[test]
    fn failed_is_terminal() {
        assert!(RegistrationStatus::Failed.is_terminal());
    }

    #[test]
    fn cancelled_cannot_be_confirmed() {
        let status = RegistrationStatus::Cancelled;
        assert!(!status.can_transition_to(&RegistrationStatus::Confirmed));
    }

    #[test]
    fn valid_transitions_are_consistent_with_can_transition_to() {
        for status in RegistrationStatus::ALL {
            for valid_target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&valid_target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    valid_target
                );
            }
        }
    }

    #[test]
    fn no_status_transitions_to_itself() {
        for status in RegistrationStatus::ALL {
            assert!(
                !status.can_transition_to(&status),
                "{:?} should not transition to itself; idempotence is handled \
                 at the aggregate level",
                status
            );
        }
    }

    // Unit Tests - Capacity and re-enrollment

    #[test]
    fn pending_and_confirmed_count_toward_capacity() {
        assert!(RegistrationStatus::Pending.counts_toward_capacity());
        assert!(RegistrationStatus::Confirmed.counts_toward_capacity());
    }

    #[test]
    fn cancelled_completed_failed_free_the_seat() {
        assert!(!RegistrationStatus::Cancelled.counts_toward_capacity());
        assert!(!RegistrationStatus::Completed.counts_toward_capacity());
        assert!(!RegistrationStatus::Failed.counts_toward_capacity());
    }

    #[test]
    fn pending_confirmed_completed_block_reenrollment() {
        assert!(RegistrationStatus::Pending.blocks_reenrollment());
        assert!(RegistrationStatus::Confirmed.blocks_reenrollment());
        assert!(RegistrationStatus::Completed.blocks_reenrollment());
    }

    #[test]
    fn cancelled_and_failed_allow_reenrollment() {
        assert!(!RegistrationStatus::Cancelled.blocks_reenrollment());
        assert!(!RegistrationStatus::Failed.blocks_reenrollment());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&RegistrationStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&RegistrationStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let status: RegistrationStatus = serde_json::from_str("\"confirmed\"").unwrap();
        assert_eq!(status, RegistrationStatus::Confirmed);
    }
}
