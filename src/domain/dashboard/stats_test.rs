use super::*;
use crate::domain::foundation::{RegistrationId, SessionId, Timestamp, UserId};
use crate::domain::session::SessionSchedule;
use proptest::prelude::*;

fn registration_in(status: RegistrationStatus) -> Registration {
    let now = Timestamp::now();
    Registration::reconstitute(
        RegistrationId::new(),
        UserId::new("trainee-1").unwrap(),
        SessionId::new(),
        status,
        now,
        now,
    )
}

fn session_on(date: &str) -> TrainingSession {
    TrainingSession::new(
        SessionId::new(),
        UserId::new("coordinator-1").unwrap(),
        "Rust Fundamentals".to_string(),
        SessionSchedule::new(
            date.parse().unwrap(),
            "10:00:00".parse().unwrap(),
            "12:00:00".parse().unwrap(),
        )
        .unwrap(),
        "Room 2B".to_string(),
        10,
    )
    .unwrap()
}

// ────────────────────────────────────────────────────────────────────────
// registration_stats
// ────────────────────────────────────────────────────────────────────────

#[test]
fn stats_of_empty_collection_are_zero() {
    let stats = registration_stats(&[]);
    assert_eq!(stats, RegistrationStats::default());
}

#[test]
fn stats_partition_by_status() {
    let registrations = vec![
        registration_in(RegistrationStatus::Pending),
        registration_in(RegistrationStatus::Pending),
        registration_in(RegistrationStatus::Confirmed),
        registration_in(RegistrationStatus::Cancelled),
    ];

    let stats = registration_stats(&registrations);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.confirmed, 1);
    assert_eq!(stats.cancelled, 1);
}

#[test]
fn completed_counts_in_the_confirmed_column() {
    let stats = registration_stats(&[registration_in(RegistrationStatus::Completed)]);
    assert_eq!(stats.confirmed, 1);
    assert_eq!(stats.total, 1);
}

#[test]
fn failed_counts_in_the_cancelled_column() {
    let stats = registration_stats(&[registration_in(RegistrationStatus::Failed)]);
    assert_eq!(stats.cancelled, 1);
    assert_eq!(stats.total, 1);
}

#[test]
fn stats_are_order_independent() {
    let mut registrations = vec![
        registration_in(RegistrationStatus::Pending),
        registration_in(RegistrationStatus::Confirmed),
        registration_in(RegistrationStatus::Cancelled),
    ];

    let forward = registration_stats(&registrations);
    registrations.reverse();
    let backward = registration_stats(&registrations);

    assert_eq!(forward, backward);
}

proptest! {
    /// The three buckets partition the collection: they always sum to
    /// the total, whatever mix of statuses comes in.
    #[test]
    fn partitions_sum_to_total(
        statuses in prop::collection::vec(
            prop_oneof![
                Just(RegistrationStatus::Pending),
                Just(RegistrationStatus::Confirmed),
                Just(RegistrationStatus::Cancelled),
                Just(RegistrationStatus::Completed),
                Just(RegistrationStatus::Failed),
            ],
            0..32,
        )
    ) {
        let registrations: Vec<Registration> =
            statuses.iter().copied().map(registration_in).collect();

        let stats = registration_stats(&registrations);
        prop_assert_eq!(stats.total, registrations.len());
        prop_assert_eq!(
            stats.pending + stats.confirmed + stats.cancelled,
            stats.total
        );
    }
}

// ────────────────────────────────────────────────────────────────────────
// session_buckets
// ────────────────────────────────────────────────────────────────────────

#[test]
fn buckets_split_on_today() {
    let sessions = vec![
        session_on("2024-06-01"),
        session_on("2024-06-15"),
        session_on("2024-07-01"),
    ];
    let today = "2024-06-15".parse().unwrap();

    let buckets = session_buckets(&sessions, today);
    assert_eq!(buckets.past.len(), 1);
    assert_eq!(buckets.current.len(), 2);
}

#[test]
fn session_today_is_current() {
    let sessions = vec![session_on("2024-06-15")];
    let today = "2024-06-15".parse().unwrap();

    let buckets = session_buckets(&sessions, today);
    assert_eq!(buckets.current.len(), 1);
    assert!(buckets.past.is_empty());
}

#[test]
fn buckets_of_empty_collection_are_empty() {
    let buckets = session_buckets(&[], "2024-06-15".parse().unwrap());
    assert!(buckets.current.is_empty());
    assert!(buckets.past.is_empty());
}

#[test]
fn buckets_preserve_every_session() {
    let sessions = vec![
        session_on("2024-01-01"),
        session_on("2024-06-15"),
        session_on("2024-12-31"),
    ];
    let buckets = session_buckets(&sessions, "2024-06-15".parse().unwrap());
    assert_eq!(buckets.current.len() + buckets.past.len(), sessions.len());
}
