//! Registration statistics and session bucketing.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::registration::{Registration, RegistrationStatus};
use crate::domain::session::TrainingSession;

/// Partition counts over a registration collection.
///
/// Every registration lands in exactly one bucket, so the three buckets
/// always sum to `total`: a completed registration stays in the confirmed
/// column (it held a confirmed seat), a failed one in the cancelled column
/// (the seat was freed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
}

/// Counts registrations by status.
pub fn registration_stats(registrations: &[Registration]) -> RegistrationStats {
    let mut stats = RegistrationStats {
        total: registrations.len(),
        ..RegistrationStats::default()
    };

    for registration in registrations {
        match registration.status() {
            RegistrationStatus::Pending => stats.pending += 1,
            RegistrationStatus::Confirmed | RegistrationStatus::Completed => {
                stats.confirmed += 1
            }
            RegistrationStatus::Cancelled | RegistrationStatus::Failed => stats.cancelled += 1,
        }
    }

    stats
}

/// Sessions split into current and past by calendar date.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionBuckets {
    /// Sessions on or after `today`.
    pub current: Vec<TrainingSession>,
    /// Sessions strictly before `today`.
    pub past: Vec<TrainingSession>,
}

/// Partitions sessions by `date >= today`.
///
/// Deliberately date-only: a session that started an hour ago still sits
/// in `current` for the rest of the day, even though the time-aware
/// enrollment gate already reports it finished. The two views answer
/// different questions and must not be unified.
pub fn session_buckets(sessions: &[TrainingSession], today: NaiveDate) -> SessionBuckets {
    let mut buckets = SessionBuckets::default();
    for session in sessions {
        if session.schedule().is_on_or_after(today) {
            buckets.current.push(session.clone());
        } else {
            buckets.past.push(session.clone());
        }
    }
    buckets
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
