//! Session schedule value object.
//!
//! All "is this session over" decisions go through this one type. Two
//! distinct questions are answered, and they are intentionally different:
//!
//! - `is_finished(now)` - **time-aware**: the session has started
//!   (`date + start_time <= now`). Gates enrollment.
//! - `is_on_or_after(today)` - **date-only**: the session day has not passed.
//!   Partitions dashboard buckets. A session earlier today is "current" here
//!   while already `is_finished`.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// Date plus start/end time window of a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSchedule {
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl SessionSchedule {
    /// Creates a schedule, validating that the window is non-empty.
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, ValidationError> {
        if end_time <= start_time {
            return Err(ValidationError::invalid_format(
                "end_time",
                "End time must be after start time",
            ));
        }
        Ok(Self {
            date,
            start_time,
            end_time,
        })
    }

    /// Returns the session date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the start time of day.
    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// Returns the end time of day.
    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// The instant the session starts (UTC).
    pub fn starts_at(&self) -> Timestamp {
        Timestamp::from_datetime(Utc.from_utc_datetime(&self.date.and_time(self.start_time)))
    }

    /// The instant the session ends (UTC).
    pub fn ends_at(&self) -> Timestamp {
        Timestamp::from_datetime(Utc.from_utc_datetime(&self.date.and_time(self.end_time)))
    }

    /// Time-aware check: has the session already started?
    ///
    /// A finished session no longer accepts enrollment.
    pub fn is_finished(&self, now: Timestamp) -> bool {
        !now.is_before(&self.starts_at())
    }

    /// Time-aware check: has the session's end time passed?
    ///
    /// Confirmed registrations of an ended session are swept to completed.
    pub fn has_ended(&self, now: Timestamp) -> bool {
        !now.is_before(&self.ends_at())
    }

    /// Date-only check used by dashboard bucketing: `date >= today`.
    pub fn is_on_or_after(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}
