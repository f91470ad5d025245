//! Bookings, candidate requests and conflict results.
//!
//! All of these are transient values built per request. Timestamps are
//! venue-local wall-clock times, so they carry no time zone.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::interval::add_minutes;

/// Duration assumed for stored bookings that carry no explicit length.
pub const DEFAULT_BOOKING_DURATION_MINUTES: i64 = 120;

/// A confirmed booking supplied by the persistence layer.
///
/// The caller decides which statuses count as active (pending, approved,
/// completed and so on); the engine trusts the list it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingBooking {
    /// Opaque identifier, unique per booking.
    pub id: String,
    pub start_time: NaiveDateTime,
    /// Length of the booking. `None` means the record had no explicit
    /// duration and [`DEFAULT_BOOKING_DURATION_MINUTES`] applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
}

impl ExistingBooking {
    pub fn new(id: impl Into<String>, start_time: NaiveDateTime, duration_minutes: i64) -> Self {
        Self {
            id: id.into(),
            start_time,
            duration_minutes: Some(duration_minutes),
        }
    }

    /// Effective duration, falling back to the default for records without one.
    pub fn duration(&self) -> i64 {
        self.duration_minutes
            .unwrap_or(DEFAULT_BOOKING_DURATION_MINUTES)
    }

    /// Exclusive end of the occupied interval `[start_time, end_time)`.
    pub fn end_time(&self) -> NaiveDateTime {
        add_minutes(self.start_time, self.duration())
    }
}

/// A start time the caller wants to book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRequest {
    pub start_time: NaiveDateTime,
    pub duration_minutes: i64,
    /// Set when re-checking an update, so the edited booking is not compared
    /// against itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_booking_id: Option<String>,
}

impl CandidateRequest {
    pub fn new(start_time: NaiveDateTime, duration_minutes: i64) -> Self {
        Self {
            start_time,
            duration_minutes,
            exclude_booking_id: None,
        }
    }

    /// Mark this request as an update of the booking with the given id.
    pub fn excluding(mut self, booking_id: impl Into<String>) -> Self {
        self.exclude_booking_id = Some(booking_id.into());
        self
    }

    pub(crate) fn excludes(&self, booking: &ExistingBooking) -> bool {
        self.exclude_booking_id.as_deref() == Some(booking.id.as_str())
    }
}

/// How a candidate collides with an existing booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// The candidate starts at exactly the same instant.
    DoubleBooking,
    /// The candidate starts closer than the buffer allows, but not at the same instant.
    BufferViolation,
    /// The candidate's buffered interval intersects an occupied interval.
    /// Only produced by [`crate::conflict::check_overlap`].
    Overlap,
}

/// Outcome of a conflict check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConflictResult {
    pub has_conflict: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_type: Option<ConflictType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicting_booking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Alternative start times. Only filled by the suggestion workflow.
    #[serde(default)]
    pub suggested_times: Vec<NaiveDateTime>,
}

impl ConflictResult {
    /// A result reporting no conflict.
    pub fn clear() -> Self {
        Self::default()
    }

    pub(crate) fn conflict(
        conflict_type: ConflictType,
        booking: &ExistingBooking,
        message: String,
    ) -> Self {
        Self {
            has_conflict: true,
            conflict_type: Some(conflict_type),
            conflicting_booking_id: Some(booking.id.clone()),
            message: Some(message),
            suggested_times: Vec::new(),
        }
    }
}
