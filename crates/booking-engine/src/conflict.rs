//! Classify a candidate start time against existing bookings.
//!
//! The primary check compares start times only: a candidate conflicts with a
//! booking when their starts are closer than the buffer. This is an
//! approximation that holds while bookings share similar bounded durations; it
//! does not look at whether the candidate lands inside an occupied interval.
//! [`check_overlap`] is the separate interval-based check for callers that
//! want it.
//!
//! Both checks stop at the first booking that triggers, in the order the
//! caller supplied. The result names that booking, not the closest or most
//! severe one.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::BufferPolicy;
use crate::interval::{add_minutes, intervals_overlap, minutes_between, sub_minutes};
use crate::model::{CandidateRequest, ConflictResult, ConflictType, ExistingBooking};

/// Check a candidate against existing bookings using start-to-start distance.
///
/// For each booking not excluded by `candidate.exclude_booking_id`, the
/// absolute distance between the two start times is compared to the buffer:
///
/// - distance `0` → [`ConflictType::DoubleBooking`]
/// - `0 < distance < buffer` → [`ConflictType::BufferViolation`]
/// - otherwise no conflict from that booking
///
/// Returns on the first triggering booking. `suggested_times` is always empty.
pub fn check_conflict(
    candidate: &CandidateRequest,
    existing: &[ExistingBooking],
    buffer: &BufferPolicy,
) -> ConflictResult {
    for booking in existing {
        if candidate.excludes(booking) {
            continue;
        }

        let diff = minutes_between(candidate.start_time, booking.start_time);
        if diff >= buffer.buffer_minutes {
            continue;
        }

        let result = if diff == 0 {
            ConflictResult::conflict(
                ConflictType::DoubleBooking,
                booking,
                format!(
                    "Double booking: another booking already starts at {}",
                    format_time(booking.start_time)
                ),
            )
        } else {
            ConflictResult::conflict(
                ConflictType::BufferViolation,
                booking,
                format!(
                    "Bookings must start at least {} minutes apart; the booking at {} is only {} minutes away",
                    buffer.buffer_minutes,
                    format_time(booking.start_time),
                    diff
                ),
            )
        };

        debug!(
            candidate = %candidate.start_time,
            booking_id = %booking.id,
            distance_minutes = diff,
            kind = ?result.conflict_type,
            "conflict detected"
        );
        return result;
    }

    ConflictResult::clear()
}

/// Check a candidate's buffered interval against occupied intervals.
///
/// The candidate occupies `[start - buffer, start + duration + buffer)`; each
/// non-excluded booking occupies `[start, start + duration)`. The first
/// booking whose interval intersects the candidate's yields
/// [`ConflictType::Overlap`].
pub fn check_overlap(
    candidate: &CandidateRequest,
    existing: &[ExistingBooking],
    buffer: &BufferPolicy,
) -> ConflictResult {
    let window_start = sub_minutes(candidate.start_time, buffer.buffer_minutes);
    let window_end = add_minutes(
        candidate.start_time,
        candidate.duration_minutes.saturating_add(buffer.buffer_minutes),
    );

    let hit = existing
        .iter()
        .filter(|booking| !candidate.excludes(booking))
        .find(|booking| {
            intervals_overlap(
                window_start,
                window_end,
                booking.start_time,
                booking.end_time(),
            )
        });

    match hit {
        Some(booking) => {
            debug!(
                candidate = %candidate.start_time,
                booking_id = %booking.id,
                "overlap detected"
            );
            ConflictResult::conflict(
                ConflictType::Overlap,
                booking,
                format!(
                    "Requested time including its {}-minute buffer overlaps the booking from {} to {}",
                    buffer.buffer_minutes,
                    format_time(booking.start_time),
                    format_time(booking.end_time())
                ),
            )
        }
        None => ConflictResult::clear(),
    }
}

fn format_time(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%d %H:%M").to_string()
}
