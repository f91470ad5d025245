//! Walk forward from a preferred start time to the next available ones.
//!
//! The scan only moves forward and jumps straight past whichever booking
//! blocked the probe, so it finishes in roughly `count + conflicts` steps
//! instead of scanning the whole day. A fixed attempt ceiling bounds it on
//! densely packed schedules.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::config::BufferPolicy;
use crate::conflict::{check_conflict, check_overlap};
use crate::interval::add_minutes;
use crate::model::{CandidateRequest, ConflictResult, ExistingBooking};

/// Hard ceiling on probes per call. Not configurable.
pub const MAX_SUGGESTION_ATTEMPTS: usize = 20;

/// Spacing between consecutive suggestions, and the fallback advance when a
/// conflicting booking cannot be located.
pub const SUGGESTION_STEP_MINUTES: i64 = 30;

/// Propose up to `count` start times after `preferred` that pass
/// [`check_conflict`].
///
/// The first probe is `preferred + duration + buffer`. On a clear probe the
/// time is recorded and the probe moves on by [`SUGGESTION_STEP_MINUTES`]. On a
/// conflict the probe jumps to the conflicting booking's end plus the buffer.
///
/// Returns the suggestions in chronological order. When the ceiling is hit
/// first, whatever was found is returned, possibly nothing.
pub fn suggest_alternatives(
    preferred: NaiveDateTime,
    duration_minutes: i64,
    existing: &[ExistingBooking],
    count: usize,
    buffer: &BufferPolicy,
) -> Vec<NaiveDateTime> {
    scan_forward(
        preferred,
        duration_minutes,
        existing,
        count,
        buffer,
        check_conflict,
    )
}

/// Like [`suggest_alternatives`], but every suggestion passes
/// [`check_overlap`] instead.
///
/// Jumping to the blocking booking's end plus the buffer puts the probe's
/// buffered window right after that booking, so the same walk applies.
pub fn suggest_overlap_free(
    preferred: NaiveDateTime,
    duration_minutes: i64,
    existing: &[ExistingBooking],
    count: usize,
    buffer: &BufferPolicy,
) -> Vec<NaiveDateTime> {
    scan_forward(
        preferred,
        duration_minutes,
        existing,
        count,
        buffer,
        check_overlap,
    )
}

fn scan_forward(
    preferred: NaiveDateTime,
    duration_minutes: i64,
    existing: &[ExistingBooking],
    count: usize,
    buffer: &BufferPolicy,
    check: fn(&CandidateRequest, &[ExistingBooking], &BufferPolicy) -> ConflictResult,
) -> Vec<NaiveDateTime> {
    let mut suggestions = Vec::with_capacity(count.min(MAX_SUGGESTION_ATTEMPTS));
    let mut probe = add_minutes(
        preferred,
        duration_minutes.saturating_add(buffer.buffer_minutes),
    );

    for _ in 0..MAX_SUGGESTION_ATTEMPTS {
        if suggestions.len() >= count {
            break;
        }

        let candidate = CandidateRequest::new(probe, duration_minutes);
        let result = check(&candidate, existing, buffer);

        if !result.has_conflict {
            suggestions.push(probe);
            probe = add_minutes(probe, SUGGESTION_STEP_MINUTES);
            continue;
        }

        let blocker = result
            .conflicting_booking_id
            .as_deref()
            .and_then(|id| existing.iter().find(|b| b.id == id));

        probe = match blocker {
            Some(booking) => add_minutes(booking.end_time(), buffer.buffer_minutes),
            None => {
                warn!(
                    probe = %probe,
                    booking_id = ?result.conflicting_booking_id,
                    "conflicting booking missing from input, advancing by fixed step"
                );
                add_minutes(probe, SUGGESTION_STEP_MINUTES)
            }
        };
    }

    if suggestions.len() < count {
        debug!(
            preferred = %preferred,
            found = suggestions.len(),
            wanted = count,
            "suggestion search stopped at attempt ceiling"
        );
    }

    suggestions.sort_unstable();
    suggestions
}
