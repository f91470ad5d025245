//! Enumerate every open slot of a business day.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::{BufferPolicy, BusinessHours};
use crate::conflict::check_conflict;
use crate::interval::add_minutes;
use crate::model::{CandidateRequest, ExistingBooking};

/// Grid spacing of candidate slot starts.
pub const SLOT_STEP_MINUTES: i64 = 30;

/// List every start time on `day` where a `slot_duration_minutes` slot fits
/// inside business hours and passes [`check_conflict`].
///
/// Candidates are taken every [`SLOT_STEP_MINUTES`] from opening time. A
/// candidate is kept only when `start + slot_duration <= closing time` and no
/// existing booking conflicts with it. The scan is exhaustive and the result
/// is chronological.
pub fn get_available_slots(
    day: NaiveDate,
    existing: &[ExistingBooking],
    slot_duration_minutes: i64,
    business_hours: &BusinessHours,
    buffer: &BufferPolicy,
) -> Vec<NaiveDateTime> {
    let day_end = business_hours.closes_at(day);

    std::iter::successors(Some(business_hours.opens_at(day)), |step| {
        Some(add_minutes(*step, SLOT_STEP_MINUTES))
    })
    .take_while(|step| *step < day_end)
    .filter(|step| add_minutes(*step, slot_duration_minutes) <= day_end)
    .filter(|step| {
        let candidate = CandidateRequest::new(*step, slot_duration_minutes);
        !check_conflict(&candidate, existing, buffer).has_conflict
    })
    .collect()
}
