//! Business-hours predicate.

use chrono::NaiveDateTime;

use crate::config::BusinessHours;

/// True iff `start_hour <= hour(t) < end_hour`.
///
/// Only the hour is considered, so 19:59 is inside 9-20 and 20:00 is not.
pub fn is_within_business_hours(t: NaiveDateTime, hours: &BusinessHours) -> bool {
    hours.contains(t)
}
