//! Minute arithmetic and half-open interval overlap.

use chrono::{NaiveDateTime, TimeDelta};

/// Shift `t` forward by `minutes` (negative values shift backward).
///
/// Results beyond chrono's range saturate at `NaiveDateTime::MAX`/`MIN`.
pub fn add_minutes(t: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    TimeDelta::try_minutes(minutes)
        .and_then(|delta| t.checked_add_signed(delta))
        .unwrap_or(if minutes < 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
}

/// Shift `t` backward by `minutes` (negative values shift forward).
pub fn sub_minutes(t: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    add_minutes(t, minutes.saturating_neg())
}

/// Whether the half-open intervals `[start1, end1)` and `[start2, end2)` share
/// any instant.
///
/// The three clauses are kept as-is: the first catches interval 1 starting
/// inside interval 2, the second catches it ending inside, the third catches
/// interval 1 fully containing interval 2.
#[allow(clippy::nonminimal_bool)]
pub fn intervals_overlap(
    start1: NaiveDateTime,
    end1: NaiveDateTime,
    start2: NaiveDateTime,
    end2: NaiveDateTime,
) -> bool {
    (start1 >= start2 && start1 < end2)
        || (end1 > start2 && end1 <= end2)
        || (start1 <= start2 && end1 >= end2)
}

/// Absolute distance between two instants in whole minutes.
pub(crate) fn minutes_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (a - b).num_minutes().abs()
}
