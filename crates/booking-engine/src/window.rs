//! A booking's footprint including its buffer.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::BufferPolicy;
use crate::interval::{add_minutes, sub_minutes};

/// A booking's occupied interval and the buffered window around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    pub booking_start: NaiveDateTime,
    pub booking_end: NaiveDateTime,
    /// `booking_start - buffer`
    pub window_start: NaiveDateTime,
    /// `booking_end + buffer`
    pub window_end: NaiveDateTime,
    /// `duration + 2 * buffer`, in minutes.
    pub total_duration: i64,
}

/// Compute the buffered window of a booking. Pure arithmetic, no conflict checks.
pub fn get_booking_window(
    start_time: NaiveDateTime,
    duration_minutes: i64,
    buffer: &BufferPolicy,
) -> BookingWindow {
    let booking_end = add_minutes(start_time, duration_minutes);
    BookingWindow {
        booking_start: start_time,
        booking_end,
        window_start: sub_minutes(start_time, buffer.buffer_minutes),
        window_end: add_minutes(booking_end, buffer.buffer_minutes),
        total_duration: duration_minutes
            .saturating_add(buffer.buffer_minutes.saturating_mul(2)),
    }
}
