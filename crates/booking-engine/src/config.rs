//! Buffer policy, business hours and engine defaults.
//!
//! Defaults live in these values rather than in globals so that every call
//! receives its configuration explicitly and concurrent handlers can each hold
//! their own copy.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::interval::add_minutes;

pub const DEFAULT_BUFFER_MINUTES: i64 = 45;
pub const DEFAULT_SLOT_DURATION_MINUTES: i64 = 120;
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;
pub const DEFAULT_OPENING_HOUR: u32 = 9;
pub const DEFAULT_CLOSING_HOUR: u32 = 20;

/// Upper bound for durations and buffers accepted from outside input: one
/// leap year. Keeps timestamp arithmetic far from chrono's limits.
pub const MAX_MINUTES: i64 = 366 * 24 * 60;

/// Check that a duration or buffer lies in `0..=MAX_MINUTES`.
///
/// Engine functions do not call this; adapters and config loading do, before
/// user-supplied minutes reach timestamp arithmetic.
///
/// # Errors
/// Returns `EngineError::MinutesOutOfRange` naming `name`.
pub fn minutes_in_range(name: &'static str, value: i64) -> Result<i64> {
    if (0..=MAX_MINUTES).contains(&value) {
        Ok(value)
    } else {
        Err(EngineError::MinutesOutOfRange {
            name,
            value,
            max: MAX_MINUTES,
        })
    }
}

/// Minimum separation, in minutes, between the start times of two bookings.
///
/// A buffer of 0 only rejects exact start-time collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferPolicy {
    pub buffer_minutes: i64,
}

impl BufferPolicy {
    pub const fn new(buffer_minutes: i64) -> Self {
        Self { buffer_minutes }
    }
}

impl Default for BufferPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_MINUTES)
    }
}

/// The venue's open window for a day, `[start_hour:00, end_hour:00)`.
///
/// A window with `start_hour >= end_hour` is empty: nothing is inside it and a
/// day under it has no slots, which is how a closed day is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBusinessHours")]
pub struct BusinessHours {
    start_hour: u32,
    end_hour: u32,
}

#[derive(Deserialize)]
struct RawBusinessHours {
    #[serde(default = "default_opening_hour")]
    start_hour: u32,
    #[serde(default = "default_closing_hour")]
    end_hour: u32,
}

fn default_opening_hour() -> u32 {
    DEFAULT_OPENING_HOUR
}

fn default_closing_hour() -> u32 {
    DEFAULT_CLOSING_HOUR
}

impl TryFrom<RawBusinessHours> for BusinessHours {
    type Error = EngineError;

    fn try_from(raw: RawBusinessHours) -> Result<Self> {
        Self::new(raw.start_hour, raw.end_hour)
    }
}

impl BusinessHours {
    /// Build business hours from two hours of the day.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidBusinessHours` if either hour is above 23.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        if start_hour > 23 || end_hour > 23 {
            return Err(EngineError::InvalidBusinessHours {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Opening instant on `day`.
    pub fn opens_at(&self, day: NaiveDate) -> NaiveDateTime {
        at_hour(day, self.start_hour)
    }

    /// Closing instant on `day`.
    pub fn closes_at(&self, day: NaiveDate) -> NaiveDateTime {
        at_hour(day, self.end_hour)
    }

    /// Whether the open window is empty.
    pub fn is_closed(&self) -> bool {
        self.start_hour >= self.end_hour
    }

    /// Whether the hour of `t` lies in `[start_hour, end_hour)`.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        let hour = t.hour();
        self.start_hour <= hour && hour < self.end_hour
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_OPENING_HOUR,
            end_hour: DEFAULT_CLOSING_HOUR,
        }
    }
}

fn at_hour(day: NaiveDate, hour: u32) -> NaiveDateTime {
    add_minutes(day.and_time(NaiveTime::MIN), i64::from(hour) * 60)
}

/// Every tunable of the engine, with the venue defaults.
///
/// Loadable from TOML:
///
/// ```toml
/// buffer_minutes = 30
/// slot_duration_minutes = 90
/// suggestion_count = 5
///
/// [business_hours]
/// start_hour = 8
/// end_hour = 22
/// ```
///
/// Missing keys keep their defaults. The suggestion attempt ceiling is fixed
/// (see [`crate::suggest::MAX_SUGGESTION_ATTEMPTS`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub buffer_minutes: i64,
    pub slot_duration_minutes: i64,
    pub suggestion_count: usize,
    pub business_hours: BusinessHours,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            buffer_minutes: DEFAULT_BUFFER_MINUTES,
            slot_duration_minutes: DEFAULT_SLOT_DURATION_MINUTES,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
            business_hours: BusinessHours::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML configuration document.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` on malformed TOML, unknown keys or
    /// invalid business hours, and `EngineError::MinutesOutOfRange` when the
    /// buffer or slot duration is negative or too large.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validated()
    }

    /// Parse a JSON configuration document.
    ///
    /// # Errors
    /// Same as [`EngineConfig::from_toml_str`] for JSON input.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validated()
    }

    /// Check the minute-valued fields against [`MAX_MINUTES`].
    ///
    /// # Errors
    /// Returns `EngineError::MinutesOutOfRange` for the first offending field.
    pub fn validated(self) -> Result<Self> {
        minutes_in_range("buffer", self.buffer_minutes)?;
        minutes_in_range("slot duration", self.slot_duration_minutes)?;
        Ok(self)
    }

    pub fn buffer(&self) -> BufferPolicy {
        BufferPolicy::new(self.buffer_minutes)
    }
}
