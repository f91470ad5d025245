//! Timestamp parsing for the CLI and WASM adapters.
//!
//! Engine timestamps are venue-local wall-clock values. RFC 3339 input is
//! accepted for convenience; its offset is dropped and the local reading kept.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::error::{EngineError, Result};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Years accepted from outside input, so that adding a bounded duration can
/// never leave chrono's representable range.
const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parse a local timestamp.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS[.fff]]`, the same with a space instead of
/// `T`, and RFC 3339 with an offset.
///
/// # Errors
/// Returns `EngineError::InvalidTimestamp` if no format matches or the year is
/// outside 1-9999.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    let parsed = match NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        Some(dt) => dt,
        None => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.naive_local())
            .map_err(|e| EngineError::InvalidTimestamp(format!("'{}': {}", s, e)))?,
    };
    check_year(s, parsed.year())?;
    Ok(parsed)
}

/// Parse a calendar day in `YYYY-MM-DD` form.
///
/// # Errors
/// Returns `EngineError::InvalidTimestamp` on any other shape.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    let parsed = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| EngineError::InvalidTimestamp(format!("'{}': {}", s, e)))?;
    check_year(s, parsed.year())?;
    Ok(parsed)
}

fn check_year(s: &str, year: i32) -> Result<()> {
    if YEARS.contains(&year) {
        Ok(())
    } else {
        Err(EngineError::InvalidTimestamp(format!(
            "'{}': year must be between 1 and 9999",
            s
        )))
    }
}
