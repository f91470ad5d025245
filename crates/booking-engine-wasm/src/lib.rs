//! WASM bindings for booking-engine.
//!
//! Exposes conflict checks, alternative suggestions, open-slot enumeration,
//! booking windows and the business-hours predicate to JavaScript via
//! `wasm-bindgen`. Complex values cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p booking-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/booking-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/booking_engine_wasm.wasm
//! ```

use booking_engine::{
    minutes_in_range, parse_date, parse_timestamp, BufferPolicy, BusinessHours, CandidateRequest,
    EngineConfig, ExistingBooking, Scheduler,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Input formats passed from JavaScript
// ---------------------------------------------------------------------------

/// Booking as sent by JavaScript. Times are strings so that both local
/// (`2026-03-16T09:00`) and RFC 3339 forms are accepted.
#[derive(Deserialize)]
struct BookingInput {
    id: String,
    start_time: String,
    #[serde(default)]
    duration_minutes: Option<i64>,
}

#[derive(Serialize)]
struct WindowDto {
    booking_start: String,
    booking_end: String,
    window_start: String,
    window_end: String,
    total_duration: i64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_time(s: &str) -> Result<NaiveDateTime, JsValue> {
    parse_timestamp(s).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn check_minutes(name: &'static str, value: i64) -> Result<i64, JsValue> {
    minutes_in_range(name, value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build a candidate from JS arguments, bounding the duration first.
fn parse_candidate(
    start_time: &str,
    duration_minutes: i64,
    exclude_booking_id: Option<String>,
) -> Result<CandidateRequest, JsValue> {
    let candidate = CandidateRequest::new(
        parse_time(start_time)?,
        check_minutes("duration", duration_minutes)?,
    );
    Ok(match exclude_booking_id {
        Some(id) => candidate.excluding(id),
        None => candidate,
    })
}

fn parse_bookings_json(json: &str) -> Result<Vec<ExistingBooking>, JsValue> {
    let inputs: Vec<BookingInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            Ok(ExistingBooking {
                id: input.id,
                start_time: parse_time(&input.start_time)?,
                duration_minutes: input.duration_minutes,
            })
        })
        .collect()
}

/// Parse an optional JSON `EngineConfig`; missing or empty means defaults.
fn parse_config(config_json: Option<String>) -> Result<EngineConfig, JsValue> {
    match config_json.as_deref().map(str::trim) {
        None | Some("") => Ok(EngineConfig::default()),
        Some(json) => {
            EngineConfig::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn format_times(times: &[NaiveDateTime]) -> Vec<String> {
    times.iter().map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string()).collect()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Check a requested start time against existing bookings.
///
/// `bookings_json` is a JSON array of `{id, start_time, duration_minutes?}`.
/// `config_json` is an optional `EngineConfig` JSON object. When the request
/// conflicts, `suggested_times` carries alternatives.
#[wasm_bindgen(js_name = "checkConflict")]
pub fn check_conflict(
    start_time: &str,
    duration_minutes: i64,
    bookings_json: &str,
    exclude_booking_id: Option<String>,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let scheduler = Scheduler::new(parse_config(config_json)?);
    let existing = parse_bookings_json(bookings_json)?;
    let candidate = parse_candidate(start_time, duration_minutes, exclude_booking_id)?;

    to_json(&scheduler.evaluate(&candidate, &existing))
}

/// Strict variant of `checkConflict`: the request's buffered interval must not
/// overlap any occupied interval, and suggested times satisfy the same rule.
#[wasm_bindgen(js_name = "checkOverlap")]
pub fn check_overlap(
    start_time: &str,
    duration_minutes: i64,
    bookings_json: &str,
    exclude_booking_id: Option<String>,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let scheduler = Scheduler::new(parse_config(config_json)?);
    let existing = parse_bookings_json(bookings_json)?;
    let candidate = parse_candidate(start_time, duration_minutes, exclude_booking_id)?;

    to_json(&scheduler.evaluate_strict(&candidate, &existing))
}

/// Propose up to `count` start times after `preferred`.
///
/// Returns a JSON array of local datetime strings.
#[wasm_bindgen(js_name = "suggestAlternatives")]
pub fn suggest_alternatives(
    preferred: &str,
    duration_minutes: i64,
    bookings_json: &str,
    count: Option<u32>,
    buffer_minutes: Option<i64>,
) -> Result<String, JsValue> {
    let existing = parse_bookings_json(bookings_json)?;
    let defaults = EngineConfig::default();

    let buffer = check_minutes("buffer", buffer_minutes.unwrap_or(defaults.buffer_minutes))?;

    let suggestions = booking_engine::suggest_alternatives(
        parse_time(preferred)?,
        check_minutes("duration", duration_minutes)?,
        &existing,
        count.map_or(defaults.suggestion_count, |c| c as usize),
        &BufferPolicy::new(buffer),
    );

    to_json(&format_times(&suggestions))
}

/// List every open slot start on `day` (`YYYY-MM-DD`).
///
/// Returns a JSON array of local datetime strings.
#[wasm_bindgen(js_name = "getAvailableSlots")]
pub fn get_available_slots(
    day: &str,
    bookings_json: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let scheduler = Scheduler::new(parse_config(config_json)?);
    let day = parse_date(day).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let existing = parse_bookings_json(bookings_json)?;

    to_json(&format_times(&scheduler.available_slots(day, &existing)))
}

/// Compute a booking's buffered window.
#[wasm_bindgen(js_name = "getBookingWindow")]
pub fn get_booking_window(
    start_time: &str,
    duration_minutes: i64,
    buffer_minutes: Option<i64>,
) -> Result<String, JsValue> {
    let buffer = match buffer_minutes {
        Some(minutes) => BufferPolicy::new(check_minutes("buffer", minutes)?),
        None => BufferPolicy::default(),
    };
    let window = booking_engine::get_booking_window(
        parse_time(start_time)?,
        check_minutes("duration", duration_minutes)?,
        &buffer,
    );

    to_json(&WindowDto {
        booking_start: window.booking_start.format("%Y-%m-%dT%H:%M:%S").to_string(),
        booking_end: window.booking_end.format("%Y-%m-%dT%H:%M:%S").to_string(),
        window_start: window.window_start.format("%Y-%m-%dT%H:%M:%S").to_string(),
        window_end: window.window_end.format("%Y-%m-%dT%H:%M:%S").to_string(),
        total_duration: window.total_duration,
    })
}

/// Whether `t` falls inside `[start_hour, end_hour)`; defaults are 9 and 20.
///
/// An inverted or empty window (`start_hour >= end_hour`) contains nothing.
/// Only hours above 23 and unparseable times are errors.
#[wasm_bindgen(js_name = "isWithinBusinessHours")]
pub fn is_within_business_hours(
    t: &str,
    start_hour: Option<u32>,
    end_hour: Option<u32>,
) -> Result<bool, JsValue> {
    let defaults = BusinessHours::default();
    let hours = BusinessHours::new(
        start_hour.unwrap_or(defaults.start_hour()),
        end_hour.unwrap_or(defaults.end_hour()),
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(booking_engine::is_within_business_hours(
        parse_time(t)?,
        &hours,
    ))
}
