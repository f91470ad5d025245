//! # booking-engine
//!
//! Deterministic booking conflict detection for venue schedules.
//!
//! The engine decides whether a requested start time collides with confirmed
//! bookings, enforces a preparation/cleanup buffer between bookings, proposes
//! alternative start times and enumerates the open slots of a business day.
//! Every operation is a pure function over the values passed in: no I/O, no
//! shared state, so it can run synchronously inside a request handler.
//!
//! Callers that persist bookings must serialize the check and the write per
//! resource (unique constraint, per-resource lock or a suitably isolated
//! transaction). The engine only covers the check.
//!
//! ## Modules
//!
//! - [`interval`] — minute arithmetic and half-open interval overlap
//! - [`model`] — bookings, candidate requests and conflict results
//! - [`config`] — buffer policy, business hours and engine defaults
//! - [`conflict`] — classify a candidate against existing bookings
//! - [`suggest`] — walk forward to the next available start times
//! - [`slots`] — enumerate every open slot of a business day
//! - [`window`] — a booking's footprint including its buffer
//! - [`hours`] — business-hours predicate
//! - [`scheduler`] — configured facade with the check-then-suggest workflow
//! - [`parse`] — timestamp parsing for adapters
//! - [`error`] — Error types

pub mod config;
pub mod conflict;
pub mod error;
pub mod hours;
pub mod interval;
pub mod model;
pub mod parse;
pub mod scheduler;
pub mod slots;
pub mod suggest;
pub mod window;

pub use config::{minutes_in_range, BufferPolicy, BusinessHours, EngineConfig, MAX_MINUTES};
pub use conflict::{check_conflict, check_overlap};
pub use error::EngineError;
pub use hours::is_within_business_hours;
pub use interval::{add_minutes, intervals_overlap, sub_minutes};
pub use model::{CandidateRequest, ConflictResult, ConflictType, ExistingBooking};
pub use parse::{parse_date, parse_timestamp};
pub use scheduler::Scheduler;
pub use slots::get_available_slots;
pub use suggest::{suggest_alternatives, suggest_overlap_free, MAX_SUGGESTION_ATTEMPTS};
pub use window::{get_booking_window, BookingWindow};
