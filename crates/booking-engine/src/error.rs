//! Error types for booking-engine operations.
//!
//! Scheduling itself never fails: conflicts are ordinary results. Errors only
//! arise while building configuration or parsing adapter input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid business hours: {start_hour}..{end_hour} (hours must be 0-23)")]
    InvalidBusinessHours { start_hour: u32, end_hour: u32 },

    #[error("Invalid {name}: {value} minutes (must be 0..={max})")]
    MinutesOutOfRange {
        name: &'static str,
        value: i64,
        max: i64,
    },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
