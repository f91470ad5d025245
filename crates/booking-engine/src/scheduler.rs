//! Configured facade over the engine operations.
//!
//! A [`Scheduler`] is a thin owner of an [`EngineConfig`]; every method
//! forwards to the free function of the same name with the configured values.
//! It holds no other state and is `Copy`, so each request handler can keep its
//! own.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::EngineConfig;
use crate::conflict::{check_conflict, check_overlap};
use crate::hours::is_within_business_hours;
use crate::model::{CandidateRequest, ConflictResult, ExistingBooking};
use crate::slots::get_available_slots;
use crate::suggest::{suggest_alternatives, suggest_overlap_free};
use crate::window::{get_booking_window, BookingWindow};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scheduler {
    config: EngineConfig,
}

impl Scheduler {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn check_conflict(
        &self,
        candidate: &CandidateRequest,
        existing: &[ExistingBooking],
    ) -> ConflictResult {
        check_conflict(candidate, existing, &self.config.buffer())
    }

    pub fn check_overlap(
        &self,
        candidate: &CandidateRequest,
        existing: &[ExistingBooking],
    ) -> ConflictResult {
        check_overlap(candidate, existing, &self.config.buffer())
    }

    /// Check a candidate and, when it conflicts, attach alternatives.
    ///
    /// Suggestions start from the candidate's own start and duration and use
    /// the configured suggestion count. A clear result is returned untouched.
    pub fn evaluate(
        &self,
        candidate: &CandidateRequest,
        existing: &[ExistingBooking],
    ) -> ConflictResult {
        let mut result = self.check_conflict(candidate, existing);
        if result.has_conflict {
            result.suggested_times = self.suggest_alternatives(
                candidate.start_time,
                candidate.duration_minutes,
                existing,
            );
        }
        result
    }

    /// Strict counterpart of [`Scheduler::evaluate`]: checks with
    /// [`check_overlap`] and suggests only times that also pass it.
    pub fn evaluate_strict(
        &self,
        candidate: &CandidateRequest,
        existing: &[ExistingBooking],
    ) -> ConflictResult {
        let mut result = self.check_overlap(candidate, existing);
        if result.has_conflict {
            result.suggested_times = suggest_overlap_free(
                candidate.start_time,
                candidate.duration_minutes,
                existing,
                self.config.suggestion_count,
                &self.config.buffer(),
            );
        }
        result
    }

    pub fn suggest_alternatives(
        &self,
        preferred: NaiveDateTime,
        duration_minutes: i64,
        existing: &[ExistingBooking],
    ) -> Vec<NaiveDateTime> {
        suggest_alternatives(
            preferred,
            duration_minutes,
            existing,
            self.config.suggestion_count,
            &self.config.buffer(),
        )
    }

    /// Open slots on `day` using the configured slot duration.
    pub fn available_slots(
        &self,
        day: NaiveDate,
        existing: &[ExistingBooking],
    ) -> Vec<NaiveDateTime> {
        self.available_slots_for(day, existing, self.config.slot_duration_minutes)
    }

    pub fn available_slots_for(
        &self,
        day: NaiveDate,
        existing: &[ExistingBooking],
        slot_duration_minutes: i64,
    ) -> Vec<NaiveDateTime> {
        get_available_slots(
            day,
            existing,
            slot_duration_minutes,
            &self.config.business_hours,
            &self.config.buffer(),
        )
    }

    pub fn booking_window(&self, start_time: NaiveDateTime, duration_minutes: i64) -> BookingWindow {
        get_booking_window(start_time, duration_minutes, &self.config.buffer())
    }

    pub fn is_within_business_hours(&self, t: NaiveDateTime) -> bool {
        is_within_business_hours(t, &self.config.business_hours)
    }
}
