//! Benchmarks for conflict checks, suggestions and slot enumeration on a
//! busy venue schedule.

use booking_engine::{
    check_conflict, get_available_slots, suggest_alternatives, BufferPolicy, BusinessHours,
    CandidateRequest, ExistingBooking,
};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

fn opening() -> NaiveDateTime {
    day().and_hms_opt(9, 0, 0).unwrap()
}

/// `n` bookings spread across a week, two hours apart.
fn schedule(n: i64) -> Vec<ExistingBooking> {
    (0..n)
        .map(|i| ExistingBooking::new(format!("b{i}"), opening() + TimeDelta::minutes(120 * i), 90))
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let existing = schedule(200);
    let buffer = BufferPolicy::default();
    let hours = BusinessHours::default();
    let clear = CandidateRequest::new(opening() - TimeDelta::days(1), 120);

    c.bench_function("check_conflict/200 bookings, no conflict", |b| {
        b.iter(|| check_conflict(black_box(&clear), black_box(&existing), &buffer))
    });

    c.bench_function("suggest_alternatives/200 bookings", |b| {
        b.iter(|| suggest_alternatives(black_box(opening()), 120, black_box(&existing), 3, &buffer))
    });

    c.bench_function("get_available_slots/200 bookings", |b| {
        b.iter(|| get_available_slots(black_box(day()), black_box(&existing), 120, &hours, &buffer))
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
