//! Tests for open-slot enumeration across a business day.

use booking_engine::{
    get_available_slots, BufferPolicy, BusinessHours, ExistingBooking,
};
use chrono::{NaiveDate, NaiveDateTime};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    day().and_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn empty_day_lists_every_fitting_half_hour() {
    let slots = get_available_slots(
        day(),
        &[],
        120,
        &BusinessHours::default(),
        &BufferPolicy::default(),
    );

    // 09:00 through 18:00 inclusive: 18:00 + 2h == 20:00 still fits.
    assert_eq!(slots.len(), 19);
    assert_eq!(slots.first(), Some(&at(9, 0)));
    assert_eq!(slots.last(), Some(&at(18, 0)));
}

#[test]
fn morning_booking_blocks_nearby_starts() {
    let existing = vec![ExistingBooking::new("b1", at(9, 0), 120)];

    let slots = get_available_slots(
        day(),
        &existing,
        120,
        &BusinessHours::default(),
        &BufferPolicy::default(),
    );

    assert!(!slots.contains(&at(9, 0)), "09:00 is a double booking");
    assert!(!slots.contains(&at(9, 30)), "09:30 violates the buffer");
    // First grid point at least 45 minutes from 09:00.
    assert_eq!(slots.first(), Some(&at(10, 0)));
    assert_eq!(slots.len(), 17);
}

#[test]
fn slots_stay_inside_business_hours() {
    let hours = BusinessHours::new(8, 12).unwrap();
    let slots = get_available_slots(day(), &[], 60, &hours, &BufferPolicy::default());

    assert_eq!(
        slots,
        vec![at(8, 0), at(8, 30), at(9, 0), at(9, 30), at(10, 0), at(10, 30), at(11, 0)]
    );
    for slot in &slots {
        assert!(*slot >= at(8, 0));
        assert!(*slot + chrono::TimeDelta::minutes(60) <= at(12, 0));
    }
}

#[test]
fn inverted_or_empty_hours_yield_nothing() {
    for hours in [BusinessHours::new(20, 9).unwrap(), BusinessHours::new(12, 12).unwrap()] {
        let slots = get_available_slots(day(), &[], 60, &hours, &BufferPolicy::default());
        assert!(slots.is_empty(), "{hours:?}");
    }
}

#[test]
fn last_representable_day_is_enumerated() {
    let slots = get_available_slots(
        NaiveDate::MAX,
        &[],
        60,
        &BusinessHours::default(),
        &BufferPolicy::default(),
    );
    // 09:00 through 19:00 every half hour.
    assert_eq!(slots.len(), 21);
}

#[test]
fn slot_longer_than_day_yields_nothing() {
    let slots = get_available_slots(
        day(),
        &[],
        661,
        &BusinessHours::default(),
        &BufferPolicy::default(),
    );
    assert!(slots.is_empty());
}

#[test]
fn slot_exactly_as_long_as_day_yields_opening_only() {
    let slots = get_available_slots(
        day(),
        &[],
        660,
        &BusinessHours::default(),
        &BufferPolicy::default(),
    );
    assert_eq!(slots, vec![at(9, 0)]);
}

#[test]
fn zero_buffer_only_removes_exact_collisions() {
    let existing = vec![ExistingBooking::new("b1", at(10, 0), 120)];
    let hours = BusinessHours::new(9, 12).unwrap();

    let slots = get_available_slots(day(), &existing, 60, &hours, &BufferPolicy::new(0));

    assert_eq!(slots, vec![at(9, 0), at(9, 30), at(10, 30), at(11, 0)]);
}

#[test]
fn slots_are_chronological() {
    let existing = vec![
        ExistingBooking::new("b1", at(13, 0), 60),
        ExistingBooking::new("b2", at(10, 0), 60),
    ];

    let slots = get_available_slots(
        day(),
        &existing,
        90,
        &BusinessHours::default(),
        &BufferPolicy::default(),
    );

    assert!(slots.windows(2).all(|w| w[0] < w[1]));
    assert!(!slots.contains(&at(10, 0)));
    assert!(!slots.contains(&at(13, 30)));
}
