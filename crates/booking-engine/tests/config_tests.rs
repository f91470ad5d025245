//! Tests for engine configuration loading and timestamp parsing.

use booking_engine::{
    minutes_in_range, parse_date, parse_timestamp, BusinessHours, EngineConfig, EngineError,
    MAX_MINUTES,
};
use chrono::NaiveDate;

#[test]
fn defaults_match_venue_policy() {
    let config = EngineConfig::default();

    assert_eq!(config.buffer_minutes, 45);
    assert_eq!(config.slot_duration_minutes, 120);
    assert_eq!(config.suggestion_count, 3);
    assert_eq!(config.business_hours, BusinessHours::default());
    assert_eq!(config.buffer().buffer_minutes, 45);
}

#[test]
fn full_toml_document_is_loaded() {
    let toml = r#"
        buffer_minutes = 30
        slot_duration_minutes = 90
        suggestion_count = 5

        [business_hours]
        start_hour = 8
        end_hour = 22
    "#;

    let config = EngineConfig::from_toml_str(toml).unwrap();

    assert_eq!(config.buffer_minutes, 30);
    assert_eq!(config.slot_duration_minutes, 90);
    assert_eq!(config.suggestion_count, 5);
    assert_eq!(config.business_hours, BusinessHours::new(8, 22).unwrap());
}

#[test]
fn missing_toml_keys_keep_defaults() {
    let config = EngineConfig::from_toml_str("buffer_minutes = 15").unwrap();

    assert_eq!(config.buffer_minutes, 15);
    assert_eq!(config.slot_duration_minutes, 120);
    assert_eq!(config.business_hours, BusinessHours::default());
}

#[test]
fn partial_business_hours_table_keeps_other_default() {
    let config = EngineConfig::from_toml_str("[business_hours]\nend_hour = 18").unwrap();
    assert_eq!(config.business_hours, BusinessHours::new(9, 18).unwrap());
}

#[test]
fn empty_toml_is_default_config() {
    assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
}

#[test]
fn unknown_toml_key_is_rejected() {
    let err = EngineConfig::from_toml_str("bufer_minutes = 15").unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig(_)), "{err:?}");
}

#[test]
fn out_of_range_business_hours_in_toml_are_rejected() {
    let err = EngineConfig::from_toml_str("[business_hours]\nstart_hour = 9\nend_hour = 24")
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig(_)), "{err:?}");
}

#[test]
fn closed_day_can_be_configured() {
    let config =
        EngineConfig::from_toml_str("[business_hours]\nstart_hour = 12\nend_hour = 12").unwrap();
    assert!(config.business_hours.is_closed());
}

#[test]
fn negative_or_oversized_buffer_is_rejected() {
    let err = EngineConfig::from_toml_str("buffer_minutes = -5").unwrap_err();
    assert!(
        matches!(err, EngineError::MinutesOutOfRange { name: "buffer", value: -5, .. }),
        "{err:?}"
    );

    let err = EngineConfig::from_json_str(r#"{"slot_duration_minutes": 9223372036854775807}"#)
        .unwrap_err();
    assert!(
        matches!(err, EngineError::MinutesOutOfRange { name: "slot duration", .. }),
        "{err:?}"
    );
}

#[test]
fn minutes_range_is_inclusive() {
    assert_eq!(minutes_in_range("duration", 0), Ok(0));
    assert_eq!(minutes_in_range("duration", MAX_MINUTES), Ok(MAX_MINUTES));
    assert!(minutes_in_range("duration", MAX_MINUTES + 1).is_err());
    assert!(minutes_in_range("duration", -1).is_err());
}

#[test]
fn json_document_is_loaded() {
    let config = EngineConfig::from_json_str(
        r#"{"buffer_minutes": 60, "business_hours": {"start_hour": 10, "end_hour": 18}}"#,
    )
    .unwrap();

    assert_eq!(config.buffer_minutes, 60);
    assert_eq!(config.business_hours, BusinessHours::new(10, 18).unwrap());
    assert_eq!(config.suggestion_count, 3);
}

// ── Timestamp parsing ───────────────────────────────────────────────────────

#[test]
fn parses_local_timestamp_shapes() {
    let expected = NaiveDate::from_ymd_opt(2026, 3, 16)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    for input in [
        "2026-03-16T09:30:00",
        "2026-03-16T09:30",
        "2026-03-16 09:30",
        "2026-03-16 09:30:00",
        "  2026-03-16T09:30:00  ",
    ] {
        assert_eq!(parse_timestamp(input).unwrap(), expected, "input {input:?}");
    }
}

#[test]
fn rfc3339_keeps_local_wall_clock() {
    let parsed = parse_timestamp("2026-03-16T09:30:00+02:00").unwrap();
    assert_eq!(
        parsed,
        NaiveDate::from_ymd_opt(2026, 3, 16)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    );
}

#[test]
fn garbage_timestamp_is_rejected() {
    let err = parse_timestamp("next tuesday").unwrap_err();
    assert!(matches!(err, EngineError::InvalidTimestamp(_)));
    assert!(err.to_string().contains("next tuesday"));
}

#[test]
fn far_future_years_are_rejected() {
    assert!(parse_timestamp("+200000-01-01T00:00:00").is_err());
    assert!(parse_timestamp("9999-12-31T23:59:00").is_ok());
    assert!(parse_date("10000-01-01").is_err());
}

#[test]
fn parses_calendar_day() {
    assert_eq!(
        parse_date("2026-03-16").unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
    );
    assert!(parse_date("2026-13-01").is_err());
}
