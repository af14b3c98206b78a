use super::*;
use chrono::{Datelike, FixedOffset, Timelike, Utc};

#[test]
fn test_parse_rfc3339_converts_to_target_zone() {
    let parsed = parse_timestamp("2024-03-10T12:00:00+02:00", &Utc).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap());
}

#[test]
fn test_parse_naive_datetime_in_target_zone() {
    let tz = FixedOffset::east_opt(3 * 3600).unwrap();

    let parsed = parse_timestamp("2024-03-10 08:30:00", &tz).unwrap();
    assert_eq!(parsed.hour(), 8);
    assert_eq!(parsed.naive_utc().hour(), 5);

    let parsed = parse_timestamp("2024-03-10T08:30:00", &tz).unwrap();
    assert_eq!(parsed.minute(), 30);
}

#[test]
fn test_parse_date_is_midnight() {
    let parsed = parse_timestamp("2023-11-03", &Utc).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 11, 3, 0, 0, 0).unwrap());
}

#[test]
fn test_parse_unix_seconds() {
    let parsed = parse_timestamp("@86400", &Utc).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap());

    let tz = FixedOffset::west_opt(3600).unwrap();
    let parsed = parse_timestamp("@0", &tz).unwrap();
    assert_eq!(parsed.year(), 1969);
    assert_eq!(parsed.day(), 31);
}

#[test]
fn test_parse_trims_whitespace() {
    assert!(parse_timestamp("  2024-03-10  ", &Utc).is_ok());
}

#[test]
fn test_parse_rejects_garbage() {
    let err = parse_timestamp("last tuesday", &Utc).unwrap_err();
    assert!(err.contains("Unrecognized timestamp 'last tuesday'"));

    let err = parse_timestamp("@soon", &Utc).unwrap_err();
    assert!(err.contains("Invalid unix timestamp"));

    assert!(parse_timestamp("2024-02-30", &Utc).is_err());
}
