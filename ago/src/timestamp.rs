//! Command-line timestamp parsing
//!
//! Accepted forms:
//!
//! - RFC 3339 (`2024-03-10T12:00:00+02:00`)
//! - `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS`, read in the target zone
//! - `YYYY-MM-DD`, midnight in the target zone
//! - `@<unix seconds>`
//!
//! Every result is expressed in the target zone so calendar fields follow
//! its wall clock.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse `input` into an instant in `tz`
pub fn parse_timestamp<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Tz>, String> {
    let input = input.trim();

    if let Some(seconds) = input.strip_prefix('@') {
        let seconds: i64 = seconds
            .parse()
            .map_err(|_| format!("Invalid unix timestamp '{}'", input))?;
        return DateTime::from_timestamp(seconds, 0)
            .map(|utc| utc.with_timezone(tz))
            .ok_or_else(|| format!("Unix timestamp '{}' is out of range", input));
    }

    if let Ok(fixed) = DateTime::parse_from_rfc3339(input) {
        return Ok(fixed.with_timezone(tz));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return from_wall_clock(tz, naive, input);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return from_wall_clock(tz, date.and_time(NaiveTime::MIN), input);
    }

    Err(format!(
        "Unrecognized timestamp '{}': expected RFC 3339, YYYY-MM-DD[ HH:MM:SS] or @<unix seconds>",
        input
    ))
}

// Skipped wall-clock times (DST gaps) have no instant; repeated ones take
// the earlier
fn from_wall_clock<Tz: TimeZone>(
    tz: &Tz,
    naive: NaiveDateTime,
    input: &str,
) -> Result<DateTime<Tz>, String> {
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| format!("'{}' does not exist in the configured time zone", input))
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
