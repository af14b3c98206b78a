//! Calendar-aware breakdown of elapsed time.
//!
//! The breakdown mirrors a calendar component difference: whole years and
//! months are counted first by stepping the earlier instant forward on the
//! calendar (clamping to the end of shorter months), and only the remainder
//! is split into weeks, days, hours, minutes and seconds. Months are stepped
//! on the wall clock of the earlier instant's zone; the remainder is the real
//! time elapsed after that step, so daylight-saving shifts do not skew it.

use chrono::{DateTime, Datelike, Days, Months, NaiveDateTime, TimeZone};
use serde::Serialize;


const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Elapsed calendar units between two instants.
///
/// Fields are only meaningful together: they come from a single
/// [`breakdown`] call and are not comparable across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalendarDelta {
    pub years: u32,
    pub months: u32,
    pub weeks_of_year: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CalendarDelta {
    /// Returns true when every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Breaks the span between `earlier` and `later` into calendar components.
///
/// The caller is expected to order the pair with [`earlier_of`] and
/// [`later_of`]. A reversed or empty span yields the zero breakdown.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libago::calendar::breakdown;
///
/// let earlier = Utc.with_ymd_and_hms(2024, 1, 31, 8, 0, 0).unwrap();
/// let later = Utc.with_ymd_and_hms(2024, 3, 2, 9, 30, 0).unwrap();
///
/// let delta = breakdown(&earlier, &later);
/// assert_eq!(delta.months, 1);
/// assert_eq!(delta.days, 2);
/// assert_eq!(delta.hours, 1);
/// assert_eq!(delta.minutes, 30);
/// ```
pub fn breakdown<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>) -> CalendarDelta {
    if later <= earlier {
        return CalendarDelta::default();
    }

    let start = earlier.naive_local();
    let total_months = whole_months_between(start, later.naive_local());
    let anchor = add_months(start, total_months).unwrap_or(start);

    // Real time elapsed after the month step
    let rest = match earlier.timezone().from_local_datetime(&anchor).earliest() {
        Some(instant) => later.timestamp() - instant.timestamp(),
        None => (later.naive_local() - anchor).num_seconds(),
    };

    split_remainder(total_months, rest.max(0))
}

fn split_remainder(total_months: u32, rest: i64) -> CalendarDelta {
    CalendarDelta {
        years: total_months / 12,
        months: total_months % 12,
        weeks_of_year: to_u32(rest / SECONDS_PER_WEEK),
        days: to_u32(rest % SECONDS_PER_WEEK / SECONDS_PER_DAY),
        hours: to_u32(rest % SECONDS_PER_DAY / SECONDS_PER_HOUR),
        minutes: to_u32(rest % SECONDS_PER_HOUR / SECONDS_PER_MINUTE),
        seconds: to_u32(rest % SECONDS_PER_MINUTE),
    }
}

/// Largest month count `k` with `start + k months <= end`.
fn whole_months_between(start: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let estimate = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let estimate = u32::try_from(estimate).unwrap_or(0);

    match add_months(start, estimate) {
        Some(stepped) if stepped <= end => estimate,
        _ => estimate.saturating_sub(1),
    }
}

fn add_months(start: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    start.checked_add_months(Months::new(months))
}

fn to_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Returns the earlier of two instants. Ties resolve to `a`.
pub fn earlier_of<'a, Tz: TimeZone>(a: &'a DateTime<Tz>, b: &'a DateTime<Tz>) -> &'a DateTime<Tz> {
    if a <= b { a } else { b }
}

/// Returns the later of two instants. Ties resolve to `a`.
pub fn later_of<'a, Tz: TimeZone>(a: &'a DateTime<Tz>, b: &'a DateTime<Tz>) -> &'a DateTime<Tz> {
    if a >= b { a } else { b }
}

/// Steps `instant` back by `n` calendar days on its wall clock.
///
/// Returns `None` only when the result falls outside chrono's range.
pub fn subtract_days<Tz: TimeZone>(instant: &DateTime<Tz>, n: u64) -> Option<NaiveDateTime> {
    instant.naive_local().checked_sub_days(Days::new(n))
}

/// Day of the month (1-based) on the instant's wall clock.
pub fn day_of_month<Tz: TimeZone>(instant: &DateTime<Tz>) -> u32 {
    instant.naive_local().day()
}

/// Calendar year on the instant's wall clock.
pub fn year<Tz: TimeZone>(instant: &DateTime<Tz>) -> i32 {
    instant.naive_local().year()
}

/// Whether one day before `reference` has the same day of month as `subject`.
///
/// Only the day-of-month numbers are compared, so a subject several months
/// back on the same day number also qualifies. Callers rank this check below
/// the month and week cases.
pub fn is_yesterday<Tz: TimeZone>(subject: &DateTime<Tz>, reference: &DateTime<Tz>) -> bool {
    subtract_days(reference, 1).is_some_and(|day_before| day_before.day() == day_of_month(subject))
}

/// Whether both instants fall in the same calendar year.
pub fn same_year<Tz: TimeZone>(subject: &DateTime<Tz>, reference: &DateTime<Tz>) -> bool {
    year(subject) == year(reference)
}

/// Everything the formatters need to know about a (subject, reference) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Elapsed {
    /// Breakdown of the normalized (earlier, later) pair.
    pub delta: CalendarDelta,
    pub is_yesterday: bool,
    pub same_year: bool,
}

impl Elapsed {
    /// Computes the breakdown and both flags for `subject` measured from
    /// `reference`.
    ///
    /// The pair is normalized before the breakdown, so the delta does not
    /// depend on argument order. The flags do.
    pub fn between<Tz: TimeZone>(subject: &DateTime<Tz>, reference: &DateTime<Tz>) -> Self {
        let earlier = earlier_of(subject, reference);
        let later = later_of(subject, reference);

        Self {
            delta: breakdown(earlier, later),
            is_yesterday: is_yesterday(subject, reference),
            same_year: same_year(subject, reference),
        }
    }
}
