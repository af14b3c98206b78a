//! Calendar date rendering for the long form.
//!
//! Once a subject is a week or more in the past the long form stops being
//! relative and prints the subject's date instead. The month name comes from
//! chrono's locale tables.

use crate::locale::LocaleCode;
use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;


/// Date layouts used by the long form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePattern {
    /// Day without padding and full month name: `5 March`.
    DayMonth,
    /// Zero-padded day, full month name and four-digit year: `05 March 2023`.
    DayMonthYear,
}

impl DatePattern {
    /// strftime layout for this pattern.
    pub fn strftime(self) -> &'static str {
        match self {
            DatePattern::DayMonth => "%-d %B",
            DatePattern::DayMonthYear => "%d %B %Y",
        }
    }
}

/// Formats calendar dates for a locale.
pub trait DateRenderer: Send + Sync {
    fn render(&self, date: NaiveDate, pattern: DatePattern, locale: &LocaleCode) -> String;
}

/// [`DateRenderer`] backed by chrono's localized formatting.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use libago::LocaleCode;
/// use libago::render::{ChronoDateRenderer, DatePattern, DateRenderer};
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// let text = ChronoDateRenderer.render(date, DatePattern::DayMonth, &LocaleCode::new("en"));
/// assert_eq!(text, "10 February");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDateRenderer;

impl DateRenderer for ChronoDateRenderer {
    fn render(&self, date: NaiveDate, pattern: DatePattern, locale: &LocaleCode) -> String {
        let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        midnight
            .format_localized(pattern.strftime(), chrono_locale(locale))
            .to_string()
    }
}

/// Maps a language tag to the chrono locale whose month names it should use.
///
/// Unknown languages get the POSIX locale, which spells months in English.
pub fn chrono_locale(locale: &LocaleCode) -> Locale {
    match locale.language().as_str() {
        "en" => Locale::en_US,
        "pl" => Locale::pl_PL,
        "ru" => Locale::ru_RU,
        "uk" => Locale::uk_UA,
        "de" => Locale::de_DE,
        "fr" => Locale::fr_FR,
        "es" => Locale::es_ES,
        "it" => Locale::it_IT,
        "pt" => Locale::pt_PT,
        "nl" => Locale::nl_NL,
        "cs" => Locale::cs_CZ,
        "sv" => Locale::sv_SE,
        "tr" => Locale::tr_TR,
        "ja" => Locale::ja_JP,
        "zh" => Locale::zh_CN,
        _ => Locale::POSIX,
    }
}
