//! Relative-time phrases.
//!
//! Both forms work the same way: an [`Elapsed`] is computed once, then an
//! ordered rule table is walked and the first rule whose predicate holds
//! decides what to print. The last rule of each table has no guard, so
//! classification always succeeds.
//!
//! The long form (`3 days ago`, `10 February`) looks its phrases up by
//! message id. The short form (`3d`, `21г`) composes its key from the
//! numeral placeholder, the plural infix and a unit tag, then looks up that
//! composed key:
//!
//! ```text
//! (unit, value) -> resolve(locale, value) -> compose_key -> lookup -> substitute
//!   (Day, 3)          Few                    "%d_d"        "%dд"     "3д"
//! ```

use crate::calendar::Elapsed;
use crate::catalog::TranslationStore;
use crate::locale::LocaleCode;
use crate::plural::{PluralVariant, resolve};
use crate::render::{DatePattern, DateRenderer};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};


/// Placeholder replaced by the numeral in every template.
pub const PLACEHOLDER: &str = "%d";

pub const KEY_FEW_DAYS_AGO: &str = "time_few_days_ago";
pub const KEY_ONE_DAY_AGO: &str = "time_one_day_ago";
pub const KEY_FEW_HOURS_AGO: &str = "time_few_hours_ago";
pub const KEY_ONE_HOUR_AGO: &str = "time_one_hour_ago";
pub const KEY_FEW_MINUTES_AGO: &str = "time_few_minutes_ago";
pub const KEY_ZERO_SECONDS_AGO: &str = "time_0_seconds_ago";

/// Message ids the long form may request.
pub const LONG_FORM_KEYS: [&str; 6] = [
    KEY_FEW_DAYS_AGO,
    KEY_ONE_DAY_AGO,
    KEY_FEW_HOURS_AGO,
    KEY_ONE_HOUR_AGO,
    KEY_FEW_MINUTES_AGO,
    KEY_ZERO_SECONDS_AGO,
];

/// Options accepted by the long form.
///
/// Neither flag changes the output yet; they are kept so callers can pass
/// them without a breaking change once numeric rendering exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeAgoOptions {
    pub numeric_dates: bool,
    pub numeric_times: bool,
}

/// Unit of a short-form token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl ShortUnit {
    pub const ALL: [ShortUnit; 7] = [
        ShortUnit::Year,
        ShortUnit::Month,
        ShortUnit::Week,
        ShortUnit::Day,
        ShortUnit::Hour,
        ShortUnit::Minute,
        ShortUnit::Second,
    ];

    /// Unit tag in composed keys. Months are `M` to keep them apart from
    /// minutes.
    pub fn tag(self) -> &'static str {
        match self {
            ShortUnit::Year => "y",
            ShortUnit::Month => "M",
            ShortUnit::Week => "w",
            ShortUnit::Day => "d",
            ShortUnit::Hour => "h",
            ShortUnit::Minute => "m",
            ShortUnit::Second => "s",
        }
    }
}

/// What the long form decided to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LongPhrase {
    /// The subject's calendar date.
    Date { pattern: DatePattern },
    /// A template that carries a numeral.
    Counted { key: &'static str, value: u32 },
    /// A template without a numeral.
    Fixed { key: &'static str },
}

/// What the short form decided to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShortToken {
    pub value: u32,
    pub unit: ShortUnit,
}

struct LongRule {
    name: &'static str,
    applies: fn(&Elapsed) -> bool,
    phrase: fn(&Elapsed) -> LongPhrase,
}

struct ShortRule {
    name: &'static str,
    applies: fn(&Elapsed) -> bool,
    value: fn(&Elapsed) -> u32,
    unit: ShortUnit,
}

const LONG_RULES: &[LongRule] = &[
    LongRule {
        name: "months",
        applies: |e| e.delta.months >= 1,
        phrase: |e| LongPhrase::Date {
            pattern: if e.same_year {
                DatePattern::DayMonth
            } else {
                DatePattern::DayMonthYear
            },
        },
    },
    LongRule {
        name: "weeks",
        applies: |e| e.delta.weeks_of_year >= 1,
        phrase: |_| LongPhrase::Date {
            pattern: DatePattern::DayMonth,
        },
    },
    LongRule {
        name: "days",
        applies: |e| e.delta.days >= 2,
        phrase: |e| LongPhrase::Counted {
            key: KEY_FEW_DAYS_AGO,
            value: e.delta.days,
        },
    },
    LongRule {
        name: "yesterday",
        applies: |e| e.is_yesterday,
        phrase: |_| LongPhrase::Fixed {
            key: KEY_ONE_DAY_AGO,
        },
    },
    LongRule {
        name: "hours",
        applies: |e| e.delta.hours >= 2,
        phrase: |e| LongPhrase::Counted {
            key: KEY_FEW_HOURS_AGO,
            value: e.delta.hours,
        },
    },
    LongRule {
        name: "hour",
        applies: |e| e.delta.hours == 1,
        phrase: |e| LongPhrase::Counted {
            key: KEY_ONE_HOUR_AGO,
            value: e.delta.hours,
        },
    },
    LongRule {
        name: "minutes",
        applies: |e| e.delta.minutes >= 1,
        phrase: |e| LongPhrase::Counted {
            key: KEY_FEW_MINUTES_AGO,
            value: e.delta.minutes,
        },
    },
    LongRule {
        name: "seconds",
        applies: |_| true,
        phrase: |_| LongPhrase::Fixed {
            key: KEY_ZERO_SECONDS_AGO,
        },
    },
];

const SHORT_RULES: &[ShortRule] = &[
    ShortRule {
        name: "years",
        applies: |e| e.delta.years >= 1,
        value: |e| e.delta.years,
        unit: ShortUnit::Year,
    },
    ShortRule {
        name: "months",
        applies: |e| e.delta.months >= 1,
        value: |e| e.delta.months,
        unit: ShortUnit::Month,
    },
    ShortRule {
        name: "weeks",
        applies: |e| e.delta.weeks_of_year >= 1,
        value: |e| e.delta.weeks_of_year,
        unit: ShortUnit::Week,
    },
    ShortRule {
        name: "days",
        applies: |e| e.delta.days >= 2,
        value: |e| e.delta.days,
        unit: ShortUnit::Day,
    },
    ShortRule {
        name: "yesterday",
        applies: |e| e.is_yesterday,
        value: |_| 1,
        unit: ShortUnit::Day,
    },
    ShortRule {
        name: "hours",
        applies: |e| e.delta.hours >= 1,
        value: |e| e.delta.hours,
        unit: ShortUnit::Hour,
    },
    ShortRule {
        name: "minutes",
        applies: |e| e.delta.minutes >= 1,
        value: |e| e.delta.minutes,
        unit: ShortUnit::Minute,
    },
    ShortRule {
        name: "seconds",
        applies: |e| e.delta.seconds >= 3,
        value: |e| e.delta.seconds,
        unit: ShortUnit::Second,
    },
    ShortRule {
        name: "now",
        applies: |_| true,
        value: |e| e.delta.seconds,
        unit: ShortUnit::Second,
    },
];

/// Picks the long-form phrase for `elapsed`.
pub fn classify_long(elapsed: &Elapsed) -> LongPhrase {
    LONG_RULES
        .iter()
        .find(|rule| (rule.applies)(elapsed))
        .map(|rule| {
            tracing::debug!(rule = rule.name, "long form rule matched");
            (rule.phrase)(elapsed)
        })
        .unwrap_or(LongPhrase::Fixed {
            key: KEY_ZERO_SECONDS_AGO,
        })
}

/// Picks the short-form token for `elapsed`.
pub fn classify_short(elapsed: &Elapsed) -> ShortToken {
    SHORT_RULES
        .iter()
        .find(|rule| (rule.applies)(elapsed))
        .map(|rule| {
            tracing::debug!(rule = rule.name, "short form rule matched");
            ShortToken {
                value: (rule.value)(elapsed),
                unit: rule.unit,
            }
        })
        .unwrap_or(ShortToken {
            value: elapsed.delta.seconds,
            unit: ShortUnit::Second,
        })
}

/// Builds the short-form key for a unit and plural variant.
///
/// # Examples
///
/// ```
/// use libago::format::{ShortUnit, compose_key};
/// use libago::plural::PluralVariant;
///
/// assert_eq!(compose_key(ShortUnit::Day, PluralVariant::Few), "%d_d");
/// assert_eq!(compose_key(ShortUnit::Month, PluralVariant::Many), "%dM");
/// ```
pub fn compose_key(unit: ShortUnit, variant: PluralVariant) -> String {
    format!("{PLACEHOLDER}{}{}", variant.infix(), unit.tag())
}

/// Replaces the first numeral placeholder in `template` with `value`.
pub fn substitute(template: &str, value: u32) -> String {
    template.replacen(PLACEHOLDER, &value.to_string(), 1)
}

/// Renders a long-form phrase.
///
/// Counted templates without a placeholder get the numeral in front, so an
/// untranslated key still shows the number (`3 time_few_days_ago`).
pub fn render_long<S, R>(
    phrase: LongPhrase,
    subject_date: chrono::NaiveDate,
    locale: &LocaleCode,
    store: &S,
    renderer: &R,
) -> String
where
    S: TranslationStore + ?Sized,
    R: DateRenderer + ?Sized,
{
    match phrase {
        LongPhrase::Date { pattern } => renderer.render(subject_date, pattern, locale),
        LongPhrase::Counted { key, value } => {
            let template = store.lookup(locale, key);
            if template.contains(PLACEHOLDER) {
                substitute(&template, value)
            } else {
                format!("{value} {template}")
            }
        }
        LongPhrase::Fixed { key } => store.lookup(locale, key),
    }
}

/// Renders a short-form token.
pub fn render_short<S>(token: ShortToken, locale: &LocaleCode, store: &S) -> String
where
    S: TranslationStore + ?Sized,
{
    let variant = resolve(locale, f64::from(token.value));
    let key = compose_key(token.unit, variant);
    substitute(&store.lookup(locale, &key), token.value)
}

/// Long-form phrase for `subject` measured from `reference`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libago::LocaleCode;
/// use libago::catalog::Catalog;
/// use libago::format::{TimeAgoOptions, time_ago};
/// use libago::render::ChronoDateRenderer;
///
/// let reference = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
/// let subject = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
///
/// let text = time_ago(
///     &subject,
///     &reference,
///     &LocaleCode::new("en"),
///     &Catalog::builtin(),
///     &ChronoDateRenderer,
///     TimeAgoOptions::default(),
/// );
/// assert_eq!(text, "3 days ago");
/// ```
pub fn time_ago<Tz, S, R>(
    subject: &DateTime<Tz>,
    reference: &DateTime<Tz>,
    locale: &LocaleCode,
    store: &S,
    renderer: &R,
    options: TimeAgoOptions,
) -> String
where
    Tz: TimeZone,
    S: TranslationStore + ?Sized,
    R: DateRenderer + ?Sized,
{
    tracing::trace!(?options, locale = %locale, "formatting long form");
    let elapsed = Elapsed::between(subject, reference);
    let phrase = classify_long(&elapsed);
    render_long(phrase, subject.naive_local().date(), locale, store, renderer)
}

/// Short-form token for `subject` measured from `reference`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libago::LocaleCode;
/// use libago::catalog::Catalog;
/// use libago::format::short_time_ago;
///
/// let reference = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
/// let subject = Utc.with_ymd_and_hms(2024, 3, 10, 11, 58, 0).unwrap();
///
/// assert_eq!(short_time_ago(&subject, &reference, &LocaleCode::new("en"), &Catalog::builtin()), "2m");
/// ```
pub fn short_time_ago<Tz, S>(
    subject: &DateTime<Tz>,
    reference: &DateTime<Tz>,
    locale: &LocaleCode,
    store: &S,
) -> String
where
    Tz: TimeZone,
    S: TranslationStore + ?Sized,
{
    let elapsed = Elapsed::between(subject, reference);
    render_short(classify_short(&elapsed), locale, store)
}
