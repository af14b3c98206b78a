use crate::format::Formattable;
use crate::timestamp::parse_timestamp;
use chrono::{DateTime, Local, TimeZone, Utc};
use libago::config::{Style, TimeZoneChoice};
use libago::{CalendarDelta, LocaleCode, TimeAgo, TimeAgoOptions};
use serde::Serialize;
use std::fmt::Display;
use tabled::{Table, Tabled};

pub mod handlers;

/// Inputs of `ago since` and `ago breakdown`, with CLI flags already
/// merged over the configuration
#[derive(Debug, Clone, Default)]
pub struct SinceRequest {
    pub subject: String,
    /// `None` means now
    pub reference: Option<String>,
    pub locale: LocaleCode,
    pub style: Style,
    pub options: TimeAgoOptions,
}

/// A formatted phrase
#[derive(Debug, Serialize)]
pub struct PhraseReport {
    pub subject: String,
    pub reference: String,
    pub locale: String,
    pub style: Style,
    pub text: String,
}

impl Formattable for PhraseReport {
    fn format_pretty(&self) -> String {
        self.text.clone()
    }
}

/// One calendar unit of a breakdown
#[derive(Debug, Tabled, Serialize)]
pub struct UnitRow {
    #[tabled(rename = "UNIT")]
    pub unit: &'static str,
    #[tabled(rename = "VALUE")]
    pub value: u32,
}

/// Breakdown of a span with both phrases
#[derive(Debug, Serialize)]
pub struct BreakdownReport {
    pub subject: String,
    pub reference: String,
    pub locale: String,
    pub delta: CalendarDelta,
    pub is_yesterday: bool,
    pub same_year: bool,
    pub long: String,
    pub short: String,
}

impl BreakdownReport {
    pub fn unit_rows(&self) -> Vec<UnitRow> {
        let d = &self.delta;
        vec![
            UnitRow { unit: "years", value: d.years },
            UnitRow { unit: "months", value: d.months },
            UnitRow { unit: "weeks", value: d.weeks_of_year },
            UnitRow { unit: "days", value: d.days },
            UnitRow { unit: "hours", value: d.hours },
            UnitRow { unit: "minutes", value: d.minutes },
            UnitRow { unit: "seconds", value: d.seconds },
        ]
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

impl Formattable for BreakdownReport {
    fn format_pretty(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Subject:   {}\n", self.subject));
        output.push_str(&format!("Reference: {}\n", self.reference));
        output.push_str(&format!("{}\n", Table::new(self.unit_rows())));
        output.push_str(&format!("Yesterday: {}\n", yes_no(self.is_yesterday)));
        output.push_str(&format!("Same year: {}\n", yes_no(self.same_year)));
        output.push_str(&format!("Long:      {}\n", self.long));
        output.push_str(&format!("Short:     {}\n", self.short));
        output
    }
}

/// Format the phrase for a request, reading zone-less inputs in `zone`
pub fn phrase(
    ago: &TimeAgo,
    zone: TimeZoneChoice,
    request: &SinceRequest,
) -> Result<PhraseReport, String> {
    match zone {
        TimeZoneChoice::Local => phrase_in(ago, &Local, request),
        TimeZoneChoice::Utc => phrase_in(ago, &Utc, request),
    }
}

/// Break down the span of a request, reading zone-less inputs in `zone`
pub fn breakdown(
    ago: &TimeAgo,
    zone: TimeZoneChoice,
    request: &SinceRequest,
) -> Result<BreakdownReport, String> {
    match zone {
        TimeZoneChoice::Local => breakdown_in(ago, &Local, request),
        TimeZoneChoice::Utc => breakdown_in(ago, &Utc, request),
    }
}

fn resolve_pair<Tz: TimeZone>(
    tz: &Tz,
    request: &SinceRequest,
) -> Result<(DateTime<Tz>, DateTime<Tz>), String> {
    let subject = parse_timestamp(&request.subject, tz)?;
    let reference = match &request.reference {
        Some(reference) => parse_timestamp(reference, tz)?,
        None => Utc::now().with_timezone(tz),
    };
    tracing::debug!(subject = %subject.naive_local(), reference = %reference.naive_local(), "resolved instants");
    Ok((subject, reference))
}

fn phrase_in<Tz>(ago: &TimeAgo, tz: &Tz, request: &SinceRequest) -> Result<PhraseReport, String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (subject, reference) = resolve_pair(tz, request)?;
    let text = match request.style {
        Style::Long => ago.time_ago_with(&subject, &reference, &request.locale, request.options),
        Style::Short => ago.short_time_ago_in(&subject, &reference, &request.locale),
    };

    Ok(PhraseReport {
        subject: subject.to_rfc3339(),
        reference: reference.to_rfc3339(),
        locale: request.locale.to_string(),
        style: request.style,
        text,
    })
}

fn breakdown_in<Tz>(
    ago: &TimeAgo,
    tz: &Tz,
    request: &SinceRequest,
) -> Result<BreakdownReport, String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (subject, reference) = resolve_pair(tz, request)?;
    let elapsed = ago.elapsed(&subject, &reference);

    Ok(BreakdownReport {
        subject: subject.to_rfc3339(),
        reference: reference.to_rfc3339(),
        locale: request.locale.to_string(),
        delta: elapsed.delta,
        is_yesterday: elapsed.is_yesterday,
        same_year: elapsed.same_year,
        long: ago.time_ago_with(&subject, &reference, &request.locale, request.options),
        short: ago.short_time_ago_in(&subject, &reference, &request.locale),
    })
}
