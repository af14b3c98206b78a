use super::*;
use crate::context::AppContext;
use crate::format::{self, OutputFormat, create_formatter, format_output};

/// Flags of `ago since` and `ago breakdown` as given on the command line
#[derive(Debug, Default)]
pub struct SinceFlags<'a> {
    pub subject: &'a str,
    pub reference: Option<&'a str>,
    pub locale: Option<&'a str>,
    pub short: bool,
    pub long: bool,
    pub numeric_dates: bool,
    pub numeric_times: bool,
}

/// Merge CLI flags over the configuration
pub fn build_request(ctx: &AppContext, flags: &SinceFlags) -> Result<SinceRequest, String> {
    Ok(SinceRequest {
        subject: flags.subject.to_string(),
        reference: flags.reference.map(str::to_string),
        locale: ctx.locale(flags.locale)?,
        style: ctx.style(flags.short, flags.long),
        options: TimeAgoOptions {
            numeric_dates: flags.numeric_dates,
            numeric_times: flags.numeric_times,
        },
    })
}

fn run_since(ctx: &AppContext, flags: &SinceFlags) -> Result<PhraseReport, String> {
    let request = build_request(ctx, flags)?;
    let ago = ctx.time_ago()?;
    phrase(&ago, ctx.config.timezone, &request)
}

fn run_breakdown(ctx: &AppContext, flags: &SinceFlags) -> Result<BreakdownReport, String> {
    let request = build_request(ctx, flags)?;
    let ago = ctx.time_ago()?;
    breakdown(&ago, ctx.config.timezone, &request)
}

/// Handle the since subcommand
pub fn handle_since(ctx: &AppContext, flags: &SinceFlags, fmt: OutputFormat) {
    match run_since(ctx, flags) {
        Ok(report) => match fmt {
            OutputFormat::Pretty => {
                println!("{}", create_formatter(ctx.color).highlight(&report.text));
            }
            _ => match format_output(&report, fmt) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    format::error(ctx, &format!("formatting output: {}", e));
                    std::process::exit(1);
                }
            },
        },
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

/// Handle the breakdown subcommand
pub fn handle_breakdown(ctx: &AppContext, flags: &SinceFlags, fmt: OutputFormat) {
    match run_breakdown(ctx, flags).and_then(|report| format_output(&report, fmt)) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}
