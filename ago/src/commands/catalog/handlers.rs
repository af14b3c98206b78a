use super::*;
use crate::context::AppContext;
use crate::format::{self, OutputFormat, format_output_vec};

/// Handle the catalog list subcommand
pub fn handle_catalog_list(ctx: &AppContext, fmt: OutputFormat) {
    let catalog = match load_catalog(&ctx.config) {
        Ok(catalog) => catalog,
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    };

    let summaries = list_locales(&catalog);
    if summaries.is_empty() {
        println!("No locales loaded.");
        return;
    }

    match fmt {
        OutputFormat::Pretty => {
            let table = tabled::Table::new(&summaries).to_string();
            println!("{}", table);
        }
        _ => match format_output_vec(&summaries, fmt) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                format::error(ctx, &e);
                std::process::exit(1);
            }
        },
    }
}

/// Handle the catalog check subcommand
///
/// Checks `locale`, or every loaded locale when none is given, and exits
/// with status 1 when any required key is missing.
pub fn handle_catalog_check(ctx: &AppContext, locale: Option<&str>, fmt: OutputFormat) {
    let catalog = match load_catalog(&ctx.config) {
        Ok(catalog) => catalog,
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    };

    let locales: Vec<LocaleCode> = match locale {
        Some(tag) => match LocaleCode::parse(tag) {
            Ok(locale) => vec![locale],
            Err(e) => {
                format::error(ctx, &e.to_string());
                std::process::exit(1);
            }
        },
        None => catalog.locales().into_iter().map(LocaleCode::new).collect(),
    };

    let reports: Vec<CoverageReport> = locales
        .iter()
        .map(|locale| check_locale(&catalog, locale))
        .collect();

    match format_output_vec(&reports, fmt) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }

    let incomplete = reports.iter().filter(|r| !r.is_complete()).count();
    if incomplete > 0 {
        format::warning(ctx, &format!("{} locale(s) have missing keys", incomplete));
        std::process::exit(1);
    }
}
