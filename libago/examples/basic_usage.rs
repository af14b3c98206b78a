//! Basic usage example for the Ago library.
//!
//! This example demonstrates the high-level API for formatting relative
//! times in several locales.
//!
//! Run with: cargo run --example basic_usage

use chrono::{Duration, Utc};
use libago::{LocaleCode, TimeAgo};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Ago Library - Basic Usage Example\n");

    let ago = TimeAgo::new();
    let now = Utc::now();

    let spans = [
        ("just now", Duration::seconds(1)),
        ("a few minutes", Duration::minutes(7)),
        ("an hour", Duration::minutes(70)),
        ("a few hours", Duration::hours(5)),
        ("a few days", Duration::days(3)),
        ("a few weeks", Duration::weeks(3)),
        ("a year", Duration::days(400)),
    ];

    for tag in ["en", "pl", "ru", "uk"] {
        let locale = LocaleCode::new(tag);
        println!("Locale: {}", locale);
        for (label, span) in &spans {
            let subject = now - *span;
            println!(
                "  {:<14} {:<24} {}",
                label,
                ago.time_ago_in(&subject, &now, &locale),
                ago.short_time_ago_in(&subject, &now, &locale)
            );
        }
        println!();
    }

    // Builder with a validated locale and a fallback chain
    let polish = TimeAgo::builder()
        .locale("pl-PL")
        .fallback_locales(["en"])
        .build()?;
    let subject = now - Duration::days(2);
    println!("✓ pl-PL: {}", polish.time_ago(&subject, &now));

    // The breakdown behind the phrases
    let elapsed = ago.elapsed(&(now - Duration::days(45)), &now);
    println!(
        "✓ 45 days: {} months, {} weeks, {} days",
        elapsed.delta.months, elapsed.delta.weeks_of_year, elapsed.delta.days
    );

    Ok(())
}
