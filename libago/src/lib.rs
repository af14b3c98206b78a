//! Ago - Relative Time Formatting Library
//!
//! Ago turns the distance between two instants into a short human phrase
//! such as `3 days ago`, `вчера` or `5h`.
//!
//! # Quick Start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use libago::TimeAgo;
//!
//! let ago = TimeAgo::new();
//! let reference = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
//!
//! let subject = Utc.with_ymd_and_hms(2024, 3, 10, 11, 58, 0).unwrap();
//! assert_eq!(ago.time_ago(&subject, &reference), "2 minutes ago");
//! assert_eq!(ago.short_time_ago(&subject, &reference), "2m");
//!
//! // Older than a week: the calendar date is shown instead
//! let subject = Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap();
//! assert_eq!(ago.time_ago(&subject, &reference), "10 February");
//! ```
//!
//! # Features
//!
//! - **Two styles**: a long phrase and a compact `<number><unit>` token
//! - **Slavic plurals**: `ru` and `uk` pick one of three templates per unit
//! - **Catalogs**: built-in `en`, `pl`, `ru` and `uk`, extensible from TOML
//!   or JSON files
//! - **Calendar aware**: months and years follow the calendar, in the
//!   wall-clock time of the instants' zone
//!
//! # Main Types
//!
//! - [`TimeAgo`] - Main entry point
//! - [`TimeAgoBuilder`] - Builder for locale, catalogs and renderer
//! - [`LocaleCode`] - Locale tag
//! - [`Elapsed`] / [`CalendarDelta`] - Calendar breakdown of a span
//! - [`Config`] - Layered configuration
//!
//! # Architecture
//!
//! - **High-level API** ([`TimeAgo`]) - Recommended for most users
//! - **Low-level modules** - The breakdown, plural rules, catalogs, date
//!   rendering and phrase selection, usable on their own

#![warn(clippy::all)]

/// Returns the libago crate version.
///
/// # Examples
///
/// ```
/// let version = libago::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// High-level public API (main entry point)
mod ago;
pub use ago::{TimeAgo, TimeAgoBuilder};

// Re-export commonly used types for convenience
pub use calendar::{CalendarDelta, Elapsed, earlier_of, later_of};
pub use catalog::{Catalog, TranslationStore};
pub use config::Config;
pub use error::{AgoError, Result};
pub use format::TimeAgoOptions;
pub use locale::LocaleCode;

// Low-level implementation modules
#[doc(hidden)]
pub mod calendar;
#[doc(hidden)]
pub mod catalog;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod error;
pub mod format;
#[doc(hidden)]
pub mod locale;
#[doc(hidden)]
pub mod plural;
pub mod render;
