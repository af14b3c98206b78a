//! High-level API for libago.
//!
//! [`TimeAgo`] bundles a translation catalog, a date renderer and a default
//! locale so callers only pass instants.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use libago::TimeAgo;
//!
//! let ago = TimeAgo::new();
//! let reference = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
//! let subject = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
//!
//! assert_eq!(ago.time_ago(&subject, &reference), "3 hours ago");
//! assert_eq!(ago.short_time_ago(&subject, &reference), "3h");
//! ```

use crate::calendar::Elapsed;
use crate::catalog::{Catalog, TranslationStore};
use crate::config::Config;
use crate::error::{AgoError, Result};
use crate::format::{self, TimeAgoOptions};
use crate::locale::LocaleCode;
use crate::render::{ChronoDateRenderer, DateRenderer};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt;
use std::path::PathBuf;

/// Relative-time formatter with its collaborators wired in.
///
/// # Examples
///
/// ## Explicit locale per call
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libago::{LocaleCode, TimeAgo};
///
/// let ago = TimeAgo::new();
/// let reference = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
/// let subject = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
///
/// let ru = LocaleCode::new("ru");
/// assert_eq!(ago.short_time_ago_in(&subject, &reference, &ru), "3д");
/// ```
///
/// ## Builder
///
/// ```
/// use libago::TimeAgo;
///
/// let ago = TimeAgo::builder()
///     .locale("pl")
///     .fallback_locales(["en"])
///     .build()
///     .unwrap();
/// assert_eq!(ago.locale().as_str(), "pl");
/// ```
pub struct TimeAgo {
    store: Box<dyn TranslationStore>,
    renderer: Box<dyn DateRenderer>,
    locale: LocaleCode,
}

impl TimeAgo {
    /// English formatter over the built-in catalogs.
    pub fn new() -> Self {
        Self {
            store: Box::new(Catalog::builtin()),
            renderer: Box::new(ChronoDateRenderer),
            locale: LocaleCode::default(),
        }
    }

    /// Creates a builder for advanced configuration.
    pub fn builder() -> TimeAgoBuilder {
        TimeAgoBuilder::new()
    }

    /// Default locale of this formatter.
    pub fn locale(&self) -> &LocaleCode {
        &self.locale
    }

    /// The translation store in use.
    pub fn store(&self) -> &dyn TranslationStore {
        self.store.as_ref()
    }

    /// Breakdown and flags for `subject` measured from `reference`.
    pub fn elapsed<Tz: TimeZone>(&self, subject: &DateTime<Tz>, reference: &DateTime<Tz>) -> Elapsed {
        Elapsed::between(subject, reference)
    }

    /// Long form in the default locale.
    pub fn time_ago<Tz: TimeZone>(&self, subject: &DateTime<Tz>, reference: &DateTime<Tz>) -> String {
        self.time_ago_with(subject, reference, &self.locale, TimeAgoOptions::default())
    }

    /// Long form in `locale`.
    pub fn time_ago_in<Tz: TimeZone>(
        &self,
        subject: &DateTime<Tz>,
        reference: &DateTime<Tz>,
        locale: &LocaleCode,
    ) -> String {
        self.time_ago_with(subject, reference, locale, TimeAgoOptions::default())
    }

    /// Long form in `locale` with explicit options.
    pub fn time_ago_with<Tz: TimeZone>(
        &self,
        subject: &DateTime<Tz>,
        reference: &DateTime<Tz>,
        locale: &LocaleCode,
        options: TimeAgoOptions,
    ) -> String {
        format::time_ago(
            subject,
            reference,
            locale,
            self.store.as_ref(),
            self.renderer.as_ref(),
            options,
        )
    }

    /// Short form in the default locale.
    pub fn short_time_ago<Tz: TimeZone>(
        &self,
        subject: &DateTime<Tz>,
        reference: &DateTime<Tz>,
    ) -> String {
        self.short_time_ago_in(subject, reference, &self.locale)
    }

    /// Short form in `locale`.
    pub fn short_time_ago_in<Tz: TimeZone>(
        &self,
        subject: &DateTime<Tz>,
        reference: &DateTime<Tz>,
        locale: &LocaleCode,
    ) -> String {
        format::short_time_ago(subject, reference, locale, self.store.as_ref())
    }

    /// Long form measured from the current instant.
    pub fn time_ago_since_now<Tz: TimeZone>(&self, subject: &DateTime<Tz>) -> String {
        self.time_ago(subject, &now_in(subject))
    }

    /// Short form measured from the current instant.
    pub fn short_time_ago_since_now<Tz: TimeZone>(&self, subject: &DateTime<Tz>) -> String {
        self.short_time_ago(subject, &now_in(subject))
    }
}

impl Default for TimeAgo {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TimeAgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeAgo")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

fn now_in<Tz: TimeZone>(subject: &DateTime<Tz>) -> DateTime<Tz> {
    Utc::now().with_timezone(&subject.timezone())
}

/// Builder for [`TimeAgo`].
///
/// Collaborators default to the built-in catalog and
/// [`ChronoDateRenderer`]. A custom store replaces the built-in catalog
/// entirely; `catalog_dir` and `fallback_locales` only apply to the
/// built-in one.
pub struct TimeAgoBuilder {
    locale: Option<String>,
    fallback_locales: Option<Vec<LocaleCode>>,
    catalog_dir: Option<PathBuf>,
    store: Option<Box<dyn TranslationStore>>,
    renderer: Option<Box<dyn DateRenderer>>,
}

impl TimeAgoBuilder {
    pub fn new() -> Self {
        Self {
            locale: None,
            fallback_locales: None,
            catalog_dir: None,
            store: None,
            renderer: None,
        }
    }

    /// Seeds the builder from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::new()
            .locale(config.locale.as_str())
            .fallback_locales(config.fallback_locales.iter().map(LocaleCode::as_str));
        if let Some(dir) = &config.catalog_dir {
            builder = builder.catalog_dir(dir.clone());
        }
        builder
    }

    /// Default locale; validated by [`build`](Self::build).
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn fallback_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_locales = Some(
            locales
                .into_iter()
                .map(|l| LocaleCode::new(l.into()))
                .collect(),
        );
        self
    }

    /// Directory of catalog files merged over the built-in catalog.
    pub fn catalog_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.catalog_dir = Some(dir.into());
        self
    }

    /// Uses `store` instead of the built-in catalog.
    pub fn catalog(mut self, store: impl TranslationStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn renderer(mut self, renderer: impl DateRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Builds the formatter.
    ///
    /// Fails when the locale tag is malformed or the catalog directory
    /// cannot be loaded.
    pub fn build(self) -> Result<TimeAgo> {
        let locale = match self.locale {
            Some(tag) => LocaleCode::parse(&tag)?,
            None => LocaleCode::default(),
        };

        let store: Box<dyn TranslationStore> = match self.store {
            Some(store) => {
                if self.catalog_dir.is_some() {
                    return Err(AgoError::config(
                        "catalog_dir cannot be combined with a custom translation store",
                        None,
                    ));
                }
                store
            }
            None => {
                let mut catalog = Catalog::builtin();
                if let Some(chain) = self.fallback_locales {
                    catalog.set_fallback_chain(chain);
                }
                if let Some(dir) = &self.catalog_dir {
                    catalog.load_dir(dir)?;
                }
                Box::new(catalog)
            }
        };

        tracing::debug!(locale = %locale, "built time-ago formatter");
        Ok(TimeAgo {
            store,
            renderer: self
                .renderer
                .unwrap_or_else(|| Box::new(ChronoDateRenderer)),
            locale,
        })
    }
}

impl Default for TimeAgoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "ago_tests.rs"]
mod tests;
