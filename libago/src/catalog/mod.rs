//! Translation catalog.
//!
//! Phrases are looked up by (locale, key). Long-form keys are message ids
//! such as `time_few_days_ago`; short-form keys are the composed templates
//! themselves (`%d_d`). A key nobody translates resolves to itself, which
//! keeps formatting infallible.
//!
//! # Lookup order
//!
//! 1. the locale tag as given (normalized to lowercase with `-`)
//! 2. its primary language subtag
//! 3. each locale of the fallback chain, in order
//!
//! # Catalog files
//!
//! Catalog files are flat string tables named after their locale
//! (`ru.toml`, `pt-br.json`). Entries from a file are merged over whatever
//! the catalog already holds for that locale.

use crate::error::{AgoError, Result};
use crate::format::{LONG_FORM_KEYS, ShortUnit, compose_key};
use crate::locale::LocaleCode;
use crate::plural::{PluralVariant, has_plural_forms};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[cfg(test)]
mod tests;

const BUILTIN: &[(&str, &str)] = &[
    ("en", include_str!("locales/en.toml")),
    ("pl", include_str!("locales/pl.toml")),
    ("ru", include_str!("locales/ru.toml")),
    ("uk", include_str!("locales/uk.toml")),
];

/// Source of localized templates.
///
/// Implementations must be cheap to query and must not fail; a missing
/// entry is reported as `None` and [`lookup`](TranslationStore::lookup)
/// turns it into the key itself.
pub trait TranslationStore: Send + Sync {
    /// Returns the template stored for `key`, if any locale in the lookup
    /// order provides one.
    fn get(&self, locale: &LocaleCode, key: &str) -> Option<&str>;

    /// Returns the template for `key`, or `key` itself when unresolved.
    fn lookup(&self, locale: &LocaleCode, key: &str) -> String {
        match self.get(locale, key) {
            Some(template) => template.to_string(),
            None => {
                tracing::debug!(locale = %locale, key, "no translation, using key");
                key.to_string()
            }
        }
    }
}

/// Strings for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a flat TOML table of `key = "template"` pairs.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str::<HashMap<String, String>>(text)
            .map(|strings| Self { strings })
            .map_err(|e| AgoError::catalog_with_source("Failed to parse TOML catalog", None, e))
    }

    /// Parses a flat JSON object of `"key": "template"` pairs.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str::<HashMap<String, String>>(text)
            .map(|strings| Self { strings })
            .map_err(|e| AgoError::catalog_with_source("Failed to parse JSON catalog", None, e))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    fn extend(&mut self, other: LocaleStrings) {
        self.strings.extend(other.strings);
    }
}

/// In-memory translation catalog with a locale fallback chain.
///
/// Immutable once built, so it can be shared between threads freely.
///
/// # Example
///
/// ```
/// use libago::LocaleCode;
/// use libago::catalog::{Catalog, LocaleStrings, TranslationStore};
///
/// let mut catalog = Catalog::new();
/// let mut de = LocaleStrings::new();
/// de.insert("time_one_day_ago", "gestern");
/// catalog.add_locale("de", de);
///
/// let de = LocaleCode::new("de-AT");
/// assert_eq!(catalog.get(&de, "time_one_day_ago"), Some("gestern"));
/// assert_eq!(catalog.lookup(&de, "%dd"), "%dd");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: HashMap<String, LocaleStrings>,
    fallback_chain: Vec<String>,
}

impl Catalog {
    /// Creates an empty catalog without fallbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the bundled `en`, `pl`, `ru` and `uk`
    /// tables, falling back to `en`.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (locale, text) in BUILTIN {
            match LocaleStrings::from_toml_str(text) {
                Ok(strings) => catalog.add_locale(*locale, strings),
                Err(e) => tracing::error!(locale, error = %e, "bundled catalog is malformed"),
            }
        }
        catalog.set_fallback_chain(vec![LocaleCode::new("en")]);
        catalog
    }

    /// Replaces the strings of `locale`.
    pub fn add_locale(&mut self, locale: impl AsRef<str>, strings: LocaleStrings) {
        self.locales.insert(normalize(locale.as_ref()), strings);
    }

    /// Merges `strings` over the existing strings of `locale`.
    pub fn merge_locale(&mut self, locale: impl AsRef<str>, strings: LocaleStrings) {
        self.locales
            .entry(normalize(locale.as_ref()))
            .or_default()
            .extend(strings);
    }

    /// Sets the locales tried, in order, when the requested one misses.
    pub fn set_fallback_chain(&mut self, chain: Vec<LocaleCode>) {
        self.fallback_chain = chain.iter().map(|l| normalize(l.as_str())).collect();
    }

    pub fn fallback_chain(&self) -> &[String] {
        &self.fallback_chain
    }

    /// Loads `<locale>.toml` and `<locale>.json` files from `dir` and merges
    /// them into the catalog.
    ///
    /// Returns the number of files loaded. Files with other extensions and
    /// subdirectories are ignored.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Err(AgoError::catalog(
                "Catalog directory does not exist".to_string(),
                Some(dir.display().to_string()),
            ));
        }

        let mut loaded = 0;
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                AgoError::catalog_with_source(
                    "Failed to read catalog directory".to_string(),
                    Some(dir.display().to_string()),
                    e,
                )
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            let (Some(locale), Some(ext)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.extension().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            if ext != "toml" && ext != "json" {
                continue;
            }

            let text = fs::read_to_string(path).map_err(|e| {
                AgoError::catalog_with_source(
                    "Failed to read catalog file".to_string(),
                    Some(path.display().to_string()),
                    e,
                )
            })?;
            let parsed = if ext == "toml" {
                LocaleStrings::from_toml_str(&text)
            } else {
                LocaleStrings::from_json_str(&text)
            };
            let strings = parsed.map_err(|e| with_path(e, path))?;

            tracing::debug!(locale, entries = strings.len(), path = %path.display(), "loaded catalog file");
            self.merge_locale(locale, strings);
            loaded += 1;
        }

        tracing::info!(dir = %dir.display(), files = loaded, "loaded catalog directory");
        Ok(loaded)
    }

    /// All locale tags with at least one table, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Strings stored directly under `locale`, without fallback.
    pub fn strings(&self, locale: &str) -> Option<&LocaleStrings> {
        self.locales.get(&normalize(locale))
    }

    /// Every key the formatters may request for `locale`, sorted.
    pub fn required_keys(locale: &LocaleCode) -> Vec<String> {
        let variants: &[PluralVariant] = if has_plural_forms(locale) {
            &PluralVariant::ALL
        } else {
            &[PluralVariant::Many]
        };

        let mut keys: Vec<String> = LONG_FORM_KEYS.iter().map(|k| k.to_string()).collect();
        for unit in ShortUnit::ALL {
            for variant in variants {
                keys.push(compose_key(unit, *variant));
            }
        }
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Required keys that `locale` cannot resolve, even through fallback.
    pub fn missing_keys(&self, locale: &LocaleCode) -> Vec<String> {
        Self::required_keys(locale)
            .into_iter()
            .filter(|key| self.get(locale, key).is_none())
            .collect()
    }
}

impl TranslationStore for Catalog {
    fn get(&self, locale: &LocaleCode, key: &str) -> Option<&str> {
        let tag = normalize(locale.as_str());
        let language = locale.language();

        std::iter::once(tag.as_str())
            .chain(std::iter::once(language.as_str()))
            .chain(self.fallback_chain.iter().map(String::as_str))
            .find_map(|candidate| self.locales.get(candidate).and_then(|ls| ls.get(key)))
    }
}

fn normalize(tag: &str) -> String {
    tag.replace('_', "-").to_ascii_lowercase()
}

fn with_path(err: AgoError, path: &Path) -> AgoError {
    match err {
        AgoError::Catalog {
            message, source, ..
        } => AgoError::Catalog {
            message,
            path: Some(path.display().to_string()),
            source,
        },
        other => other,
    }
}
