//! Locale identifiers.
//!
//! A [`LocaleCode`] is a short tag such as `en`, `ru` or `pt-BR`. Only its
//! primary language subtag matters for pluralization; the full tag is tried
//! first when looking up catalog entries.

use crate::error::{AgoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;


/// Locale tag used to pick translations and plural rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Wraps a tag without validating it.
    ///
    /// Unknown or empty tags are harmless: they miss the catalog and select
    /// the no-plural branch.
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self(tag.into())
    }

    /// Validates and wraps a tag.
    ///
    /// A valid tag is one or more ASCII alphanumeric subtags separated by
    /// `-` or `_`, starting with a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::LocaleCode;
    ///
    /// assert!(LocaleCode::parse("ru").is_ok());
    /// assert!(LocaleCode::parse("pt_BR").is_ok());
    /// assert!(LocaleCode::parse("").is_err());
    /// assert!(LocaleCode::parse("en--US").is_err());
    /// ```
    pub fn parse(tag: &str) -> Result<Self> {
        let starts_with_letter = tag.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        let well_formed = tag
            .split(['-', '_'])
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));

        if starts_with_letter && well_formed {
            Ok(Self(tag.to_string()))
        } else {
            Err(AgoError::invalid_locale(tag))
        }
    }

    /// The tag exactly as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased primary language subtag (`"ru"` for `"ru-RU"`).
    pub fn language(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleCode {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for LocaleCode {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
