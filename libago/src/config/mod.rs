//! Library configuration.
//!
//! Defaults are layered under an optional TOML or YAML file and `AGO_*`
//! environment variables, in that order.

use crate::error::{AgoError, Result};
use crate::locale::LocaleCode;
use config::{Config as ConfigRs, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Locale used when a call does not name one.
    #[serde(default)]
    pub locale: LocaleCode,

    /// Catalog fallback chain.
    #[serde(default = "default_fallback_locales")]
    pub fallback_locales: Vec<LocaleCode>,

    /// Directory of extra `<locale>.toml` / `<locale>.json` catalogs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,

    /// Zone in which zone-less inputs are read.
    #[serde(default)]
    pub timezone: TimeZoneChoice,

    /// Default output style.
    #[serde(default)]
    pub style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: LocaleCode::default(),
            fallback_locales: default_fallback_locales(),
            catalog_dir: None,
            timezone: TimeZoneChoice::default(),
            style: Style::default(),
        }
    }
}

fn default_fallback_locales() -> Vec<LocaleCode> {
    vec![LocaleCode::new("en")]
}

/// Time zone used for reading and printing instants.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneChoice {
    #[default]
    Local,

    Utc,
}

/// Phrase style.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `3 days ago`
    #[default]
    Long,

    /// `3d`
    Short,
}

impl Config {
    /// Parses a `Config` from a YAML string.
    ///
    /// This function is primarily used for testing.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Self::from_str_with_format(s, FileFormat::Yaml)
    }

    /// Parses a `Config` from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Self::from_str_with_format(s, FileFormat::Toml)
    }

    fn from_str_with_format(s: &str, format: FileFormat) -> Result<Self> {
        let builder = ConfigRs::builder()
            // Add default values
            .add_source(Self::defaults()?)
            .add_source(File::from_str(s, format));

        Self::from_builder(builder, None)
    }

    /// Loads a `Config` from an optional file path, then applies `AGO_*`
    /// environment variables.
    ///
    /// The file format follows the extension (`.toml`, `.yaml`, `.yml`).
    /// When `path` is `None` only defaults and the environment are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigRs::builder().add_source(Self::defaults()?);

        if let Some(p) = path {
            tracing::debug!(path = %p.display(), "loading configuration file");
            builder = builder.add_source(File::from(p).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("AGO")
                .list_separator(",")
                .with_list_parse_key("fallback_locales")
                .try_parsing(true),
        );

        Self::from_builder(builder, path)
    }

    fn defaults() -> Result<ConfigRs> {
        ConfigRs::try_from(&Config::default()).map_err(|e| {
            AgoError::config_with_source("Failed to build default configuration", None, e)
        })
    }

    /// Creates a `Config` from a `config::ConfigBuilder`.
    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: Option<&Path>,
    ) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                AgoError::config_with_source(
                    "Failed to deserialize configuration".to_string(),
                    path.map(|p| p.display().to_string()),
                    e,
                )
            })
    }
}
