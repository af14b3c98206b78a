//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables (`AGO_*`)
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::config;
use crate::format::ColorChoice;
use libago::config::Style;
use libago::{Config, LocaleCode, TimeAgo, TimeAgoBuilder};
use std::env;
use std::path::PathBuf;

/// How much diagnostic output the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VerbosityLevel {
    /// Warnings and errors only
    #[default]
    Normal,
    /// `-v`
    Verbose,
    /// `-vv`
    VeryVerbose,
    /// `-vvv` and beyond
    Trace,
}

impl VerbosityLevel {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    /// File the configuration was read from (or would be written to)
    pub config_path: PathBuf,
    /// Resolved color choice
    pub color: ColorChoice,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(cli_color: ColorChoice) -> Self {
        let config_path = config::get_config_path();
        let file = config_path.exists().then_some(config_path.as_path());

        // 1-3. Defaults, config file and AGO_* variables are layered by libago
        let config = match Config::load(file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable configuration, using defaults");
                Config::load(None).unwrap_or_default()
            }
        };

        // 4. CLI flag overrides env; Auto is clap's default so it does not
        // mask AGO_COLOR
        let color = match (cli_color, env::var("AGO_COLOR")) {
            (ColorChoice::Auto, Ok(env_color)) => ColorChoice::from(env_color.as_str()),
            (choice, _) => choice,
        };

        Self {
            config,
            config_path,
            color,
        }
    }

    /// Context over an explicit configuration, without touching the
    /// environment.
    #[cfg(test)]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            config_path: PathBuf::from("config.toml"),
            color: ColorChoice::Never,
        }
    }

    /// Locale from the CLI flag, falling back to the configured one
    pub fn locale(&self, cli_locale: Option<&str>) -> Result<LocaleCode, String> {
        match cli_locale {
            Some(tag) => LocaleCode::parse(tag).map_err(|e| e.to_string()),
            None => Ok(self.config.locale.clone()),
        }
    }

    /// Style from the CLI flags, falling back to the configured one
    pub fn style(&self, short: bool, long: bool) -> Style {
        if short {
            Style::Short
        } else if long {
            Style::Long
        } else {
            self.config.style
        }
    }

    /// Formatter over the configured catalogs
    pub fn time_ago(&self) -> Result<TimeAgo, String> {
        TimeAgoBuilder::from_config(&self.config)
            .build()
            .map_err(|e| e.to_string())
    }
}
