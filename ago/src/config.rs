//! Config file management for the `ago config` commands
//!
//! The file holds a [`libago::Config`]. It is TOML unless its extension
//! says YAML.

use libago::config::{Style, TimeZoneChoice};
use libago::{Config, LocaleCode};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Keys accepted by `config get` and `config set`
pub const CONFIG_KEYS: [&str; 5] = [
    "locale",
    "fallback_locales",
    "catalog_dir",
    "timezone",
    "style",
];

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load configuration from a file, without environment overrides
pub fn load_config(path: &Path) -> Result<Config, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

    let parsed = if is_yaml(path) {
        Config::from_yaml_str(&contents)
    } else {
        Config::from_toml_str(&contents)
    };
    parsed.map_err(|e| format!("Failed to parse config file: {}", e))
}

/// Save configuration to a file
pub fn save_config(config: &Config, path: &Path) -> Result<(), String> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let text = if is_yaml(path) {
        serde_yaml::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))?
    } else {
        toml::to_string_pretty(config).map_err(|e| format!("Failed to serialize config: {}", e))?
    };

    fs::write(path, text).map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}

/// Get the config file path, respecting AGO_CONFIG environment variable
pub fn get_config_path() -> PathBuf {
    if let Ok(config_path) = env::var("AGO_CONFIG") {
        return PathBuf::from(config_path);
    }

    // Default to ~/.config/ago/config.toml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("ago").join("config.toml")
    } else {
        // Fallback to current directory
        PathBuf::from("config.toml")
    }
}

/// Initialize a new config file with default values
pub fn init_config(config_path: &Path) -> Result<(), String> {
    if config_path.exists() {
        return Err(
            "Config file already exists. Use 'ago config set' to edit or 'rm' to recreate."
                .to_string(),
        );
    }

    save_config(&Config::default(), config_path)
}

/// Read one key of an in-memory configuration
pub fn config_value(config: &Config, key: &str) -> Result<String, String> {
    match key {
        "locale" => Ok(config.locale.to_string()),
        "fallback_locales" => Ok(config
            .fallback_locales
            .iter()
            .map(LocaleCode::as_str)
            .collect::<Vec<_>>()
            .join(",")),
        "catalog_dir" => Ok(config
            .catalog_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "timezone" => Ok(match config.timezone {
            TimeZoneChoice::Local => "local".to_string(),
            TimeZoneChoice::Utc => "utc".to_string(),
        }),
        "style" => Ok(match config.style {
            Style::Long => "long".to_string(),
            Style::Short => "short".to_string(),
        }),
        _ => Err(unknown_key(key)),
    }
}

/// Set a configuration value by key
pub fn set_config_value(config_path: &Path, key: &str, value: &str) -> Result<(), String> {
    // Load existing config or create default
    let mut config = if config_path.exists() {
        load_config(config_path)?
    } else {
        Config::default()
    };

    apply_config_value(&mut config, key, value)?;
    save_config(&config, config_path)
}

/// Validate `value` and store it under `key`
pub fn apply_config_value(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    match key {
        "locale" => {
            config.locale = LocaleCode::parse(value).map_err(|e| e.to_string())?;
        }
        "fallback_locales" => {
            config.fallback_locales = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| LocaleCode::parse(s).map_err(|e| e.to_string()))
                .collect::<Result<Vec<_>, _>>()?;
        }
        "catalog_dir" => {
            config.catalog_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        "timezone" => {
            config.timezone = match value.to_lowercase().as_str() {
                "local" => TimeZoneChoice::Local,
                "utc" => TimeZoneChoice::Utc,
                _ => {
                    return Err(format!(
                        "Invalid timezone value '{}': must be local or utc",
                        value
                    ));
                }
            };
        }
        "style" => {
            config.style = match value.to_lowercase().as_str() {
                "long" => Style::Long,
                "short" => Style::Short,
                _ => {
                    return Err(format!(
                        "Invalid style value '{}': must be long or short",
                        value
                    ));
                }
            };
        }
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    )
}

/// Open the config file in the user's editor
pub fn edit_config(config_path: &Path) -> Result<(), String> {
    let editor = env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .map_err(|_| "No editor found. Set EDITOR or VISUAL environment variable.".to_string())?;

    // Create config file if it doesn't exist
    if !config_path.exists() {
        save_config(&Config::default(), config_path)?;
    }

    let status = Command::new(editor)
        .arg(config_path)
        .status()
        .map_err(|e| format!("Failed to open editor: {}", e))?;

    if !status.success() {
        return Err("Editor exited with non-zero status".to_string());
    }

    // Reject an edit that no longer parses
    load_config(config_path).map(|_| ())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
