use crate::context::AppContext;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::IsTerminal;

/// Trait for output formatting that can be TTY-aware or plain text
pub trait OutputFormatter: Send + Sync {
    /// Print a success message
    fn success(&self, message: &str);

    /// Print an error message
    fn error(&self, message: &str);

    /// Print a warning message
    fn warning(&self, message: &str);

    /// Emphasize a phrase printed on its own
    fn highlight(&self, text: &str) -> String;
}

/// TTY-aware formatter with colors
pub struct TtyFormatter;

impl OutputFormatter for TtyFormatter {
    fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message);
    }

    fn warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message);
    }

    fn highlight(&self, text: &str) -> String {
        text.bold().to_string()
    }
}

/// Plain text formatter for non-TTY output (piped, scripted)
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, message: &str) {
        println!("✓ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }

    fn warning(&self, message: &str) {
        println!("⚠ {}", message);
    }

    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Create the appropriate formatter for the color choice and environment
pub fn create_formatter(color: ColorChoice) -> Box<dyn OutputFormatter> {
    match color {
        ColorChoice::Always => Box::new(TtyFormatter),
        ColorChoice::Never => Box::new(PlainFormatter),
        ColorChoice::Auto => {
            if std::env::var("NO_COLOR").is_ok() {
                return Box::new(PlainFormatter);
            }

            // stdout OR stderr, since we write to both
            if std::io::stdout().is_terminal() || std::io::stderr().is_terminal() {
                Box::new(TtyFormatter)
            } else {
                Box::new(PlainFormatter)
            }
        }
    }
}

/// Print a success message with optional coloring
pub fn success(ctx: &AppContext, message: &str) {
    create_formatter(ctx.color).success(message);
}

/// Print an error message with optional coloring
pub fn error(ctx: &AppContext, message: &str) {
    create_formatter(ctx.color).error(message);
}

/// Print a warning message with optional coloring
pub fn warning(ctx: &AppContext, message: &str) {
    create_formatter(ctx.color).warning(message);
}

/// Color output control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<&str> for ColorChoice {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" | "yes" | "true" => ColorChoice::Always,
            "never" | "no" | "false" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        };
        write!(f, "{}", s)
    }
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable pretty format
    Pretty,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            _ => OutputFormat::Pretty,
        }
    }
}

/// Trait for types that can be formatted for CLI output
pub trait Formattable: Serialize {
    /// Format the type for pretty (human-readable) output
    fn format_pretty(&self) -> String;
}

/// Format a single item for output
pub fn format_output<T: Formattable>(item: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Pretty => Ok(item.format_pretty()),
        OutputFormat::Json => serde_json::to_string_pretty(item)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(item).map_err(|e| format!("Failed to serialize to YAML: {}", e))
        }
    }
}

/// Format a vector of items for output
pub fn format_output_vec<T: Formattable>(
    items: &[T],
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Pretty => {
            let output: Vec<String> = items.iter().map(|item| item.format_pretty()).collect();
            Ok(output.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(items)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(items).map_err(|e| format!("Failed to serialize to YAML: {}", e))
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
