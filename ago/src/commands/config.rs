use crate::config;
use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libago::Config;
use serde::Serialize;

/// Configuration as shown by `config get`
#[derive(Debug, Serialize)]
pub struct ConfigDisplay {
    /// File the values were read from
    pub path: String,
    #[serde(flatten)]
    pub config: Config,
}

/// Implement Formattable for the config view to enable output formatting
impl Formattable for ConfigDisplay {
    fn format_pretty(&self) -> String {
        let mut output = format!("# {}\n", self.path);
        for key in config::CONFIG_KEYS {
            if let Ok(value) = config::config_value(&self.config, key) {
                output.push_str(&format!("{} = {}\n", key, value));
            }
        }
        output
    }
}

/// Handle the config init subcommand
pub fn handle_init(ctx: &AppContext) {
    match config::init_config(&ctx.config_path) {
        Ok(_) => {
            format::success(
                ctx,
                &format!("Initialized config file at: {}", ctx.config_path.display()),
            );
        }
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

/// Handle the config get subcommand
pub fn handle_get(ctx: &AppContext, key: Option<&str>, format: OutputFormat) {
    match key {
        Some(k) => {
            // Effective value, including environment overrides
            match config::config_value(&ctx.config, k) {
                Ok(value) => println!("{}", value),
                Err(e) => {
                    format::error(ctx, &e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            let display = ConfigDisplay {
                path: ctx.config_path.display().to_string(),
                config: ctx.config.clone(),
            };
            match format::format_output(&display, format) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    format::error(ctx, &format!("formatting output: {}", e));
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Handle the config set subcommand
pub fn handle_set(ctx: &AppContext, key: Option<&str>, value: Option<&str>) {
    match (key, value) {
        (Some(k), Some(v)) => match config::set_config_value(&ctx.config_path, k, v) {
            Ok(_) => format::success(ctx, &format!("Set {} = {}", k, v)),
            Err(e) => {
                format::error(ctx, &e);
                std::process::exit(1);
            }
        },
        (None, None) => {
            if let Err(e) = config::edit_config(&ctx.config_path) {
                format::error(ctx, &e);
                std::process::exit(1);
            }
        }
        _ => {
            format::error(
                ctx,
                "Invalid arguments. Use 'ago config set <key> <value>' or 'ago config set' to edit.",
            );
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
