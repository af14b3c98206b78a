use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod context;
mod format;
mod logging;
mod timestamp;

use commands::since::handlers::SinceFlags;

/// Ago - Relative Time Formatter
///
/// Prints how long ago something happened, as a phrase or a compact token.
#[derive(Parser, Debug)]
#[command(name = "ago")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version information
    Version,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Format how long ago a timestamp was
    Since {
        /// Timestamp: RFC 3339, YYYY-MM-DD[ HH:MM:SS] or @<unix seconds>
        subject: String,
        /// Measure from this timestamp instead of now
        #[arg(short, long)]
        reference: Option<String>,
        /// Compact form (3d, 5h)
        #[arg(short, long, conflicts_with = "long")]
        short: bool,
        /// Full phrase (3 days ago)
        #[arg(short, long)]
        long: bool,
        /// Locale tag (e.g., en, pl, ru-RU)
        #[arg(long)]
        locale: Option<String>,
        /// Request numeric dates (accepted, no effect yet)
        #[arg(long)]
        numeric_dates: bool,
        /// Request numeric times (accepted, no effect yet)
        #[arg(long)]
        numeric_times: bool,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Show the calendar breakdown behind a phrase
    Breakdown {
        /// Timestamp: RFC 3339, YYYY-MM-DD[ HH:MM:SS] or @<unix seconds>
        subject: String,
        /// Measure from this timestamp instead of now
        #[arg(short, long)]
        reference: Option<String>,
        /// Locale tag used for the phrases
        #[arg(long)]
        locale: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Inspect translation catalogs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum CatalogCommands {
    /// List loaded locales
    #[command(visible_alias = "ls")]
    List {
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Report required keys a locale cannot resolve
    Check {
        /// Locale to check (all loaded locales if omitted)
        #[arg(long)]
        locale: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Initialize configuration with default values
    Init,
    /// Get a configuration value (or display all if no key provided)
    Get {
        /// Configuration key to get (e.g., locale)
        key: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Set a configuration value (or open editor if no arguments)
    Set {
        /// Configuration key to set (e.g., style)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
    /// Edit configuration file in $EDITOR (alias for 'set' with no arguments)
    Edit,
}

fn main() {
    let cli = Cli::parse();

    let verbosity = context::VerbosityLevel::from_count(cli.verbose);
    logging::init(verbosity);

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = context::AppContext::build(format::ColorChoice::from(cli.color.as_str()));

    match cli.command {
        Commands::Version => {
            commands::version::print_version();
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init => commands::config::handle_init(&ctx),
            ConfigCommands::Get { key, format } => {
                let fmt = format::OutputFormat::from(format.as_str());
                commands::config::handle_get(&ctx, key.as_deref(), fmt);
            }
            ConfigCommands::Set { key, value } => {
                commands::config::handle_set(&ctx, key.as_deref(), value.as_deref());
            }
            ConfigCommands::Edit => {
                commands::config::handle_set(&ctx, None, None);
            }
        },
        Commands::Since {
            subject,
            reference,
            short,
            long,
            locale,
            numeric_dates,
            numeric_times,
            format,
        } => {
            let fmt = format::OutputFormat::from(format.as_str());
            let flags = SinceFlags {
                subject: &subject,
                reference: reference.as_deref(),
                locale: locale.as_deref(),
                short,
                long,
                numeric_dates,
                numeric_times,
            };
            commands::since::handlers::handle_since(&ctx, &flags, fmt);
        }
        Commands::Breakdown {
            subject,
            reference,
            locale,
            format,
        } => {
            let fmt = format::OutputFormat::from(format.as_str());
            let flags = SinceFlags {
                subject: &subject,
                reference: reference.as_deref(),
                locale: locale.as_deref(),
                ..SinceFlags::default()
            };
            commands::since::handlers::handle_breakdown(&ctx, &flags, fmt);
        }
        Commands::Catalog { command } => match command {
            CatalogCommands::List { format } => {
                let fmt = format::OutputFormat::from(format.as_str());
                commands::catalog::handlers::handle_catalog_list(&ctx, fmt);
            }
            CatalogCommands::Check { locale, format } => {
                let fmt = format::OutputFormat::from(format.as_str());
                commands::catalog::handlers::handle_catalog_check(&ctx, locale.as_deref(), fmt);
            }
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}
