//! Diagnostic logging to stderr
//!
//! `RUST_LOG` wins when set; otherwise `-v` flags pick the level.

use crate::context::VerbosityLevel;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a verbosity level
pub fn level_directive(verbosity: VerbosityLevel) -> &'static str {
    match verbosity {
        VerbosityLevel::Normal => "warn",
        VerbosityLevel::Verbose => "info",
        VerbosityLevel::VeryVerbose => "debug",
        VerbosityLevel::Trace => "trace",
    }
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: VerbosityLevel) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity >= VerbosityLevel::VeryVerbose),
        )
        .with(env_filter)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
