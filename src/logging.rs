//! Diagnostic logging setup.
//!
//! Events go to stderr through a `tracing-subscriber` fmt layer so stdout
//! stays reserved for the value `get` prints.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides the computed log filter.
pub const LOG_ENV_VAR: &str = "YQL_LOG";

/// Chooses the filter directive from the quiet flag, `-v` count and config.
pub fn filter_directive(quiet: bool, verbose: u8, default_level: &str) -> String {
    if quiet {
        return "off".to_string();
    }
    match verbose {
        0 => default_level.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(quiet: bool, verbose: u8, default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(quiet, verbose, default_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
