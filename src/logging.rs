//! Tracing setup for the CLI.
//!
//! Logs go to stderr so stdout carries nothing but the rendered prompt.
//! Priority: `RUST_LOG` env var > `--log-level` CLI arg > default "warn".

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter when neither `RUST_LOG` nor `--log-level` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter used by [`init`].
pub fn filter(cli_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli_level))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(cli_level: &str) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter(cli_level))
        .try_init();
}
