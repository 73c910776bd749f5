//! Tracing subscriber setup for the binary.

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, VERBOSE_LOG_LEVEL};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `info`, or `debug`
/// when `verbose` is set. Logs are written to stderr so that stdout only
/// carries the presented image.
pub fn init(log_format: &str, verbose: bool) {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    // A subscriber may already be installed (e.g. in tests); keep the existing one.
    let _ = if log_format == LOG_FORMAT_JSON {
        builder.json().try_init()
    } else {
        builder.with_target(false).try_init()
    };
}
