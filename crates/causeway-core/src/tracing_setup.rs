//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV;

static INIT: Once = Once::new();

/// Initialize the Causeway tracing/logging system.
///
/// Reads the `CAUSEWAY_LOG` environment variable for per-target log levels,
/// e.g. `CAUSEWAY_LOG=causeway_suggest=debug,causeway_graph=info`.
/// Falls back to `default_directive` when unset or invalid.
/// Output goes to stderr so rendered results on stdout stay clean.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

/// Map a `-v` count to a default filter directive.
pub fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

