//! Diagnostic logging to stderr.

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub use tracing_subscriber::util::TryInitError;

/// Filter used when `--debug` is set and `RUST_LOG` is not.
pub const DEBUG_FILTER: &str = "warn,azkeyget=debug";

/// Filter used otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Call once, before any event is emitted.
///
/// `RUST_LOG` takes precedence over `debug`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(debug: bool) -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_env_filter(debug))
        .try_init()
}

fn build_env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { DEBUG_FILTER } else { DEFAULT_FILTER }))
}
