//! Tracing subscriber setup.

use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GAZETTE_LOG";

/// Filter used when `GAZETTE_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber filtered by `GAZETTE_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
