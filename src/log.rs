//! Logging initialization.

use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Sets up tracing output. Silent by default so the interactive prompts stay
/// clean; `--verbose` or `RUST_LOG` turn diagnostics on.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "cambio=debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time())
        .with(filter)
        .init();
}
