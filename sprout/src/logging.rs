//! Tracing setup. Logs go to stderr so the stdout transcript stays clean.

use std::io;

use eyre::{Result, eyre};
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| eyre!("Failed to create tracing filter: {e}"))?;

    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()
        .map_err(|e| eyre!("Failed to initialize tracing: {e}"))?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "tracing initialized");
    Ok(())
}
