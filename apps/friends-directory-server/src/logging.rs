use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. `RUST_LOG`, when set, wins over the
/// configured level.
///
/// # Errors
/// Fails on an unparsable level or when a subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.level)
            .with_context(|| format!("invalid log level '{}'", cfg.level))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false);
            registry.with(layer).try_init()
        }
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init(),
    };
    installed.context("failed to install tracing subscriber")
}
