use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::config::{self, DEFAULT_LOG_LEVEL};

/// Logs go to stderr, stdout is reserved for the result.
pub(crate) fn init() -> Result<()> {
    let config = config::get();
    let (filter, valid) = filter(config.get_log_level());

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry().with(fmt_layer).with(filter).try_init()?;

    if !valid {
        warn!(
            log_level = config.get_log_level(),
            fallback = DEFAULT_LOG_LEVEL,
            "invalid log filter, using fallback"
        );
    }
    info!(log_level = config.get_log_level(), "telemetry initialized");
    Ok(())
}

/// An unparsable filter falls back to the default level instead of failing.
fn filter(log_level: &str) -> (EnvFilter, bool) {
    match EnvFilter::try_new(log_level) {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(DEFAULT_LOG_LEVEL), false),
    }
}
