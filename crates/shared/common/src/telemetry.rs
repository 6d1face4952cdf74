//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogConfig, DEFAULT_LOG_LEVEL};

/// Install the global fmt subscriber.
///
/// `verbose` forces `debug`. An invalid filter directive falls back to the
/// default level. Calling this twice is a no-op.
pub fn init_tracing(config: &LogConfig, verbose: bool) {
    let (filter, rejected) = if verbose {
        (EnvFilter::new("debug"), None)
    } else {
        match EnvFilter::try_new(&config.level) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(e)),
        }
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if let Some(e) = rejected {
        tracing::warn!(level = %config.level, error = %e, "Invalid log filter, using default");
    }
}
