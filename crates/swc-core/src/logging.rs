//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;
use crate::config::defaults::DEFAULT_LOG_LEVEL;
use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize structured logging for the standardizer.
///
/// Reads the `SWC_LOG` environment variable for per-crate log levels,
/// e.g. `SWC_LOG=swc_qc=debug,swc_graph=info`. Falls back to `info`.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string (for embedding callers
/// that carry their own `observability.log_level`).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
        install(filter);
    });
}

/// Initialize tracing from configuration. `SWC_LOG`, when set, still wins
/// over `observability.log_level`.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    if std::env::var_os(LOG_ENV_VAR).is_some() {
        init_tracing();
    } else {
        init_tracing_with_filter(&config.log_level);
    }
}

fn install(filter: EnvFilter) {
    // try_init: another subscriber may already be installed by the host.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}
