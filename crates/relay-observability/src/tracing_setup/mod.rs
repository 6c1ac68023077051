//! Tracing setup: structured logging with span definitions and event functions.

pub mod events;
pub mod spans;

use std::sync::Once;

use relay_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Default filter when `RELAY_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "relay=info";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Reads `RELAY_LOG` for filtering, e.g. `RELAY_LOG=relay_commerce=debug`.
/// Idempotent. If the host already installed a global subscriber, that one
/// is kept.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("RELAY_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

/// Initialize tracing at the configured `[observability] log_level`.
/// `RELAY_LOG` still wins when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env("RELAY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("relay={}", config.log_level)));
    install(filter);
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}
