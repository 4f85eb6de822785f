//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spelling_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding per-target filter directives.
pub const LOG_ENV_VAR: &str = "SPELLING_LOG";

/// Initialize the tracing subscriber with default settings.
///
/// Reads `SPELLING_LOG` for filtering, e.g. `SPELLING_LOG=spelling_storage=debug`.
/// Falls back to `info` if unset or invalid. Idempotent.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize the tracing subscriber from config.
///
/// `SPELLING_LOG` still wins over `config.log_level` when set.
/// Only the first call installs a subscriber.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.json_logs {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };

        // Another subscriber (e.g. from the host application) keeps priority.
        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
