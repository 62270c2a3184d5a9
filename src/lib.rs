pub mod config;
pub mod error;
pub mod gallery;
pub mod inquiry;
pub mod logging;
pub mod metrics;
pub mod pricing;
pub mod repository;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` wins over the configured level. Can only be called once.
pub fn init_tracing(logging: &crate::config::LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
