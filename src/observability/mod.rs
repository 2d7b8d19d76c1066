//! Tracing initialization and subscriber setup.
//!
//! The core instruments itself with `tracing` spans and events; this module
//! installs a subscriber so a host that has none still gets output. Hosts
//! with their own subscriber simply skip [`init_tracing`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes the tracing subscriber from configuration.
///
/// Builds a registry with an [`EnvFilter`] from `config.trace_level`
/// (default `"info"`) and a formatting layer writing to stderr.
///
/// # Initialization Behavior
///
/// - Idempotent: safe to call multiple times, only the first call takes
///   effect
/// - Never fails: a subscriber installed elsewhere wins silently,
///   observability is optional
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
