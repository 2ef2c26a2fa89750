//! Tracing setup for applications embedding the template engine.
//!
//! The library crates only emit `tracing` events. Call [`init_tracing`] once
//! at startup to see them.

use curly_conf::Settings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;

/// Default filter directive: `debug` when `settings.debug` is set, `info`
/// otherwise. `RUST_LOG` takes precedence over both.
#[must_use]
pub fn default_directive(settings: &Settings) -> &'static str {
    if settings.debug {
        "debug"
    } else {
        "info"
    }
}

/// Install a global subscriber writing to stderr through a non-blocking
/// worker.
///
/// Returns a `WorkerGuard` that must be kept alive for buffered events to be
/// flushed. Fails if a global subscriber is already installed.
pub fn init_tracing(settings: &Settings) -> Result<WorkerGuard, TryInitError> {
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(settings)));
    let stderr_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_names(true)
        .with_filter(env_filter);

    Registry::default().with(stderr_layer).try_init()?;

    Ok(guard)
}
