//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs a formatted stderr subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive` (e.g. `"fynd=info"`).
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
