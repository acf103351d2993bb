//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Honours `RUST_LOG`; defaults to `info`. Calling it twice is harmless
/// (the second install is ignored).
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();
}
