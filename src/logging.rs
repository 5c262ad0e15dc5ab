//! Tracing subscriber setup for binaries and tests that embed the engine.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs a global fmt subscriber.
///
/// The filter comes from `filter`, else `RUST_LOG`, else `info`. Returns
/// `false` when a global subscriber was already installed.
pub fn init(filter: Option<&str>) -> bool {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|error| {
            eprintln!("termpage: invalid log filter {directives:?}: {error}");
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
