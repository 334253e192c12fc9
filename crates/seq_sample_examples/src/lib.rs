#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

/// Initializes a fmt subscriber for the example binaries.
///
/// Defaults to `info` when `RUST_LOG` is unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
