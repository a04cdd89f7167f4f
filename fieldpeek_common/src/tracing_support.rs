//! Logging setup shared by our binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// The filter we use when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Install a global `tracing` subscriber configured from `RUST_LOG`.
///
/// Everything goes to standard error, because standard output belongs to the
/// report. Calling this more than once is harmless; later calls are ignored.
pub fn initialize_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

#[test]
fn initialize_twice() {
    initialize_tracing();
    initialize_tracing();
}
