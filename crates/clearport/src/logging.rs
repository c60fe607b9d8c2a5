//! Tracing setup for binaries and long-running embedders.
//!
//! The library itself only emits `tracing` events (plus `log` records
//! in the db layer); hosts call [`init`] once at startup to get both
//! onto stderr, filtered via `RUST_LOG`.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global subscriber reading the `RUST_LOG` filter, with
/// `log` records bridged into tracing. Safe to call more than once;
/// later calls are no-ops.
pub fn init() {
    let _ = tracing_log::LogTracer::init();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
