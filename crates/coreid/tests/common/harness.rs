use tracing_subscriber::EnvFilter;

/// Installs a test-writer `tracing` subscriber once per test binary.
///
/// The filter comes from `RUST_LOG` and defaults to `rvcoreid=trace` so that the read and
/// decode events are formatted, catching broken field syntax.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rvcoreid=trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
