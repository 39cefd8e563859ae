use tracing_subscriber::EnvFilter;

mod stress;

/// Installs a test subscriber once; `RUST_LOG=mola_mailbox=trace` shows the events.
pub(super) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
