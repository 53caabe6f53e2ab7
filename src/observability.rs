use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Events go to stderr so that tables printed on stdout stay
/// machine-readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("meter_usage=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
