// ABOUTME: Tracing subscriber setup for the server process
// ABOUTME: RUST_LOG controls verbosity, defaulting to info

use tracing_subscriber::EnvFilter;

pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}
