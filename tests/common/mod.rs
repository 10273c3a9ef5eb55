//! Test utilities for the crawl-targets test suite

/// Installs a tracing subscriber so registry mutation logs surface when
/// tests run with `--nocapture`. Safe to call from every test; only the
/// first call installs.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
