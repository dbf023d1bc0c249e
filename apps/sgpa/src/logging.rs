//! # Logging
//!
//! `tracing` subscriber setup. Output goes to stderr so reports and JSON
//! on stdout stay clean.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the sgpa crates log at `level` and
/// everything else at `warn`. Calling this twice is harmless.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,sgpa={level},sgpa_core={level}")));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
