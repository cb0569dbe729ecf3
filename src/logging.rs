//! Tracing subscriber setup.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber with
/// - a pretty console format (when LOG_FORMAT != "json")
/// - one JSON object per line (when LOG_FORMAT = "json")
///
/// Filtering is read from the `RUST_LOG` environment variable, with a
/// fallback to INFO for this crate.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(Level::INFO.into())
            .parse("crimedb_init=info")
            .expect("Invalid filter directive")
    });

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    if log_format == "json" {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
