//! Log filter selection.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "stockdata_server=info,stockdata_api=info,tower_http=info";

/// Builds the log filter from a `RUST_LOG` value, falling back to
/// [`DEFAULT_LOG_FILTER`] when it is missing, blank, or unparsable.
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
