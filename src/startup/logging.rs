//! Diagnostic logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Variable holding the log filter, e.g. `PCA_LOG=pca_region=debug`.
pub const ENV_LOG: &str = "PCA_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter from `PCA_LOG`, or `warn` when unset or unparsable.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Logs go to stderr; stdout is reserved for
/// command output.
///
/// Calling it twice is harmless: the second install is ignored.
pub fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(log_filter())
        .with(format)
        .try_init();
}
