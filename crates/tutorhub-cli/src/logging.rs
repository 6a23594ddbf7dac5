//! Console logging setup for the CLI.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging for CLI runs.
///
/// # Configuration
///
/// - **Log Level**: Controlled by `LOG_LEVEL` environment variable
///   (default: "info"), or fully overridden via `RUST_LOG`
/// - **Filtering**: sqlx filtered to warn level for cleaner output
/// - **Format**: Compact format with module targets
pub fn init_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},sqlx=warn")));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_ansi(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
