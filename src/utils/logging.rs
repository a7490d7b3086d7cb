use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `default_level`. Logs go to stderr so
/// command output on stdout stays machine readable. Calling this more than
/// once keeps the first subscriber.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .try_init();
}

/// Log a Cloudflare API call
pub fn log_api_event(operation: &str, success: bool, details: Option<&str>) {
    if success {
        tracing::event!(
            Level::INFO,
            operation = %operation,
            success = %success,
            details = ?details,
            timestamp = %chrono::Utc::now()
        );
    } else {
        tracing::event!(
            Level::ERROR,
            operation = %operation,
            success = %success,
            details = ?details,
            timestamp = %chrono::Utc::now()
        );
    }
}
