//! Configuration management for the WAF client.
//! Settings come from an optional config file and `APP_`-prefixed
//! environment variables.

mod settings;

pub use settings::{CloudflareConfig, LoggingConfig, Settings};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, config::ConfigError>;

/// Load the application configuration
pub fn load_config() -> ConfigResult<Settings> {
    Settings::load()
}
