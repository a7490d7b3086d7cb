use serde::Deserialize;
use std::env;

use crate::cloudflare::Credentials;

const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Configuration settings for the WAF client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Cloudflare API configuration
    #[serde(default)]
    pub cloudflare: CloudflareConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cloudflare-specific configuration settings
#[derive(Clone, Deserialize)]
pub struct CloudflareConfig {
    /// Scoped API token, preferred over the key/email pair
    #[serde(default)]
    pub api_token: Option<String>,
    /// Global API key
    #[serde(default)]
    pub api_key: Option<String>,
    /// Account email that goes with `api_key`
    #[serde(default)]
    pub api_email: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Zone used when a command does not name one
    #[serde(default)]
    pub zone_id: Option<String>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load configuration from `.env`, `cloudflare-waf.toml` and environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("cloudflare-waf").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let mut settings = Self::from_builder(builder)?;
        settings.cloudflare.fill_from_env();
        Ok(settings)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}

impl CloudflareConfig {
    /// Picks the credentials to authenticate with. A token wins over a key.
    pub fn credentials(&self) -> Result<Credentials, config::ConfigError> {
        if let Some(token) = non_empty(&self.api_token) {
            return Ok(Credentials::Token(token.to_string()));
        }
        match (non_empty(&self.api_key), non_empty(&self.api_email)) {
            (Some(key), Some(email)) => Ok(Credentials::Key {
                email: email.to_string(),
                key: key.to_string(),
            }),
            (Some(_), None) => Err(config::ConfigError::Message(
                "cloudflare.api_key requires cloudflare.api_email".to_string(),
            )),
            _ => Err(config::ConfigError::Message(
                "no Cloudflare credentials: set cloudflare.api_token or cloudflare.api_key and cloudflare.api_email"
                    .to_string(),
            )),
        }
    }

    /// Falls back to the conventional `CLOUDFLARE_*` variables for unset credentials
    fn fill_from_env(&mut self) {
        let vars = [
            (&mut self.api_token, "CLOUDFLARE_API_TOKEN"),
            (&mut self.api_key, "CLOUDFLARE_API_KEY"),
            (&mut self.api_email, "CLOUDFLARE_EMAIL"),
            (&mut self.zone_id, "CLOUDFLARE_ZONE_ID"),
        ];
        for (field, var) in vars {
            if field.is_none() {
                *field = env::var(var).ok().filter(|v| !v.is_empty());
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Default for CloudflareConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            api_key: None,
            api_email: None,
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            zone_id: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl std::fmt::Debug for CloudflareConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_email", &self.api_email)
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("zone_id", &self.zone_id)
            .finish()
    }
}
