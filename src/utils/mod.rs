//! Utility modules for the WAF client.

mod logging;

pub use logging::{init_logging, log_api_event};
