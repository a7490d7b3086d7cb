use thiserror::Error;

use crate::cloudflare::ApiError;

/// Errors returned by the WAF client
#[derive(Error, Debug)]
pub enum WafError {
    /// The API answered with a non-2xx status or `success: false`
    #[error("Cloudflare API error (HTTP {status}): {}", describe(.errors))]
    Remote {
        /// HTTP status of the response
        status: u16,
        /// Error entries from the response envelope, possibly empty
        errors: Vec<ApiError>,
    },

    /// The response body was not the JSON we expected
    #[error("Failed to decode Cloudflare response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Transport level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl WafError {
    /// HTTP status of a remote error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            WafError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for WAF client operations
pub type WafResult<T> = Result<T, WafError>;

fn describe(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no error details".to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_lists_server_errors() {
        let err = WafError::Remote {
            status: 400,
            errors: vec![
                ApiError { code: 1003, message: "Invalid or missing zone id.".into() },
                ApiError { code: 1004, message: "Bad mode".into() },
            ],
        };
        assert_eq!(
            err.to_string(),
            "Cloudflare API error (HTTP 400): 1003: Invalid or missing zone id.; 1004: Bad mode"
        );
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn remote_error_without_details() {
        let err = WafError::Remote { status: 404, errors: vec![] };
        assert_eq!(err.to_string(), "Cloudflare API error (HTTP 404): no error details");
    }

    #[test]
    fn non_remote_errors_have_no_status() {
        let err = WafError::InvalidArgument("zone_id must not be empty".into());
        assert_eq!(err.status(), None);
    }
}
