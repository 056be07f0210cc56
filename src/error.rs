//! Error types for the Twitter followers client.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type for Twitter operations.
pub type Result<T> = std::result::Result<T, TwitterError>;

/// Error types for Twitter client operations.
///
/// None of these are retried by this crate; every error reaches the caller
/// exactly as it was raised.
#[derive(Error, Debug)]
pub enum TwitterError {
    /// A caller-supplied argument has the wrong shape (e.g. a user that is
    /// neither a numeric ID nor a screen name)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The rate limit for a resource is exhausted for the current window
    #[error(
        "Rate limit exceeded for {resource}; the limit will reset at {}",
        describe_reset(.resets_at)
    )]
    RateLimitExceeded {
        /// Resource path, e.g. `/followers/ids`
        resource: String,
        /// When the window resets, if the API reported it
        resets_at: Option<DateTime<Utc>>,
    },

    /// Transport failure or non-success HTTP status
    #[error("HTTP failure{}: {message}", describe_status(.status))]
    HttpFailure {
        /// HTTP status code, `None` when no response was received
        status: Option<u16>,
        /// Error message
        message: String,
    },

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for TwitterError {
    fn from(err: reqwest::Error) -> Self {
        TwitterError::HttpFailure {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

fn describe_reset(resets_at: &Option<DateTime<Utc>>) -> String {
    match resets_at {
        Some(at) => at.to_rfc3339(),
        None => "an unknown time".to_string(),
    }
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" ({})", code),
        None => String::new(),
    }
}
