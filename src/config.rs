//! Configuration module for the Twitter followers client.
//!
//! This module contains the configuration structure and environment variable
//! handling for the Twitter/X API integration.

use log::{debug, error, info, warn};
use std::env;
use std::time::Duration;

use crate::error::{Result, TwitterError};
use crate::oauth::mask_token;

/// Base URL of the Twitter REST API v1.1, which hosts the follower endpoints.
pub const DEFAULT_API_URL: &str = "https://api.twitter.com/1.1";

/// Configuration struct for Twitter/X API access.
///
/// Holds the Bearer Token used to authenticate every request, the API base
/// URL that request paths are appended to, and an optional request timeout.
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    /// The Bearer Token for OAuth 2.0 app-only authentication
    pub bearer_token: String,
    /// API base URL without a trailing slash
    pub api_url: String,
    /// Per-request timeout applied by the HTTP client
    pub timeout: Option<Duration>,
}

impl TwitterConfig {
    /// Creates a configuration for the public Twitter API with the given token.
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }

    /// Overrides the API base URL (e.g. to point at a proxy or a mock server).
    ///
    /// # Errors
    ///
    /// Returns `TwitterError::Config` if `api_url` is not an absolute URL.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self> {
        self.api_url = normalize_api_url(api_url)?;
        Ok(self)
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Creates a new `TwitterConfig` instance from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `xapi_bearer_token`: Twitter API Bearer Token
    ///
    /// # Optional Environment Variables
    ///
    /// - `xapi_api_url`: API base URL (defaults to `https://api.twitter.com/1.1`)
    /// - `xapi_timeout_secs`: Request timeout in seconds
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: If the required variable is present and all values are valid
    /// - `Err(TwitterError::Config)`: If the token is missing or empty, or an optional value is malformed
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use twitter_followers::TwitterConfig;
    ///
    /// std::env::set_var("xapi_bearer_token", "your_bearer_token");
    /// let config = TwitterConfig::from_env().unwrap();
    /// ```
    pub fn from_env() -> Result<Self> {
        info!("Loading Twitter configuration from environment variables");

        let bearer_token = match env::var("xapi_bearer_token") {
            Ok(token) => {
                info!(
                    "Found xapi_bearer_token environment variable with length: {}",
                    token.len()
                );
                debug!("Bearer token (masked): {}", mask_token(&token));

                if token.is_empty() {
                    error!("Bearer token is empty");
                    return Err(TwitterError::Config(
                        "Bearer token cannot be empty".to_string(),
                    ));
                }

                if token.len() < 10 {
                    warn!(
                        "Bearer token seems unusually short ({} characters)",
                        token.len()
                    );
                }

                token
            }
            Err(e) => {
                error!("Failed to load xapi_bearer_token from environment: {}", e);
                return Err(TwitterError::Config(format!(
                    "Missing xapi_bearer_token environment variable: {}",
                    e
                )));
            }
        };

        let mut config = Self::new(bearer_token);

        if let Ok(api_url) = env::var("xapi_api_url") {
            info!("Using API base URL from xapi_api_url: {}", api_url);
            config = config.with_api_url(&api_url)?;
        }

        if let Ok(raw) = env::var("xapi_timeout_secs") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                TwitterError::Config(format!(
                    "xapi_timeout_secs must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?;
            info!("Request timeout set to {} seconds", secs);
            config = config.with_timeout(Duration::from_secs(secs));
        }

        info!("Twitter configuration loaded successfully");
        Ok(config)
    }
}

fn normalize_api_url(api_url: &str) -> Result<String> {
    let trimmed = api_url.trim().trim_end_matches('/');
    url::Url::parse(trimmed)
        .map_err(|e| TwitterError::Config(format!("Invalid API URL '{}': {}", api_url, e)))?;
    Ok(trimmed.to_string())
}
