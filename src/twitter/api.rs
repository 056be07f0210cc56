//! Core Twitter API utilities.
//!
//! This module contains the request dispatcher seam used by every operation
//! and its reqwest-backed implementation, which handles authentication,
//! transport and JSON decoding.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde_json::Value;
use std::fmt;

use super::params::QueryParameters;
use crate::config::TwitterConfig;
use crate::error::{Result, TwitterError};
use crate::oauth::build_bearer_auth_header;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// Sends authenticated requests to the Twitter API and decodes the JSON reply.
///
/// Implementations own transport, credentials and decoding. Callers pass an
/// API path such as `/followers/ids.json`, never a full URL.
#[async_trait]
pub trait RequestDispatcher: Send + Sync {
    /// Sends one request and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// - `TwitterError::HttpFailure` on transport errors or non-success statuses
    /// - `TwitterError::Decode` if the body is not valid JSON
    async fn send_request(
        &self,
        path: &str,
        method: HttpMethod,
        params: &QueryParameters,
    ) -> Result<Value>;
}

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum number of characters before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let head: String = sanitized.chars().take(max_len).collect();
        format!("{}... [truncated, {} total bytes]", head, text.len())
    } else {
        sanitized
    }
}

/// Extracts a readable message from a Twitter error body.
///
/// The v1.1 API reports failures as `{"errors":[{"code":..,"message":..}]}`;
/// bodies in any other shape are returned sanitized and truncated.
pub(crate) fn api_error_message(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let first = parsed
        .as_ref()
        .and_then(|json| json.get("errors"))
        .and_then(|errors| errors.as_array())
        .and_then(|errors| errors.first());

    if let Some(err) = first {
        if let Some(message) = err.get("message").and_then(|m| m.as_str()) {
            return match err.get("code").and_then(|c| c.as_i64()) {
                Some(code) => format!("{} (code {})", message, code),
                None => message.to_string(),
            };
        }
    }

    sanitize_for_logging(body, 200)
}

/// Twitter API client authenticated with a Bearer Token.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: Client,
    config: TwitterConfig,
}

impl TwitterClient {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `TwitterError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: TwitterConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| TwitterError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TwitterConfig {
        &self.config
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }
}

#[async_trait]
impl RequestDispatcher for TwitterClient {
    async fn send_request(
        &self,
        path: &str,
        method: HttpMethod,
        params: &QueryParameters,
    ) -> Result<Value> {
        let url = self.url_for(path);
        info!("Sending {} request to {}", method, path);
        debug!("Request URL: {}", url);
        debug!("Request parameters: {}", params);

        let auth_header = build_bearer_auth_header(&self.config.bearer_token);
        let request_builder = match method {
            HttpMethod::Get => self.http.get(&url).query(params.pairs()),
            HttpMethod::Post => self.http.post(&url).form(params.pairs()),
        }
        .header("Authorization", auth_header);

        let response = request_builder.send().await.map_err(|e| {
            error!("Request to {} failed before a response arrived: {}", path, e);
            TwitterError::from(e)
        })?;

        let status = response.status();
        info!("Received response with status: {} for {}", status, path);
        let body = response.text().await?;

        if !status.is_success() {
            error!("Request to {} failed - Status: {}", path, status);
            debug!(
                "Error response for {}: {}",
                path,
                sanitize_for_logging(&body, 200)
            );
            return Err(TwitterError::HttpFailure {
                status: Some(status.as_u16()),
                message: api_error_message(&body),
            });
        }

        debug!("Response summary for {}: {} bytes received", path, body.len());
        let decoded: Value = serde_json::from_str(&body).map_err(|e| {
            error!("Response from {} is not valid JSON: {}", path, e);
            TwitterError::Decode(e)
        })?;

        Ok(decoded)
    }
}
