//! Rate limit admission checks.
//!
//! Before an operation calls its endpoint it asks a [`RateLimiter`] whether
//! quota remains for a resource. The API-backed implementation reads the
//! `/application/rate_limit_status.json` endpoint, which is itself exempt
//! from the check.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

use super::api::{HttpMethod, RequestDispatcher};
use super::params::QueryParameters;
use crate::error::{Result, TwitterError};

const RATE_LIMIT_STATUS_PATH: &str = "/application/rate_limit_status.json";

/// Decides whether a request against a resource may proceed.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Fails with `TwitterError::RateLimitExceeded` if no quota remains for
    /// `/<family>/<name>`.
    async fn check_rate_limit(&self, family: &str, name: &str) -> Result<()>;
}

/// One rate limit window as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateLimitWindow {
    pub limit: u32,
    pub remaining: u32,
    /// Window reset as Unix epoch seconds
    pub reset: i64,
}

impl RateLimitWindow {
    pub fn resets_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset, 0)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Decoded body of the rate limit status endpoint.
///
/// `resources` maps a family (e.g. `followers`) to its endpoints keyed by
/// path (e.g. `/followers/ids`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateLimitStatus {
    #[serde(default)]
    pub resources: HashMap<String, HashMap<String, RateLimitWindow>>,
}

impl RateLimitStatus {
    /// Looks up the window for `/<family>/<name>`.
    pub fn window(&self, family: &str, name: &str) -> Option<&RateLimitWindow> {
        self.resources
            .get(family)
            .and_then(|endpoints| endpoints.get(&resource_path(family, name)))
    }
}

fn resource_path(family: &str, name: &str) -> String {
    format!("/{}/{}", family, name)
}

/// Rate limiter that asks the Twitter API for the caller's remaining quota.
#[derive(Clone)]
pub struct ApiRateLimiter {
    dispatcher: Arc<dyn RequestDispatcher>,
}

impl ApiRateLimiter {
    pub fn new(dispatcher: Arc<dyn RequestDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetches the current rate limit status, restricted to one resource
    /// family when `family` is given.
    pub async fn rate_limit_status(&self, family: Option<&str>) -> Result<RateLimitStatus> {
        let params = QueryParameters::new().with("resources", family);
        let response = self
            .dispatcher
            .send_request(RATE_LIMIT_STATUS_PATH, HttpMethod::Get, &params)
            .await?;
        let status: RateLimitStatus = serde_json::from_value(response)?;
        Ok(status)
    }
}

#[async_trait]
impl RateLimiter for ApiRateLimiter {
    async fn check_rate_limit(&self, family: &str, name: &str) -> Result<()> {
        let resource = resource_path(family, name);
        debug!("Checking rate limit for {}", resource);

        let status = self.rate_limit_status(Some(family)).await?;
        match status.window(family, name) {
            Some(window) if window.is_exhausted() => {
                warn!(
                    "Rate limit exhausted for {} ({} per window), resets at epoch {}",
                    resource, window.limit, window.reset
                );
                Err(TwitterError::RateLimitExceeded {
                    resource,
                    resets_at: window.resets_at(),
                })
            }
            Some(window) => {
                info!(
                    "Rate limit for {}: {}/{} remaining",
                    resource, window.remaining, window.limit
                );
                Ok(())
            }
            None => {
                warn!(
                    "No rate limit entry reported for {}, allowing request",
                    resource
                );
                Ok(())
            }
        }
    }
}
