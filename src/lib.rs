//! # Twitter Followers Library
//!
//! Bindings for the Twitter/X REST API follower endpoints. Each operation
//! takes a user (numeric ID or screen name) plus optional paging switches,
//! checks the caller's rate limit, and sends an authenticated GET request
//! through a pluggable [`RequestDispatcher`].
//!
//! ## Features
//!
//! - `GET /followers/list.json` and `GET /followers/ids.json`
//! - Rate limit admission checks via `/application/rate_limit_status.json`
//! - OAuth 2.0 Bearer Token authentication
//! - Structured logging through the `log` facade
//!
//! ## Configuration
//!
//! - `xapi_bearer_token`: Twitter API Bearer Token (required)
//! - `xapi_api_url`: API base URL (defaults to `https://api.twitter.com/1.1`)
//! - `xapi_timeout_secs`: Request timeout in seconds (optional)

pub mod cli;
pub mod config;
pub mod error;
pub mod oauth;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::{TwitterConfig, DEFAULT_API_URL};
pub use error::{Result, TwitterError};
pub use oauth::build_bearer_auth_header;
pub use twitter::{
    ApiRateLimiter, FollowerIdsOptions, Followers, FollowersListOptions, HttpMethod, ParamValue,
    QueryParameters, RateLimitStatus, RateLimitWindow, RateLimiter, RequestDispatcher,
    TwitterClient, UserIdentifier, FOLLOWERS_RATE_LIMIT_RESOURCE,
};
