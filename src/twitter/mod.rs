//! Twitter/X API integration module.
//!
//! This module contains the follower operations, the request dispatcher they
//! send through, and the rate limit admission check run before each call.

mod api;
mod followers;
mod params;
mod rate_limit;

// Re-export public API
pub use api::{HttpMethod, RequestDispatcher, TwitterClient};
pub use followers::{
    FollowerIdsOptions, Followers, FollowersListOptions, FOLLOWERS_RATE_LIMIT_RESOURCE,
};
pub use params::{ParamValue, QueryParameters, UserIdentifier};
pub use rate_limit::{ApiRateLimiter, RateLimitStatus, RateLimitWindow, RateLimiter};

// Crate-internal re-exports (used by tests)
#[allow(unused_imports)]
pub(crate) use api::{api_error_message, sanitize_for_logging};
