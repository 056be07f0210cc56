//! Twitter/X API operations for listing a user's followers.

use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

use super::api::{HttpMethod, RequestDispatcher, TwitterClient};
use super::params::{QueryParameters, UserIdentifier};
use super::rate_limit::{ApiRateLimiter, RateLimiter};
use crate::error::Result;

const FOLLOWERS_LIST_PATH: &str = "/followers/list.json";
const FOLLOWER_IDS_PATH: &str = "/followers/ids.json";

/// Rate limit resource checked by both follower operations.
///
/// `list_followers` is checked against the `ids` quota as well, even though
/// it targets `/followers/list`.
pub const FOLLOWERS_RATE_LIMIT_RESOURCE: (&str, &str) = ("followers", "ids");

/// Optional arguments for [`Followers::list_followers`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowersListOptions {
    /// Page cursor; omit for the first page
    pub cursor: Option<i64>,
    /// Users per page, up to 5000 (not enforced locally)
    pub count: Option<i64>,
    /// Leave statuses out of the returned user objects
    pub skip_status: Option<bool>,
    /// Include the `entities` node in each user object
    pub include_entities: Option<bool>,
}

/// Optional arguments for [`Followers::list_follower_ids`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowerIdsOptions {
    /// Page cursor; omit for the first page
    pub cursor: Option<i64>,
    /// Return IDs as strings rather than numbers
    pub stringify_ids: Option<bool>,
    /// IDs per page, up to 5000 (not enforced locally)
    pub count: Option<i64>,
}

/// Follower queries against the Twitter REST API.
///
/// Each call performs one rate limit check and one request; nothing is
/// retried or cached, and responses are returned exactly as decoded.
#[derive(Clone)]
pub struct Followers {
    dispatcher: Arc<dyn RequestDispatcher>,
    rate_limiter: Arc<dyn RateLimiter>,
}

impl Followers {
    pub fn new(dispatcher: Arc<dyn RequestDispatcher>, rate_limiter: Arc<dyn RateLimiter>) -> Self {
        Self {
            dispatcher,
            rate_limiter,
        }
    }

    /// Uses `client` both for requests and for rate limit status lookups.
    pub fn with_client(client: TwitterClient) -> Self {
        let dispatcher: Arc<dyn RequestDispatcher> = Arc::new(client);
        let rate_limiter = Arc::new(ApiRateLimiter::new(Arc::clone(&dispatcher)));
        Self::new(dispatcher, rate_limiter)
    }

    /// Returns a page of user objects following `user`.
    ///
    /// # Parameters
    ///
    /// - `user`: The user whose followers to list
    /// - `options`: Cursor, page size and payload switches; unset fields are not sent
    ///
    /// # Returns
    ///
    /// - `Ok(Value)`: The decoded JSON response
    /// - `Err(TwitterError::RateLimitExceeded)`: If the `followers/ids` quota is exhausted
    /// - `Err(TwitterError::HttpFailure)`: If the request fails
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use twitter_followers::{Followers, FollowersListOptions, TwitterClient, TwitterConfig};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = TwitterClient::new(TwitterConfig::from_env().unwrap()).unwrap();
    ///     let followers = Followers::with_client(client);
    ///     let options = FollowersListOptions {
    ///         cursor: Some(-1),
    ///         skip_status: Some(true),
    ///         ..Default::default()
    ///     };
    ///     let page = followers.list_followers("alice".into(), &options).await.unwrap();
    ///     println!("{}", page["next_cursor"]);
    /// }
    /// ```
    pub async fn list_followers(
        &self,
        user: UserIdentifier,
        options: &FollowersListOptions,
    ) -> Result<Value> {
        info!("Listing followers of {}", user);
        self.check_followers_rate_limit().await?;

        let params = QueryParameters::for_user(&user)
            .with("cursor", options.cursor)
            .with("count", options.count)
            .with("skip_status", options.skip_status)
            .with("entities", options.include_entities);
        debug!("Followers list parameters: {}", params);

        self.dispatcher
            .send_request(FOLLOWERS_LIST_PATH, HttpMethod::Get, &params)
            .await
    }

    /// Returns a page of IDs of users following `user`.
    ///
    /// An explicit `count: Some(0)` is sent as `count=0`; only `None` omits it.
    ///
    /// # Returns
    ///
    /// - `Ok(Value)`: The decoded JSON response
    /// - `Err(TwitterError::RateLimitExceeded)`: If the `followers/ids` quota is exhausted
    /// - `Err(TwitterError::HttpFailure)`: If the request fails
    pub async fn list_follower_ids(
        &self,
        user: UserIdentifier,
        options: &FollowerIdsOptions,
    ) -> Result<Value> {
        info!("Listing follower IDs of {}", user);
        self.check_followers_rate_limit().await?;

        let params = QueryParameters::for_user(&user)
            .with("cursor", options.cursor)
            .with("stringify_ids", options.stringify_ids)
            .with("count", options.count);
        debug!("Follower IDs parameters: {}", params);

        self.dispatcher
            .send_request(FOLLOWER_IDS_PATH, HttpMethod::Get, &params)
            .await
    }

    async fn check_followers_rate_limit(&self) -> Result<()> {
        let (family, name) = FOLLOWERS_RATE_LIMIT_RESOURCE;
        self.rate_limiter.check_rate_limit(family, name).await
    }
}
