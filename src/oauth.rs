//! OAuth authentication helpers for Twitter/X API integration.
//!
//! Requests are authenticated with an OAuth 2.0 Bearer Token (app-only
//! authentication), which is sufficient for the read-only follower endpoints.

/// Builds the Authorization header for OAuth 2.0 Bearer Token authentication.
///
/// # Parameters
///
/// - `bearer_token`: The Bearer Token from the Twitter Developer Portal
///
/// # Returns
///
/// A properly formatted Authorization header string.
///
/// # Format
///
/// ```text
/// Bearer YOUR_BEARER_TOKEN_HERE
/// ```
///
/// # Example
///
/// ```rust
/// use twitter_followers::build_bearer_auth_header;
///
/// let header = build_bearer_auth_header("your_bearer_token");
/// assert_eq!(header, "Bearer your_bearer_token");
/// ```
pub fn build_bearer_auth_header(bearer_token: &str) -> String {
    format!("Bearer {}", bearer_token)
}

/// Masks a credential for logging.
///
/// Tokens of 24 characters or more keep their first and last four characters;
/// shorter ones are reduced to their length so no part of them is logged.
pub(crate) fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();

    if len >= 24 {
        let prefix: String = chars[..4].iter().collect();
        let suffix: String = chars[len - 4..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        format!("[{} chars]", len)
    }
}
