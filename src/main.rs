//! # twitter-followers
//!
//! Command-line front end for the follower endpoints of the Twitter/X API.
//!
//! ## Usage
//!
//! ```bash
//! # First page of follower user objects, without statuses
//! twitter-followers list --screen-name alice --cursor -1 --skip-status true
//!
//! # Follower IDs as strings
//! twitter-followers ids --user-id 12345 --stringify-ids true
//!
//! # With debug logging
//! RUST_LOG=debug twitter-followers ids --screen-name alice
//! ```
//!
//! ## Environment Variables
//!
//! - `xapi_bearer_token`: Twitter API Bearer Token (required)
//! - `xapi_api_url`: API base URL (optional)
//! - `xapi_timeout_secs`: Request timeout in seconds (optional)

use clap::Parser;
use log::{error, info};

use twitter_followers::cli::Cli;
use twitter_followers::{Followers, TwitterClient, TwitterConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let cli = Cli::parse();

    let config = TwitterConfig::from_env()?;
    let followers = Followers::with_client(TwitterClient::new(config)?);

    match cli.command.run(&followers).await {
        Ok(response) => {
            info!("Request completed successfully");
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(e) => {
            error!("Request failed: {}", e);
            Err(e.into())
        }
    }
}
