//! Command-line interface for the `twitter-followers` binary.

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use log::info;
use serde_json::Value;

use crate::error::{Result, TwitterError};
use crate::twitter::{FollowerIdsOptions, Followers, FollowersListOptions, UserIdentifier};

#[derive(Parser, Debug)]
#[command(name = "twitter-followers")]
#[command(version)]
#[command(about = "List the followers of a Twitter/X user", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Page of follower user objects (GET /followers/list.json)
    List {
        #[command(flatten)]
        user: UserArgs,

        /// Page cursor; omit for the first page
        #[arg(long, allow_negative_numbers = true)]
        cursor: Option<i64>,

        /// Users per page
        #[arg(long)]
        count: Option<i64>,

        /// Leave statuses out of the user objects
        #[arg(long, value_parser = BoolishValueParser::new())]
        skip_status: Option<bool>,

        /// Include the entities node in each user object
        #[arg(long = "entities", value_parser = BoolishValueParser::new())]
        include_entities: Option<bool>,
    },

    /// Page of follower IDs (GET /followers/ids.json)
    Ids {
        #[command(flatten)]
        user: UserArgs,

        /// Page cursor; omit for the first page
        #[arg(long, allow_negative_numbers = true)]
        cursor: Option<i64>,

        /// Return IDs as strings
        #[arg(long, value_parser = BoolishValueParser::new())]
        stringify_ids: Option<bool>,

        /// IDs per page
        #[arg(long)]
        count: Option<i64>,
    },
}

/// The user to query; exactly one of the two flags is accepted.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct UserArgs {
    /// Numeric user ID
    #[arg(long, allow_negative_numbers = true)]
    pub user_id: Option<i64>,

    /// Screen name, with or without a leading @
    #[arg(long)]
    pub screen_name: Option<String>,
}

impl UserArgs {
    pub fn identifier(&self) -> Result<UserIdentifier> {
        match (self.user_id, &self.screen_name) {
            (Some(id), None) => Ok(UserIdentifier::Id(id)),
            (None, Some(name)) => Ok(UserIdentifier::from(name.trim_start_matches('@'))),
            _ => Err(TwitterError::InvalidArgument(
                "Exactly one of --user-id or --screen-name is required".to_string(),
            )),
        }
    }
}

impl Command {
    /// Runs the subcommand against `followers` and returns the decoded response.
    pub async fn run(&self, followers: &Followers) -> Result<Value> {
        match self {
            Command::List {
                user,
                cursor,
                count,
                skip_status,
                include_entities,
            } => {
                info!("Running list command");
                let options = FollowersListOptions {
                    cursor: *cursor,
                    count: *count,
                    skip_status: *skip_status,
                    include_entities: *include_entities,
                };
                followers.list_followers(user.identifier()?, &options).await
            }
            Command::Ids {
                user,
                cursor,
                stringify_ids,
                count,
            } => {
                info!("Running ids command");
                let options = FollowerIdsOptions {
                    cursor: *cursor,
                    stringify_ids: *stringify_ids,
                    count: *count,
                };
                followers.list_follower_ids(user.identifier()?, &options).await
            }
        }
    }
}
