//! Parsing utilities for archive files.
//!
//! [`twitter`] turns the `tweets.js` file of a Twitter/X export into raw
//! tweet structures and holds the timestamp and URL helpers shared by the
//! aggregation pass.

pub mod twitter;

// Re-export commonly used items
pub use twitter::{
    CREATED_AT_FORMAT, RawTweet, link_host, load_tweets, parse_created_at, parse_tweets_str,
};
