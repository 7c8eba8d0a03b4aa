//! # Tweetpack
//!
//! A Rust library for turning a Twitter/X archive export into a single
//! pre-aggregated JSON document for dashboards.
//!
//! ## Overview
//!
//! The archive you download from Twitter/X contains `data/tweets.js`, a
//! JavaScript file wrapping a JSON array of every tweet. Tweetpack:
//!
//! 1. **Locates** `tweets.js` in the zip or extracted folder
//! 2. **Loads** the array, resolving missing fields to defaults
//! 3. **Aggregates** hashtags, mentions, link domains, languages and
//!    monthly/yearly volume in one pass
//! 4. **Builds** a [`Report`](core::Report) with top-N rankings
//! 5. **Writes** it as indented JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tweetpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let (report, _stats) = process_archive(
//!         Path::new("twitter-2024-02-14.zip"),
//!         &ReportConfig::default(),
//!         &FilterConfig::new(),
//!     )?;
//!
//!     println!("{} tweets, {} hashtags", report.total_tweets, report.unique_hashtags);
//!     write_json(&report, "dashboard_data.json")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Working Without an Archive
//!
//! ```rust
//! use tweetpack::prelude::*;
//! use tweetpack::parsing::parse_created_at;
//!
//! let ts = parse_created_at("Wed Feb 14 18:30:00 +0000 2024")?;
//! let tweets = vec![
//!     Tweet::new(ts, "Shipping #rust today").with_hashtags(["Rust"]),
//!     Tweet::new(ts, "RT @ferris: crabs").with_retweet(true),
//! ];
//!
//! let report = aggregate(&tweets, ReportConfig::default()).into_report();
//! assert_eq!(report.original_tweets, 1);
//! assert_eq!(report.top_hashtags[0].tag, "rust");
//! # Ok::<(), tweetpack::TweetpackError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`archive`] — Locating `tweets.js` in a zip or directory
//! - [`parsing`] — Raw archive structures, timestamp and URL helpers
//! - [`tweet`] — The normalized [`Tweet`]
//! - [`config`] — [`ReportConfig`](config::ReportConfig)
//! - [`core`] — Aggregation, report building, filtering, output
//! - [`cli`] — CLI argument types (feature `cli`)
//! - [`error`] — [`TweetpackError`] and [`Result`]
//! - [`prelude`] — Convenient re-exports

pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;
pub mod tweet;

// Re-export the main types at the crate root for convenience
pub use error::{Result, TweetpackError};
pub use tweet::Tweet;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use tweetpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Tweet;

    pub use crate::error::{Result, TweetpackError};

    pub use crate::config::ReportConfig;

    pub use crate::core::filter::{FilterConfig, apply_filters};

    pub use crate::core::aggregator::{Aggregator, aggregate};
    pub use crate::core::report::Report;

    pub use crate::core::processor::{ProcessingStats, process_archive, process_tweets};

    pub use crate::core::output::{to_json, write_json};
}
