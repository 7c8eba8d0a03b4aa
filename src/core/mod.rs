//! Core processing logic for tweetpack.
//!
//! This module contains:
//! - [`counter`] - Occurrence counting with first-seen tie-breaks
//! - [`aggregator`] - The single aggregation pass over tweets
//! - [`report`] - The report document and its builder
//! - [`filter`] - Date-range filtering
//! - [`processor`] - The end-to-end pipeline
//! - [`output`] - Report writers
//!
//! # Quick Start
//!
//! ```rust
//! use tweetpack::core::{
//!     Aggregator, FilterConfig, Report,
//!     aggregate, apply_filters, process_archive, write_json,
//! };
//! ```

pub mod aggregator;
pub mod counter;
pub mod filter;
pub mod output;
pub mod processor;
pub mod report;

// Re-export main types for convenience
pub use aggregator::{Aggregator, MonthlyVolume, TweetSummary, YearlyVolume, aggregate};
pub use counter::Counter;
pub use filter::{FilterConfig, apply_filters};
pub use output::{to_json, write_json};
pub use processor::{ProcessingStats, process_archive, process_tweets};
pub use report::{
    DateRange, DomainCount, LangCount, MentionCount, Report, TagCount, TopTweet, build_report,
};
