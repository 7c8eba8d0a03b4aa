//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`LogLevel`] - Verbosity of the diagnostic log on stderr
//!
//! The argument struct converts into the library's configuration types, so
//! other front ends can reuse the same option handling:
//!
//! ```rust
//! use clap::Parser;
//! use tweetpack::cli::Args;
//!
//! let args = Args::try_parse_from(["tweetpack", "archive.zip", "--top", "10"]).unwrap();
//! let config = args.report_config();
//! assert_eq!(config.top_n, 10);
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::core::filter::FilterConfig;
use crate::error::Result;

/// Output file used when no path is given.
pub const DEFAULT_OUTPUT: &str = "dashboard_data.json";

/// Aggregate a Twitter/X archive export into a single JSON file
/// for dashboards.
#[derive(Parser, Debug, Clone)]
#[command(name = "tweetpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tweetpack twitter-2024-02-14.zip
    tweetpack ~/Downloads/twitter-archive/ stats.json
    tweetpack archive.zip --after 2023-01-01 --top 25
    RUST_LOG=tweetpack=debug tweetpack archive.zip")]
pub struct Args {
    /// Archive zip file or extracted archive directory
    pub input: String,

    /// Path to output JSON file
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Only include tweets on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only include tweets on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Number of hashtags, mentions and domains in the global rankings
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub top: usize,

    /// Number of entries in each per-year ranking
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_per_year: usize,

    /// Number of languages to report
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_languages: usize,

    /// Number of tweets in the most-liked and most-retweeted lists
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_tweets: usize,

    /// Diagnostic log level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Suppress progress output; the summary is still printed
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Builds the aggregation settings from the ranking options.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::default()
            .with_top_n(self.top)
            .with_top_per_year(self.top_per_year)
            .with_top_languages(self.top_languages)
            .with_top_tweets(self.top_tweets)
    }

    /// Builds the date filter from `--after` / `--before`.
    ///
    /// # Errors
    ///
    /// Returns [`TweetpackError::InvalidDate`](crate::TweetpackError::InvalidDate)
    /// if either date is not `YYYY-MM-DD`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }
}

/// Verbosity of the diagnostic log written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Returns the directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
