//! Configuration types for archive processing and report building.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use tweetpack::config::ReportConfig;
//!
//! let config = ReportConfig::new()
//!     .with_top_n(10)
//!     .with_top_per_year(5)
//!     .with_excluded_domain("bsky.app");
//!
//! assert_eq!(config.top_n, 10);
//! assert!(config.excluded_domains.iter().any(|d| d == "bsky.app"));
//! ```

use serde::{Deserialize, Serialize};

/// Name of the records file inside a Twitter/X archive.
pub const DEFAULT_RECORDS_FILE: &str = "tweets.js";

/// Prefix that marks a tweet as a retweet.
pub const DEFAULT_RETWEET_MARKER: &str = "RT @";

/// Domains never counted as outbound links: the platform itself and its
/// link shortener.
pub const DEFAULT_EXCLUDED_DOMAINS: &[&str] = &["twitter.com", "x.com", "t.co"];

/// Configuration for locating, classifying, and ranking tweets.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `records_file` | `tweets.js` | File searched for in the archive |
/// | `retweet_marker` | `RT @` | Text prefix identifying retweets |
/// | `excluded_domains` | `twitter.com`, `x.com`, `t.co` | Hosts dropped from domain counts |
/// | `text_limit` | 200 | Characters of text kept per ranked tweet |
/// | `top_n` | 50 | Global hashtag/mention/domain list length |
/// | `top_per_year` | 20 | Per-year list length |
/// | `top_languages` | 20 | Language list length |
/// | `top_tweets` | 20 | Most-liked / most-retweeted list length |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Name of the records file to look for.
    pub records_file: String,

    /// Text prefix that classifies a tweet as a retweet.
    pub retweet_marker: String,

    /// Hosts (and their subdomains) excluded from domain counts.
    pub excluded_domains: Vec<String>,

    /// Maximum number of characters of tweet text kept in rankings.
    pub text_limit: usize,

    /// Length of the global top hashtag, mention, and domain lists.
    pub top_n: usize,

    /// Length of each per-year top list.
    pub top_per_year: usize,

    /// Length of the language list.
    pub top_languages: usize,

    /// Length of the top-tweets-by-favorites and by-retweets lists.
    pub top_tweets: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            records_file: DEFAULT_RECORDS_FILE.to_string(),
            retweet_marker: DEFAULT_RETWEET_MARKER.to_string(),
            excluded_domains: DEFAULT_EXCLUDED_DOMAINS
                .iter()
                .map(ToString::to_string)
                .collect(),
            text_limit: 200,
            top_n: 50,
            top_per_year: 20,
            top_languages: 20,
            top_tweets: 20,
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the records file name.
    #[must_use]
    pub fn with_records_file(mut self, name: impl Into<String>) -> Self {
        self.records_file = name.into();
        self
    }

    /// Sets the retweet marker.
    #[must_use]
    pub fn with_retweet_marker(mut self, marker: impl Into<String>) -> Self {
        self.retweet_marker = marker.into();
        self
    }

    /// Adds a domain to the exclusion list.
    #[must_use]
    pub fn with_excluded_domain(mut self, domain: impl Into<String>) -> Self {
        self.excluded_domains.push(domain.into().to_lowercase());
        self
    }

    /// Sets the text truncation limit.
    #[must_use]
    pub fn with_text_limit(mut self, limit: usize) -> Self {
        self.text_limit = limit;
        self
    }

    /// Sets the global top-N length.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Sets the per-year top-N length.
    #[must_use]
    pub fn with_top_per_year(mut self, n: usize) -> Self {
        self.top_per_year = n;
        self
    }

    /// Sets the language list length.
    #[must_use]
    pub fn with_top_languages(mut self, n: usize) -> Self {
        self.top_languages = n;
        self
    }

    /// Sets the top tweets list length.
    #[must_use]
    pub fn with_top_tweets(mut self, n: usize) -> Self {
        self.top_tweets = n;
        self
    }

    /// Returns `true` if `host` is an excluded domain or one of its subdomains.
    ///
    /// ```rust
    /// use tweetpack::config::ReportConfig;
    ///
    /// let config = ReportConfig::new();
    /// assert!(config.is_excluded_domain("t.co"));
    /// assert!(config.is_excluded_domain("mobile.twitter.com"));
    /// assert!(!config.is_excluded_domain("microsoft.com"));
    /// ```
    pub fn is_excluded_domain(&self, host: &str) -> bool {
        self.excluded_domains.iter().any(|excluded| {
            host == excluded
                || host
                    .strip_suffix(excluded.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}
