//! Filter tweets by date range.
//!
//! This module provides [`FilterConfig`] for restricting a report to a
//! window of the archive, and [`apply_filters`] for filtering tweet
//! collections.
//!
//! # Example
//!
//! ```
//! use tweetpack::core::filter::{FilterConfig, apply_filters};
//! use tweetpack::parsing::parse_created_at;
//! use tweetpack::Tweet;
//!
//! # fn main() -> tweetpack::Result<()> {
//! let tweets = vec![
//!     Tweet::new(parse_created_at("Sun Dec 31 23:59:59 +0000 2023")?, "Old"),
//!     Tweet::new(parse_created_at("Wed Feb 14 18:30:00 +0000 2024")?, "New"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-01-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(tweets, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Bounds are inclusive calendar dates
//! - Dates are compared in each tweet's own UTC offset, the same offset used
//!   for the monthly and yearly buckets

use chrono::NaiveDate;

use crate::Tweet;
use crate::error::TweetpackError;

/// Date window applied before aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only tweets on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only tweets on or before this date.
    pub before: Option<NaiveDate>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all tweets pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`TweetpackError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, TweetpackError> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`TweetpackError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, TweetpackError> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `tweet` falls inside the window.
    pub fn matches(&self, tweet: &Tweet) -> bool {
        let date = tweet.date();
        if self.after.is_some_and(|after| date < after) {
            return false;
        }
        if self.before.is_some_and(|before| date > before) {
            return false;
        }
        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, TweetpackError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| TweetpackError::invalid_date(date_str))
}

/// Filters a collection of tweets, keeping those inside the window.
///
/// If no filters are active, returns the original tweets unchanged.
pub fn apply_filters(tweets: Vec<Tweet>, config: &FilterConfig) -> Vec<Tweet> {
    if !config.is_active() {
        return tweets;
    }

    tweets
        .into_iter()
        .filter(|tweet| config.matches(tweet))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::twitter::parse_created_at;

    fn make_tweet(ts: &str, text: &str) -> Tweet {
        Tweet::new(parse_created_at(ts).unwrap(), text)
    }

    fn sample() -> Vec<Tweet> {
        vec![
            make_tweet("Sun Dec 31 23:59:59 +0000 2023", "Old"),
            make_tweet("Mon Jan 01 00:00:00 +0000 2024", "New year"),
            make_tweet("Wed Feb 14 18:30:00 +0000 2024", "Valentine"),
        ]
    }

    #[test]
    fn test_filter_after() {
        let config = FilterConfig::new().with_date_from("2024-01-01").unwrap();
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].text, "New year");
    }

    #[test]
    fn test_filter_before_inclusive() {
        let config = FilterConfig::new().with_date_to("2024-01-01").unwrap();
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[1].text, "New year");
    }

    #[test]
    fn test_filter_window() {
        let config = FilterConfig::new()
            .with_date_from("2024-01-02")
            .unwrap()
            .with_date_to("2024-02-14")
            .unwrap();
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "Valentine");
    }

    #[test]
    fn test_filter_uses_tweet_offset() {
        // 23:30 on Dec 31 in UTC-5 is already Jan 1 in UTC
        let tweet = make_tweet("Sun Dec 31 23:30:00 -0500 2023", "late");
        let config = FilterConfig::new().with_date_from("2024-01-01").unwrap();
        assert!(!config.matches(&tweet));
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(TweetpackError::InvalidDate { .. })));
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(FilterConfig::new().with_after(date).is_active());
        assert!(FilterConfig::new().with_before(date).is_active());
    }

    #[test]
    fn test_inactive_passes_everything() {
        let filtered = apply_filters(sample(), &FilterConfig::new());
        assert_eq!(filtered.len(), 3);
    }
}
