//! Normalized tweet type.
//!
//! [`Tweet`] is the resolved form of a [`RawTweet`]: the timestamp is parsed,
//! every optional field has its default applied, and the retweet/media
//! classification is computed once.
//!
//! # Examples
//!
//! ```
//! use chrono::TimeZone;
//! use tweetpack::Tweet;
//!
//! let ts = chrono::FixedOffset::east_opt(0).unwrap()
//!     .with_ymd_and_hms(2024, 2, 14, 18, 30, 0).unwrap();
//!
//! let tweet = Tweet::new(ts, "RT @ferris: crabs all the way down")
//!     .with_hashtags(["Rust"])
//!     .with_retweet(true);
//!
//! assert!(tweet.is_retweet);
//! assert_eq!(tweet.hashtags, vec!["rust"]);
//! assert_eq!(tweet.year(), "2024");
//! assert_eq!(tweet.year_month(), "2024-02");
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::Result;
use crate::parsing::twitter::{RawTweet, UNDETERMINED_LANG, parse_created_at};

/// A single post from the archive, with defaults resolved.
///
/// | Field | Default when missing |
/// |-------|----------------------|
/// | `favorites`, `retweets` | `0` |
/// | `hashtags`, `mentions`, `urls` | empty |
/// | `lang` | `"und"` |
/// | `has_media` | `false` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    /// When the tweet was posted, in the offset recorded by the archive.
    pub created_at: DateTime<FixedOffset>,

    /// Full tweet text.
    pub text: String,

    /// Like count.
    pub favorites: u64,

    /// Retweet count.
    pub retweets: u64,

    /// `true` if the text starts with the retweet marker.
    pub is_retweet: bool,

    /// `true` if photos or video are attached.
    pub has_media: bool,

    /// Hashtags, lowercased, in text order.
    pub hashtags: Vec<String>,

    /// Mentioned screen names, in text order.
    pub mentions: Vec<String>,

    /// Outbound links (expanded where available).
    pub urls: Vec<String>,

    /// Language code.
    pub lang: String,
}

impl Tweet {
    /// Creates a tweet with only a timestamp and text; everything else is
    /// defaulted.
    pub fn new(created_at: DateTime<FixedOffset>, text: impl Into<String>) -> Self {
        Self {
            created_at,
            text: text.into(),
            favorites: 0,
            retweets: 0,
            is_retweet: false,
            has_media: false,
            hashtags: Vec::new(),
            mentions: Vec::new(),
            urls: Vec::new(),
            lang: UNDETERMINED_LANG.to_string(),
        }
    }

    /// Resolves a raw archive entry.
    ///
    /// Fails with [`TweetpackError::Timestamp`](crate::TweetpackError::Timestamp)
    /// if `created_at` doesn't match the archive format.
    pub fn from_raw(raw: RawTweet, config: &ReportConfig) -> Result<Self> {
        let created_at = parse_created_at(&raw.created_at)?;
        let is_retweet = raw.full_text.starts_with(config.retweet_marker.as_str());
        let has_media = raw.has_media();
        let lang = raw.lang().to_string();

        let entities = raw.entities;
        let hashtags = entities
            .hashtags
            .into_iter()
            .map(|h| h.text.to_lowercase())
            .collect();
        let mentions = entities
            .user_mentions
            .into_iter()
            .map(|m| m.screen_name)
            .collect();
        let urls = entities
            .urls
            .iter()
            .filter_map(|u| u.target())
            .map(ToString::to_string)
            .collect();

        Ok(Self {
            created_at,
            text: raw.full_text,
            favorites: raw.favorite_count,
            retweets: raw.retweet_count,
            is_retweet,
            has_media,
            hashtags,
            mentions,
            urls,
            lang,
        })
    }

    /// Calendar date in the tweet's own offset.
    pub fn date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Year bucket key, e.g. `"2024"`.
    pub fn year(&self) -> String {
        self.created_at.format("%Y").to_string()
    }

    /// Month bucket key, e.g. `"2024-02"`.
    pub fn year_month(&self) -> String {
        self.created_at.format("%Y-%m").to_string()
    }

    // Builder methods

    /// Sets the like and retweet counts.
    #[must_use]
    pub fn with_counts(mut self, favorites: u64, retweets: u64) -> Self {
        self.favorites = favorites;
        self.retweets = retweets;
        self
    }

    /// Marks the tweet as a retweet.
    #[must_use]
    pub fn with_retweet(mut self, is_retweet: bool) -> Self {
        self.is_retweet = is_retweet;
        self
    }

    /// Marks the tweet as carrying media.
    #[must_use]
    pub fn with_media(mut self, has_media: bool) -> Self {
        self.has_media = has_media;
        self
    }

    /// Sets the hashtags (lowercased).
    #[must_use]
    pub fn with_hashtags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.hashtags = tags.into_iter().map(|t| t.as_ref().to_lowercase()).collect();
        self
    }

    /// Sets the mentioned screen names.
    #[must_use]
    pub fn with_mentions<I, S>(mut self, mentions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mentions = mentions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the outbound links.
    #[must_use]
    pub fn with_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the language code.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::twitter::parse_tweets_str;

    fn raw(json: &str) -> RawTweet {
        parse_tweets_str(&format!("[{{\"tweet\": {}}}]", json))
            .unwrap()
            .remove(0)
    }

    #[test]
    fn test_from_raw_original() {
        let raw = raw(r##"{
            "created_at": "Wed Feb 14 18:30:00 +0000 2024",
            "full_text": "Learning #Rust and #SERDE with @ferris",
            "favorite_count": "4",
            "lang": "en",
            "entities": {
                "hashtags": [{"text": "Rust"}, {"text": "SERDE"}],
                "user_mentions": [{"screen_name": "ferris"}],
                "urls": [{"url": "https://t.co/1", "expanded_url": "https://serde.rs"}]
            }
        }"##);

        let tweet = Tweet::from_raw(raw, &ReportConfig::default()).unwrap();
        assert!(!tweet.is_retweet);
        assert!(!tweet.has_media);
        assert_eq!(tweet.favorites, 4);
        assert_eq!(tweet.retweets, 0);
        assert_eq!(tweet.hashtags, vec!["rust", "serde"]);
        assert_eq!(tweet.mentions, vec!["ferris"]);
        assert_eq!(tweet.urls, vec!["https://serde.rs"]);
        assert_eq!(tweet.lang, "en");
        assert_eq!(tweet.date().to_string(), "2024-02-14");
    }

    #[test]
    fn test_from_raw_retweet() {
        let raw = raw(r#"{"created_at": "Wed Feb 14 18:30:00 +0000 2024", "full_text": "RT @ferris: hi"}"#);
        let tweet = Tweet::from_raw(raw, &ReportConfig::default()).unwrap();
        assert!(tweet.is_retweet);
        assert_eq!(tweet.lang, "und");
    }

    #[test]
    fn test_retweet_marker_is_prefix_only() {
        let raw = raw(r#"{"created_at": "Wed Feb 14 18:30:00 +0000 2024", "full_text": "so RT @ferris said"}"#);
        let tweet = Tweet::from_raw(raw, &ReportConfig::default()).unwrap();
        assert!(!tweet.is_retweet);
    }

    #[test]
    fn test_from_raw_bad_timestamp() {
        let raw = raw(r#"{"created_at": "2024-02-14 18:30:00", "full_text": "hi"}"#);
        let err = Tweet::from_raw(raw, &ReportConfig::default()).unwrap_err();
        assert!(err.is_timestamp());
    }

    #[test]
    fn test_bucket_keys_use_local_offset() {
        let raw = raw(r#"{"created_at": "Mon Jan 01 01:00:00 +0200 2024", "full_text": "new year"}"#);
        let tweet = Tweet::from_raw(raw, &ReportConfig::default()).unwrap();
        assert_eq!(tweet.year(), "2024");
        assert_eq!(tweet.year_month(), "2024-01");
    }

    #[test]
    fn test_builder() {
        let ts = parse_created_at("Wed Feb 14 18:30:00 +0000 2024").unwrap();
        let tweet = Tweet::new(ts, "hello")
            .with_counts(3, 1)
            .with_media(true)
            .with_mentions(["ferris"])
            .with_urls(["https://example.com"])
            .with_lang("de");

        assert_eq!(tweet.favorites, 3);
        assert_eq!(tweet.retweets, 1);
        assert!(tweet.has_media);
        assert_eq!(tweet.mentions, vec!["ferris"]);
        assert_eq!(tweet.urls.len(), 1);
        assert_eq!(tweet.lang, "de");
    }
}
