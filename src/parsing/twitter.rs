//! Twitter/X archive parsing utilities.
//!
//! An archive stores its posts in `tweets.js`, which is JavaScript rather
//! than JSON:
//!
//! ```text
//! window.YTD.tweets.part0 = [
//!   { "tweet": { "created_at": "Wed Feb 14 18:30:00 +0000 2024", "full_text": "...", ... } },
//!   ...
//! ]
//! ```
//!
//! This module strips the assignment prefix, deserializes the array into
//! [`RawTweet`] values with every optional field defaulted, and provides the
//! timestamp and URL helpers used during aggregation.

use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::{Result, TweetpackError};

/// `created_at` layout used by the archive, e.g. `Wed Feb 14 18:30:00 +0000 2024`.
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// [`CREATED_AT_FORMAT`] without the leading weekday.
const CREATED_AT_TAIL_FORMAT: &str = "%b %d %H:%M:%S %z %Y";

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Language code used when a tweet has none.
pub const UNDETERMINED_LANG: &str = "und";

/// One element of the archive array.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetEntry {
    pub tweet: RawTweet,
}

/// Raw tweet structure for deserialization.
///
/// Only `created_at` and `full_text` are required. Everything else falls back
/// to an empty or zero value.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTweet {
    /// Creation time in [`CREATED_AT_FORMAT`]
    pub created_at: String,
    /// Tweet text, including the `RT @user:` prefix for retweets
    pub full_text: String,
    /// Like count; exported as a string
    #[serde(default, deserialize_with = "deserialize_count")]
    pub favorite_count: u64,
    /// Retweet count; exported as a string
    #[serde(default, deserialize_with = "deserialize_count")]
    pub retweet_count: u64,
    /// BCP 47 language code, or `None` when missing
    #[serde(default)]
    pub lang: Option<String>,
    /// Hashtags, mentions, URLs and media
    #[serde(default)]
    pub entities: Entities,
    /// Present only on tweets with attached photos or video; a `null`
    /// value still counts as present
    #[serde(default, deserialize_with = "deserialize_present")]
    pub extended_entities: Option<Value>,
}

/// The `entities` object of a tweet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub hashtags: Vec<HashtagEntity>,
    #[serde(default)]
    pub user_mentions: Vec<MentionEntity>,
    #[serde(default)]
    pub urls: Vec<UrlEntity>,
    #[serde(default)]
    pub media: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HashtagEntity {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MentionEntity {
    pub screen_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlEntity {
    /// The `t.co` short link
    #[serde(default)]
    pub url: Option<String>,
    /// The original link the short link points to
    #[serde(default)]
    pub expanded_url: Option<String>,
}

impl UrlEntity {
    /// Returns the expanded URL, falling back to the short link.
    pub fn target(&self) -> Option<&str> {
        self.expanded_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or(self.url.as_deref())
            .filter(|u| !u.is_empty())
    }
}

impl RawTweet {
    /// Returns `true` if the tweet carries photos or video.
    pub fn has_media(&self) -> bool {
        self.extended_entities.is_some() || !self.entities.media.is_empty()
    }

    /// Returns the language code, or `"und"` when missing.
    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(UNDETERMINED_LANG)
    }
}

/// Counts are exported as strings (`"12"`) but older tools write numbers.
fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Count::Number(n)) => Ok(n),
        Some(Count::Text(s)) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid count '{}'", s))),
    }
}

/// Maps any present value, including `null`, to `Some`.
fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Reads and parses a `tweets.js` file.
pub fn load_tweets(path: &Path) -> Result<Vec<RawTweet>> {
    let content = fs::read_to_string(path)?;
    parse_with_path(&content, Some(path))
}

/// Parses the content of a `tweets.js` file.
///
/// Everything before the first `[` (the `window.YTD...` assignment) is
/// ignored.
///
/// ```rust
/// use tweetpack::parsing::twitter::parse_tweets_str;
///
/// let content = r#"window.YTD.tweets.part0 = [
///   {"tweet": {"created_at": "Wed Feb 14 18:30:00 +0000 2024", "full_text": "hello"}}
/// ]"#;
/// let tweets = parse_tweets_str(content)?;
/// assert_eq!(tweets.len(), 1);
/// assert_eq!(tweets[0].lang(), "und");
/// # Ok::<(), tweetpack::TweetpackError>(())
/// ```
pub fn parse_tweets_str(content: &str) -> Result<Vec<RawTweet>> {
    parse_with_path(content, None)
}

fn parse_with_path(content: &str, path: Option<&Path>) -> Result<Vec<RawTweet>> {
    let start = content
        .find('[')
        .ok_or_else(|| TweetpackError::missing_array(path.map(Path::to_path_buf)))?;

    let entries: Vec<TweetEntry> = serde_json::from_str(&content[start..])
        .map_err(|e| TweetpackError::json_parse(e, path.map(Path::to_path_buf)))?;

    if entries.is_empty() {
        warn!("Archive contains no tweets");
    }
    debug!(count = entries.len(), "Parsed tweet array");

    Ok(entries.into_iter().map(|entry| entry.tweet).collect())
}

/// Parses a `created_at` value.
///
/// The weekday must be a valid abbreviation but is not checked against the
/// date.
///
/// ```rust
/// use tweetpack::parsing::twitter::parse_created_at;
///
/// let ts = parse_created_at("Wed Feb 14 18:30:00 +0000 2024")?;
/// assert_eq!(ts.format("%Y-%m-%d").to_string(), "2024-02-14");
/// # Ok::<(), tweetpack::TweetpackError>(())
/// ```
pub fn parse_created_at(value: &str) -> Result<DateTime<FixedOffset>> {
    let (weekday, rest) = value
        .split_once(' ')
        .ok_or_else(|| TweetpackError::invalid_timestamp(value))?;
    if !WEEKDAYS.iter().any(|day| day.eq_ignore_ascii_case(weekday)) {
        return Err(TweetpackError::invalid_timestamp(value));
    }

    DateTime::parse_from_str(rest, CREATED_AT_TAIL_FORMAT)
        .map_err(|_| TweetpackError::invalid_timestamp(value))
}

/// Extracts the host of `link`, without a leading `www.`.
///
/// Internationalized hosts are returned in Unicode form rather than
/// punycode. Returns `None` when the link can't be parsed or has no host.
pub fn link_host(link: &str) -> Option<String> {
    let parsed = match Url::parse(link) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(link, error = %e, "Skipping unparseable URL");
            return None;
        }
    };

    let host = parsed.host_str()?;
    let (unicode, result) = idna::domain_to_unicode(host);
    let host = if result.is_ok() { unicode.as_str() } else { host };
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}
