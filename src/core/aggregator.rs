//! Single-pass aggregation over tweets.
//!
//! An [`Aggregator`] owns every accumulator for one run. Tweets are fed in
//! archive order through [`Aggregator::ingest`]; [`Aggregator::into_report`]
//! consumes it and produces the final [`Report`](super::report::Report).

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::counter::Counter;
use crate::Tweet;
use crate::config::ReportConfig;
use crate::parsing::twitter::link_host;

/// Running sums for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    pub total: u64,
    pub original: u64,
    pub retweet: u64,
}

/// Running sums for one year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyVolume {
    pub total: u64,
    pub original: u64,
    pub retweet: u64,
    pub with_media: u64,
    /// Sum of like counts
    pub favorites: u64,
    /// Sum of retweet counts
    pub retweet_count: u64,
}

/// Compact projection of a tweet kept for the top-tweet rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetSummary {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Text truncated to the configured limit
    pub text: String,
    pub favorites: u64,
    pub retweets: u64,
    pub is_retweet: bool,
    pub has_media: bool,
    /// Links left after domain filtering
    pub url_count: usize,
}

/// Accumulators for one aggregation run.
///
/// ```
/// use tweetpack::Tweet;
/// use tweetpack::config::ReportConfig;
/// use tweetpack::core::Aggregator;
/// use tweetpack::parsing::parse_created_at;
///
/// let ts = parse_created_at("Wed Feb 14 18:30:00 +0000 2024")?;
/// let mut aggregator = Aggregator::new(ReportConfig::default());
/// aggregator.ingest(&Tweet::new(ts, "hello").with_hashtags(["Rust"]));
/// aggregator.ingest(&Tweet::new(ts, "RT @ferris: hi").with_retweet(true));
///
/// let report = aggregator.into_report();
/// assert_eq!(report.total_tweets, 2);
/// assert_eq!(report.retweets, 1);
/// assert_eq!(report.top_hashtags[0].tag, "rust");
/// # Ok::<(), tweetpack::TweetpackError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Aggregator {
    pub(crate) config: ReportConfig,
    pub(crate) hashtags: Counter,
    pub(crate) mentions: Counter,
    pub(crate) domains: Counter,
    pub(crate) languages: Counter,
    pub(crate) hashtags_by_year: BTreeMap<String, Counter>,
    pub(crate) mentions_by_year: BTreeMap<String, Counter>,
    pub(crate) domains_by_year: BTreeMap<String, Counter>,
    pub(crate) monthly: BTreeMap<String, MonthlyVolume>,
    pub(crate) yearly: BTreeMap<String, YearlyVolume>,
    pub(crate) summaries: Vec<TweetSummary>,
    pub(crate) earliest: Option<DateTime<FixedOffset>>,
    pub(crate) latest: Option<DateTime<FixedOffset>>,
}

impl Aggregator {
    /// Creates an aggregator with empty accumulators.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            hashtags: Counter::new(),
            mentions: Counter::new(),
            domains: Counter::new(),
            languages: Counter::new(),
            hashtags_by_year: BTreeMap::new(),
            mentions_by_year: BTreeMap::new(),
            domains_by_year: BTreeMap::new(),
            monthly: BTreeMap::new(),
            yearly: BTreeMap::new(),
            summaries: Vec::new(),
            earliest: None,
            latest: None,
        }
    }

    /// Adds one tweet to every accumulator.
    pub fn ingest(&mut self, tweet: &Tweet) {
        let year = tweet.year();

        for tag in &tweet.hashtags {
            self.hashtags.add(tag);
            self.hashtags_by_year
                .entry(year.clone())
                .or_default()
                .add(tag);
        }

        for account in &tweet.mentions {
            self.mentions.add(account);
            self.mentions_by_year
                .entry(year.clone())
                .or_default()
                .add(account);
        }

        let mut url_count = 0;
        for link in &tweet.urls {
            if let Some(domain) = self.resolve_domain(link) {
                self.domains.add(&domain);
                self.domains_by_year
                    .entry(year.clone())
                    .or_default()
                    .add(&domain);
                url_count += 1;
            }
        }

        self.languages.add(&tweet.lang);

        let month = self.monthly.entry(tweet.year_month()).or_default();
        month.total += 1;
        if tweet.is_retweet {
            month.retweet += 1;
        } else {
            month.original += 1;
        }

        let bucket = self.yearly.entry(year).or_default();
        bucket.total += 1;
        if tweet.is_retweet {
            bucket.retweet += 1;
        } else {
            bucket.original += 1;
        }
        if tweet.has_media {
            bucket.with_media += 1;
        }
        bucket.favorites += tweet.favorites;
        bucket.retweet_count += tweet.retweets;

        if self.earliest.is_none_or(|ts| tweet.created_at < ts) {
            self.earliest = Some(tweet.created_at);
        }
        if self.latest.is_none_or(|ts| tweet.created_at > ts) {
            self.latest = Some(tweet.created_at);
        }

        self.summaries.push(TweetSummary {
            date: tweet.date().format("%Y-%m-%d").to_string(),
            text: tweet.text.chars().take(self.config.text_limit).collect(),
            favorites: tweet.favorites,
            retweets: tweet.retweets,
            is_retweet: tweet.is_retweet,
            has_media: tweet.has_media,
            url_count,
        });
    }

    /// Host of `link` if it counts toward domain statistics.
    ///
    /// Unparseable links and links to excluded domains yield `None`; neither
    /// is an error.
    fn resolve_domain(&self, link: &str) -> Option<String> {
        let host = link_host(link)?;
        if self.config.is_excluded_domain(&host) {
            debug!(link, host = %host, "Skipping excluded domain");
            return None;
        }
        Some(host)
    }

    /// Number of tweets ingested so far.
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    /// Returns `true` if nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Per-tweet projections in ingest order.
    pub fn summaries(&self) -> &[TweetSummary] {
        &self.summaries
    }

    /// Global hashtag counts.
    pub fn hashtags(&self) -> &Counter {
        &self.hashtags
    }

    /// Global mention counts.
    pub fn mentions(&self) -> &Counter {
        &self.mentions
    }

    /// Global domain counts.
    pub fn domains(&self) -> &Counter {
        &self.domains
    }

    /// Language counts.
    pub fn languages(&self) -> &Counter {
        &self.languages
    }
}

/// Aggregates a slice of tweets in one pass.
pub fn aggregate(tweets: &[Tweet], config: ReportConfig) -> Aggregator {
    let mut aggregator = Aggregator::new(config);
    for tweet in tweets {
        aggregator.ingest(tweet);
    }
    debug!(
        tweets = aggregator.len(),
        hashtags = aggregator.hashtags.len(),
        mentions = aggregator.mentions.len(),
        domains = aggregator.domains.len(),
        "Aggregation complete"
    );
    aggregator
}
