//! The aggregated report document.
//!
//! [`Report`] is what gets written to `dashboard_data.json`. Field names and
//! order match the JSON consumed by the dashboard:
//!
//! ```json
//! {
//!   "total_tweets": 3,
//!   "original_tweets": 2,
//!   "retweets": 1,
//!   "with_media": 0,
//!   "with_urls": 1,
//!   "unique_hashtags": 2,
//!   "unique_mentions": 1,
//!   "date_range": {"start": "2024-01-01", "end": "2024-02-14"},
//!   "top_hashtags": [{"tag": "a", "count": 1}],
//!   "top_mentions": [{"account": "ferris", "count": 1}],
//!   "top_domains": [{"domain": "example.com", "count": 1}],
//!   "languages": [{"lang": "en", "count": 3}],
//!   "monthly_volume": {"2024-01": {"total": 1, "original": 1, "retweet": 0}},
//!   "yearly_volume": {"2024": {"total": 3, "original": 2, "retweet": 1, "with_media": 0, "favorites": 9, "retweet_count": 2}},
//!   "hashtags_by_year": {"2024": [{"tag": "a", "count": 1}]},
//!   "mentions_by_year": {},
//!   "domains_by_year": {},
//!   "top_tweets_by_favorites": [{"date": "2024-02-14", "text": "...", "favorites": 9, "retweets": 2}],
//!   "top_tweets_by_retweets": []
//! }
//! ```
//!
//! Maps keyed by month or year serialize in ascending key order. An empty
//! archive has `"date_range": null`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aggregator::{Aggregator, MonthlyVolume, TweetSummary, YearlyVolume};
use super::counter::Counter;

/// First and last tweet dates, `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionCount {
    pub account: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangCount {
    pub lang: String,
    pub count: u64,
}

/// A ranked tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopTweet {
    pub date: String,
    pub text: String,
    pub favorites: u64,
    pub retweets: u64,
}

impl From<&TweetSummary> for TopTweet {
    fn from(summary: &TweetSummary) -> Self {
        Self {
            date: summary.date.clone(),
            text: summary.text.clone(),
            favorites: summary.favorites,
            retweets: summary.retweets,
        }
    }
}

/// The complete aggregated summary of an archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub total_tweets: u64,
    pub original_tweets: u64,
    pub retweets: u64,
    pub with_media: u64,
    pub with_urls: u64,
    pub unique_hashtags: u64,
    pub unique_mentions: u64,
    /// `None` when the archive holds no tweets
    pub date_range: Option<DateRange>,
    pub top_hashtags: Vec<TagCount>,
    pub top_mentions: Vec<MentionCount>,
    pub top_domains: Vec<DomainCount>,
    pub languages: Vec<LangCount>,
    pub monthly_volume: BTreeMap<String, MonthlyVolume>,
    pub yearly_volume: BTreeMap<String, YearlyVolume>,
    pub hashtags_by_year: BTreeMap<String, Vec<TagCount>>,
    pub mentions_by_year: BTreeMap<String, Vec<MentionCount>>,
    pub domains_by_year: BTreeMap<String, Vec<DomainCount>>,
    pub top_tweets_by_favorites: Vec<TopTweet>,
    pub top_tweets_by_retweets: Vec<TopTweet>,
}

impl Aggregator {
    /// Consumes the accumulators and builds the report.
    pub fn into_report(self) -> Report {
        build_report(self)
    }
}

fn ranked<T>(counter: &Counter, n: usize, make: impl Fn(String, u64) -> T) -> Vec<T> {
    counter
        .most_common(n)
        .into_iter()
        .map(|(key, count)| make(key.to_string(), count))
        .collect()
}

fn ranked_by_year<T>(
    counters: &BTreeMap<String, Counter>,
    n: usize,
    make: impl Fn(String, u64) -> T + Copy,
) -> BTreeMap<String, Vec<T>> {
    counters
        .iter()
        .map(|(year, counter)| (year.clone(), ranked(counter, n, make)))
        .collect()
}

/// Top `n` summaries by `key`, descending, ties in ingest order.
fn top_tweets(summaries: &[TweetSummary], n: usize, key: fn(&TweetSummary) -> u64) -> Vec<TopTweet> {
    let mut sorted: Vec<&TweetSummary> = summaries.iter().collect();
    sorted.sort_by_key(|s| std::cmp::Reverse(key(s)));
    sorted.into_iter().take(n).map(TopTweet::from).collect()
}

/// Converts the accumulators of a finished aggregation pass into a [`Report`].
pub fn build_report(aggregator: Aggregator) -> Report {
    let Aggregator {
        config,
        hashtags,
        mentions,
        domains,
        languages,
        hashtags_by_year,
        mentions_by_year,
        domains_by_year,
        monthly,
        yearly,
        summaries,
        earliest,
        latest,
    } = aggregator;

    let total = summaries.len() as u64;
    let originals = summaries.iter().filter(|s| !s.is_retweet).count() as u64;
    let with_media = summaries.iter().filter(|s| s.has_media).count() as u64;
    let with_urls = summaries.iter().filter(|s| s.url_count > 0).count() as u64;

    let date_range = earliest.zip(latest).map(|(start, end)| DateRange {
        start: start.format("%Y-%m-%d").to_string(),
        end: end.format("%Y-%m-%d").to_string(),
    });

    let tag = |tag: String, count: u64| TagCount { tag, count };
    let mention = |account: String, count: u64| MentionCount { account, count };
    let domain = |domain: String, count: u64| DomainCount { domain, count };

    Report {
        total_tweets: total,
        original_tweets: originals,
        retweets: total - originals,
        with_media,
        with_urls,
        unique_hashtags: hashtags.len() as u64,
        unique_mentions: mentions.len() as u64,
        date_range,
        top_hashtags: ranked(&hashtags, config.top_n, tag),
        top_mentions: ranked(&mentions, config.top_n, mention),
        top_domains: ranked(&domains, config.top_n, domain),
        languages: ranked(&languages, config.top_languages, |lang, count| LangCount {
            lang,
            count,
        }),
        monthly_volume: monthly,
        yearly_volume: yearly,
        hashtags_by_year: ranked_by_year(&hashtags_by_year, config.top_per_year, tag),
        mentions_by_year: ranked_by_year(&mentions_by_year, config.top_per_year, mention),
        domains_by_year: ranked_by_year(&domains_by_year, config.top_per_year, domain),
        top_tweets_by_favorites: top_tweets(&summaries, config.top_tweets, |s| s.favorites),
        top_tweets_by_retweets: top_tweets(&summaries, config.top_tweets, |s| s.retweets),
    }
}
