//! End-to-end processing: archive → tweets → report.

use std::path::Path;

use tracing::{debug, info};

use super::aggregator::Aggregator;
use super::filter::FilterConfig;
use super::report::Report;
use crate::Tweet;
use crate::archive;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::parsing::twitter::{RawTweet, load_tweets};

/// Counts gathered while processing, for progress output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Tweets read from the archive.
    pub parsed: usize,
    /// Tweets that passed the filter and were aggregated.
    pub aggregated: usize,
}

impl ProcessingStats {
    /// Tweets dropped by the date filter.
    pub fn filtered_out(&self) -> usize {
        self.parsed - self.aggregated
    }
}

/// Normalizes raw tweets and aggregates those matching `filter`.
///
/// Every tweet's timestamp is validated, including tweets outside the
/// filter window; the first invalid one aborts processing.
pub fn process_tweets(
    raw: Vec<RawTweet>,
    config: &ReportConfig,
    filter: &FilterConfig,
) -> Result<(Report, ProcessingStats)> {
    let mut stats = ProcessingStats {
        parsed: raw.len(),
        aggregated: 0,
    };
    let mut aggregator = Aggregator::new(config.clone());

    for entry in raw {
        let tweet = Tweet::from_raw(entry, config)?;
        if filter.matches(&tweet) {
            aggregator.ingest(&tweet);
        }
    }

    stats.aggregated = aggregator.len();
    debug!(
        parsed = stats.parsed,
        aggregated = stats.aggregated,
        "Processed tweets"
    );

    Ok((aggregator.into_report(), stats))
}

/// Runs the whole pipeline on an archive zip or directory.
///
/// Any temporary extraction directory is removed before this returns,
/// whether it succeeds or fails.
///
/// ```rust,no_run
/// use std::path::Path;
/// use tweetpack::config::ReportConfig;
/// use tweetpack::core::{FilterConfig, process_archive};
///
/// let (report, stats) = process_archive(
///     Path::new("twitter-archive.zip"),
///     &ReportConfig::default(),
///     &FilterConfig::new(),
/// )?;
/// println!("{} tweets, {} aggregated", report.total_tweets, stats.aggregated);
/// # Ok::<(), tweetpack::TweetpackError>(())
/// ```
pub fn process_archive(
    input: &Path,
    config: &ReportConfig,
    filter: &FilterConfig,
) -> Result<(Report, ProcessingStats)> {
    let source = archive::locate(input, &config.records_file)?;
    let raw = load_tweets(&source.records_path())?;
    drop(source);

    info!("Loaded {} tweets", raw.len());
    process_tweets(raw, config, filter)
}
