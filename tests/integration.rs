//! Integration tests for the archive pipeline with real files

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{TempDir, tempdir};
use tweetpack::archive;
use tweetpack::core::{DomainCount, TagCount, to_json};
use tweetpack::parsing::load_tweets;
use tweetpack::prelude::*;
use zip::write::SimpleFileOptions;

const SCENARIO: &str = r#"window.YTD.tweets.part0 = [
  {
    "tweet": {
      "created_at": "Mon Jan 01 10:00:00 +0000 2024",
      "full_text": "Starting the year with #a and #b",
      "favorite_count": "5",
      "retweet_count": "1",
      "lang": "en",
      "entities": {
        "hashtags": [{"text": "a", "indices": ["34", "36"]}, {"text": "b", "indices": ["41", "43"]}],
        "user_mentions": [],
        "urls": []
      }
    }
  },
  {
    "tweet": {
      "created_at": "Tue Jan 02 11:00:00 +0000 2024",
      "full_text": "RT @ferris: crabs all the way down",
      "favorite_count": "0",
      "retweet_count": "12",
      "lang": "en",
      "entities": {
        "hashtags": [],
        "user_mentions": [{"screen_name": "ferris", "name": "Ferris"}],
        "urls": []
      }
    }
  },
  {
    "tweet": {
      "created_at": "Wed Jan 03 12:00:00 +0000 2024",
      "full_text": "Read this https://t.co/abc",
      "favorite_count": "3",
      "retweet_count": "0",
      "lang": "en",
      "entities": {
        "hashtags": [],
        "user_mentions": [],
        "urls": [{"url": "https://t.co/abc", "expanded_url": "https://www.example.com/post"}]
      }
    }
  }
]"#;

fn archive_dir(content: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data").join("tweets.js"), content).unwrap();
    dir
}

fn write_zip(path: &Path, files: &[(&str, &str)]) {
    let file = fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for (name, content) in files {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

fn run(input: &Path) -> Report {
    let (report, _) =
        process_archive(input, &ReportConfig::default(), &FilterConfig::new()).unwrap();
    report
}

// ============================================================================
// Directory input
// ============================================================================

#[test]
fn test_scenario_from_directory() {
    let dir = archive_dir(SCENARIO);
    let report = run(dir.path());

    assert_eq!(report.total_tweets, 3);
    assert_eq!(report.original_tweets, 2);
    assert_eq!(report.retweets, 1);
    assert_eq!(report.with_urls, 1);
    assert_eq!(report.unique_hashtags, 2);
    assert_eq!(report.unique_mentions, 1);
    assert_eq!(
        report.top_hashtags,
        vec![
            TagCount {
                tag: "a".into(),
                count: 1
            },
            TagCount {
                tag: "b".into(),
                count: 1
            },
        ]
    );
    assert_eq!(
        report.top_domains,
        vec![DomainCount {
            domain: "example.com".into(),
            count: 1
        }]
    );

    let range = report.date_range.unwrap();
    assert_eq!(range.start, "2024-01-01");
    assert_eq!(range.end, "2024-01-03");

    let month = &report.monthly_volume["2024-01"];
    assert_eq!((month.total, month.original, month.retweet), (3, 2, 1));

    let year = &report.yearly_volume["2024"];
    assert_eq!(year.favorites, 8);
    assert_eq!(year.retweet_count, 13);

    assert_eq!(report.top_tweets_by_favorites[0].favorites, 5);
    assert_eq!(report.top_tweets_by_retweets[0].retweets, 12);
    assert_eq!(report.languages[0].lang, "en");
    assert_eq!(report.languages[0].count, 3);
}

#[test]
fn test_records_directly_in_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tweets.js"), SCENARIO).unwrap();

    assert_eq!(run(dir.path()).total_tweets, 3);
}

#[test]
fn test_missing_records_file() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data").join("like.js"), "[]").unwrap();

    let err = process_archive(dir.path(), &ReportConfig::default(), &FilterConfig::new())
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("tweets.js"));
}

#[test]
fn test_nonexistent_input() {
    let dir = tempdir().unwrap();
    let err = process_archive(
        &dir.path().join("missing.zip"),
        &ReportConfig::default(),
        &FilterConfig::new(),
    )
    .unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_custom_records_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tweets-part1.js"), SCENARIO).unwrap();

    let config = ReportConfig::new().with_records_file("tweets-part1.js");
    let (report, _) = process_archive(dir.path(), &config, &FilterConfig::new()).unwrap();
    assert_eq!(report.total_tweets, 3);
}

// ============================================================================
// Zip input
// ============================================================================

#[test]
fn test_scenario_from_zip() {
    let dir = tempdir().unwrap();
    let zip_path = dir.path().join("twitter-2024-01-03.zip");
    write_zip(
        &zip_path,
        &[
            ("Your archive.html", "<html></html>"),
            ("data/account.js", "window.YTD.account.part0 = []"),
            ("data/tweets.js", SCENARIO),
        ],
    );

    let from_zip = run(&zip_path);
    let from_dir = run(archive_dir(SCENARIO).path());
    assert_eq!(from_zip, from_dir);
}

#[test]
fn test_zip_with_top_level_folder() {
    let dir = tempdir().unwrap();
    let zip_path = dir.path().join("export.ZIP");
    write_zip(&zip_path, &[("twitter-archive/data/tweets.js", SCENARIO)]);

    assert_eq!(run(&zip_path).total_tweets, 3);
}

#[test]
fn test_zip_extraction_is_cleaned_up() {
    let dir = tempdir().unwrap();
    let zip_path = dir.path().join("export.zip");
    write_zip(&zip_path, &[("data/tweets.js", SCENARIO)]);

    let source = archive::locate(&zip_path, "tweets.js").unwrap();
    let extracted = source.data_dir().to_path_buf();
    let raw = load_tweets(&source.records_path()).unwrap();
    assert_eq!(raw.len(), 3);

    drop(source);
    assert!(!extracted.exists());
}

#[test]
fn test_zip_without_records() {
    let dir = tempdir().unwrap();
    let zip_path = dir.path().join("export.zip");
    write_zip(&zip_path, &[("data/like.js", "[]")]);

    let err = process_archive(&zip_path, &ReportConfig::default(), &FilterConfig::new())
        .unwrap_err();
    assert!(err.is_not_found());
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_archive() {
    let dir = archive_dir("window.YTD.tweets.part0 = []");
    let report = run(dir.path());

    assert_eq!(report.total_tweets, 0);
    assert!(report.date_range.is_none());
    assert!(report.top_hashtags.is_empty());
    assert!(report.monthly_volume.is_empty());
    assert!(report.top_tweets_by_favorites.is_empty());

    let json = to_json(&report).unwrap();
    assert!(json.contains("\"date_range\": null"));
}

#[test]
fn test_platform_links_only() {
    let dir = archive_dir(
        r#"[{"tweet": {
            "created_at": "Wed Feb 14 18:30:00 +0000 2024",
            "full_text": "see thread",
            "entities": {"urls": [
                {"url": "https://t.co/1", "expanded_url": "https://twitter.com/ferris/status/1"},
                {"url": "https://t.co/2", "expanded_url": "https://mobile.x.com/ferris/status/2"}
            ]}
        }}]"#,
    );
    let report = run(dir.path());

    assert_eq!(report.with_urls, 0);
    assert!(report.top_domains.is_empty());
    assert!(report.domains_by_year.is_empty());
}

#[test]
fn test_missing_optional_fields() {
    let dir = archive_dir(
        r#"[{"tweet": {"created_at": "Wed Feb 14 18:30:00 +0000 2024", "full_text": "bare"}}]"#,
    );
    let report = run(dir.path());

    assert_eq!(report.total_tweets, 1);
    assert_eq!(report.with_media, 0);
    assert_eq!(report.languages[0].lang, "und");
    assert_eq!(report.yearly_volume["2024"].favorites, 0);
}

#[test]
fn test_malformed_records() {
    let dir = archive_dir("window.YTD.tweets.part0 = [{\"tweet\": {");
    let err = process_archive(dir.path(), &ReportConfig::default(), &FilterConfig::new())
        .unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_bad_timestamp_aborts_run() {
    let dir = archive_dir(
        r#"[{"tweet": {"created_at": "2024-02-14T18:30:00Z", "full_text": "iso date"}}]"#,
    );
    let err = process_archive(dir.path(), &ReportConfig::default(), &FilterConfig::new())
        .unwrap_err();
    assert!(err.is_timestamp());
}

#[test]
fn test_date_filter() {
    let dir = archive_dir(SCENARIO);
    let filter = FilterConfig::new()
        .with_date_from("2024-01-02")
        .unwrap()
        .with_date_to("2024-01-02")
        .unwrap();
    let (report, stats) = process_archive(dir.path(), &ReportConfig::default(), &filter).unwrap();

    assert_eq!(stats.parsed, 3);
    assert_eq!(stats.filtered_out(), 2);
    assert_eq!(report.total_tweets, 1);
    assert_eq!(report.retweets, 1);
}

#[test]
fn test_write_json_is_deterministic() {
    let dir = archive_dir(SCENARIO);
    let out = tempdir().unwrap();
    let first = out.path().join("first.json");
    let second = out.path().join("second.json");

    write_json(&run(dir.path()), &first).unwrap();
    write_json(&run(dir.path()), &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

    let parsed: Report = serde_json::from_slice(&fs::read(&first).unwrap()).unwrap();
    assert_eq!(parsed, run(dir.path()));
}
