//! JSON report writer.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::core::report::Report;
use crate::error::Result;

/// Writes the report to `output_path` as indented JSON.
///
/// The JSON goes to a temporary file next to `output_path`, which is renamed
/// into place only after the write succeeds. A failed run never leaves a
/// partial file at `output_path`.
pub fn write_json(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let json = to_json(report)?;

    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    file.persist(output_path).map_err(|e| e.error)?;
    Ok(())
}

/// Converts the report to an indented JSON string (2 spaces).
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tweet;
    use crate::config::ReportConfig;
    use crate::core::aggregator::aggregate;
    use crate::parsing::twitter::parse_created_at;
    use tempfile::tempdir;

    fn sample_report() -> Report {
        let ts = parse_created_at("Wed Feb 14 18:30:00 +0000 2024").unwrap();
        let tweets = vec![
            Tweet::new(ts, "Hello #rust").with_hashtags(["rust"]).with_counts(3, 1),
            Tweet::new(ts, "RT @ferris: crabs").with_retweet(true),
        ];
        aggregate(&tweets, ReportConfig::default()).into_report()
    }

    #[test]
    fn test_to_json_indented() {
        let json = to_json(&sample_report()).unwrap();
        assert!(json.starts_with("{\n  \"total_tweets\": 2,"));
        assert!(json.contains(r#""tag": "rust""#));
        assert!(json.contains(r#""start": "2024-02-14""#));
    }

    #[test]
    fn test_write_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dashboard_data.json");

        let report = sample_report();
        write_json(&report, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Report = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_write_json_bad_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = write_json(&sample_report(), &path).unwrap_err();
        assert!(err.is_io());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_json_replaces_existing_without_leftovers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dashboard_data.json");
        std::fs::write(&path, "stale").unwrap();

        write_json(&sample_report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with('{'));
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_output() {
        let dir = tempdir().unwrap();
        // A directory at the destination makes the final rename fail
        let path = dir.path().join("dashboard_data.json");
        std::fs::create_dir(&path).unwrap();

        assert!(write_json(&sample_report(), &path).unwrap_err().is_io());
        assert!(path.is_dir());
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(
            to_json(&sample_report()).unwrap(),
            to_json(&sample_report()).unwrap()
        );
    }
}
