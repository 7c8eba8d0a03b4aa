//! Report writers.
//!
//! - [`write_json`] / [`to_json`] - the report as indented JSON
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> tweetpack::Result<()> {
//! use std::path::Path;
//! use tweetpack::config::ReportConfig;
//! use tweetpack::core::{FilterConfig, process_archive};
//! use tweetpack::core::output::write_json;
//!
//! let (report, _) = process_archive(
//!     Path::new("twitter-archive.zip"),
//!     &ReportConfig::default(),
//!     &FilterConfig::new(),
//! )?;
//! write_json(&report, "dashboard_data.json")?;
//! # Ok(())
//! # }
//! ```

mod json_writer;

pub use json_writer::{to_json, write_json};
