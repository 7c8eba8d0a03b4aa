//! Unified error types for tweetpack.
//!
//! This module provides a single [`TweetpackError`] enum that covers all error
//! cases in the library, following the pattern used by crates like `reqwest`,
//! `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! A malformed URL inside a single tweet is never an error: it is skipped and
//! the rest of the tweet is still counted. Every variant below aborts the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for tweetpack operations.
///
/// # Example
///
/// ```rust
/// use tweetpack::error::Result;
/// use tweetpack::Tweet;
///
/// fn my_function() -> Result<Vec<Tweet>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TweetpackError>;

/// The error type for all tweetpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TweetpackError {
    /// The input path is neither a zip archive nor a directory.
    #[error("{} is not a valid zip file or directory: {reason}", path.display())]
    InvalidInput {
        /// The path that was given
        path: PathBuf,
        /// Why the path was rejected
        reason: String,
    },

    /// The records file could not be located.
    ///
    /// Raised when neither the directory, its `data/` subdirectory, nor any
    /// directory of an extracted archive contains the records file.
    #[error("Could not find {file} in {}", searched.display())]
    NotFound {
        /// Name of the records file (e.g. `tweets.js`)
        file: String,
        /// Where the search started
        searched: PathBuf,
    },

    /// Failed to parse the records file.
    #[error("Failed to parse tweet archive{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A tweet's `created_at` value doesn't match the archive format.
    #[error("Invalid tweet timestamp '{input}'. Expected format: {expected}")]
    Timestamp {
        /// The offending timestamp string
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The records file can't be read
    /// - The output path isn't writable
    /// - The temporary extraction directory can't be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error while writing the report.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The zip archive is corrupt or unsupported.
    #[cfg(feature = "zip")]
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Kinds of parse errors that can occur while loading the records file.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// The file has no `[`, so there is no JSON array to read.
    #[error("no JSON array found (missing '[')")]
    MissingArrayStart,
    /// The array is not valid JSON or a tweet lacks a required field
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TweetpackError {
    /// Creates an invalid input error.
    pub fn invalid_input(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        TweetpackError::InvalidInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a not-found error for the records file.
    pub fn not_found(file: impl Into<String>, searched: impl Into<PathBuf>) -> Self {
        TweetpackError::NotFound {
            file: file.into(),
            searched: searched.into(),
        }
    }

    /// Creates a parse error from a JSON failure.
    pub fn json_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        TweetpackError::Parse {
            source: ParseErrorKind::Json(source),
            path,
        }
    }

    /// Creates a parse error for a file without a JSON array.
    pub fn missing_array(path: Option<PathBuf>) -> Self {
        TweetpackError::Parse {
            source: ParseErrorKind::MissingArrayStart,
            path,
        }
    }

    /// Creates a timestamp error.
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        TweetpackError::Timestamp {
            input: input.into(),
            expected: "Www Mmm DD HH:MM:SS +ZZZZ YYYY",
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        TweetpackError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TweetpackError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, TweetpackError::Parse { .. })
    }

    /// Returns `true` if this is an invalid input error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TweetpackError::InvalidInput { .. })
    }

    /// Returns `true` if the records file was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TweetpackError::NotFound { .. })
    }

    /// Returns `true` if this is a tweet timestamp error.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, TweetpackError::Timestamp { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, TweetpackError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
