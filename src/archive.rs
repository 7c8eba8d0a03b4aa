//! Locating the records file inside an archive export.
//!
//! A Twitter/X export arrives either as the downloaded zip or as the folder
//! it was unpacked into. [`locate`] accepts both and returns an
//! [`ArchiveSource`] pointing at the directory that holds `tweets.js`.
//!
//! Zip archives are unpacked into a temporary directory owned by the
//! returned source. The directory is deleted when the source is dropped,
//! so keep it alive until the records file has been read.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tweetpack::archive;
//! use tweetpack::parsing::load_tweets;
//!
//! let source = archive::locate(Path::new("twitter-2024-02-14.zip"), "tweets.js")?;
//! let tweets = load_tweets(&source.records_path())?;
//! drop(source); // removes the extracted files
//! # Ok::<(), tweetpack::TweetpackError>(())
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::info;
use walkdir::WalkDir;

use crate::error::{Result, TweetpackError};

/// Conventional subdirectory holding the data files of an export.
pub const DATA_DIR: &str = "data";

/// Where the records file was found.
#[derive(Debug)]
pub struct ArchiveSource {
    data_dir: PathBuf,
    records_file: String,
    // Dropped last; removes the extracted tree.
    scratch: Option<TempDir>,
}

impl ArchiveSource {
    /// Directory containing the records file.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the records file.
    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join(&self.records_file)
    }

    /// Returns `true` if the archive was extracted to a temporary directory.
    pub fn is_extracted(&self) -> bool {
        self.scratch.is_some()
    }
}

/// Finds the directory containing `records_file` under `input`.
///
/// - A `.zip` file is extracted and searched recursively.
/// - A directory is checked directly, then its `data/` subdirectory.
///
/// # Errors
///
/// - [`TweetpackError::InvalidInput`] if `input` is neither a zip file nor a
///   directory
/// - [`TweetpackError::NotFound`] if no records file is found
pub fn locate(input: &Path, records_file: &str) -> Result<ArchiveSource> {
    if input.is_file() && is_zip(input) {
        return locate_in_zip(input, records_file);
    }

    if input.is_dir() {
        return locate_in_dir(input, records_file);
    }

    let reason = if input.exists() {
        "expected a .zip archive or an extracted archive directory"
    } else {
        "path does not exist"
    };
    Err(TweetpackError::invalid_input(input, reason))
}

fn is_zip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

fn locate_in_dir(dir: &Path, records_file: &str) -> Result<ArchiveSource> {
    let candidates = [dir.to_path_buf(), dir.join(DATA_DIR)];
    let data_dir = candidates
        .into_iter()
        .find(|candidate| candidate.join(records_file).is_file())
        .ok_or_else(|| TweetpackError::not_found(records_file, dir))?;

    info!("Found {} in {}", records_file, data_dir.display());
    Ok(ArchiveSource {
        data_dir,
        records_file: records_file.to_string(),
        scratch: None,
    })
}

#[cfg(feature = "zip")]
fn locate_in_zip(zip_path: &Path, records_file: &str) -> Result<ArchiveSource> {
    let scratch = tempfile::Builder::new().prefix("tweetpack-").tempdir()?;
    tracing::debug!(
        "Extracting {} into {}",
        zip_path.display(),
        scratch.path().display()
    );

    let file = std::fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    archive.extract(scratch.path())?;

    // On error `scratch` is dropped here and the extracted tree removed.
    let data_dir = find_records_dir(scratch.path(), records_file)
        .ok_or_else(|| TweetpackError::not_found(records_file, zip_path))?;

    info!("Found {} in {}", records_file, data_dir.display());
    Ok(ArchiveSource {
        data_dir,
        records_file: records_file.to_string(),
        scratch: Some(scratch),
    })
}

#[cfg(not(feature = "zip"))]
fn locate_in_zip(zip_path: &Path, _records_file: &str) -> Result<ArchiveSource> {
    Err(TweetpackError::invalid_input(
        zip_path,
        "zip support is disabled; extract the archive and pass the directory",
    ))
}

/// First directory, walking top-down in name order, that contains
/// `records_file`.
fn find_records_dir(root: &Path, records_file: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| entry.file_type().is_file() && entry.file_name() == records_file)
        .and_then(|entry| entry.path().parent().map(Path::to_path_buf))
}
