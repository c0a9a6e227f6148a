//! README Scanner
//!
//! This module walks a directory tree and collects README-like files.
//!
//! # Overview
//!
//! The scanner performs the following steps:
//! 1. Validate that the search root exists
//! 2. Walk the tree recursively without descending into symlinked directories
//! 3. Keep files, or links to files, whose name looks like a README
//! 4. Sort the matches newest first by modification time
//!
//! Entries that cannot be read are logged and counted, never dropped
//! silently.
//!
//! # Example
//!
//! ```ignore
//! use findreadme_core::discovery::{scanner, SearchContext};
//!
//! let report = scanner::scan(&SearchContext::current_dir()?)?;
//! for file in &report.files {
//!     println!("Found: {}", file.path.display());
//! }
//! ```

use super::types::{DiscoveryError, ReadmeFile, ScanReport, SearchContext};
use std::fs;
use std::io;
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

/// Scan the context root for README-like files.
///
/// # Arguments
///
/// * `context` - Search context holding the root directory
///
/// # Returns
///
/// A [`ScanReport`] with matches ordered newest first. Files with equal
/// modification times keep the walk order, which is sorted by file name.
///
/// # Errors
///
/// Returns `DiscoveryError` if:
/// - The root does not exist or is not a directory
/// - The root itself cannot be read
pub fn scan(context: &SearchContext) -> Result<ScanReport, DiscoveryError> {
    let root = context.root();

    info!(path = %root.display(), "Scanning for readme files");

    if !root.is_dir() {
        warn!(path = %root.display(), "Search root not found");
        return Err(DiscoveryError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut report = ScanReport::default();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                warn!(path = %root.display(), error = %err, "Failed to read search root");
                return Err(DiscoveryError::ReadError {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!(error = %err, "Failed to read directory entry, skipping");
                report.skipped += 1;
                continue;
            }
        };

        let file_type = entry.file_type();
        if !file_type.is_file() && !file_type.is_symlink() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !is_readme_name(&name) {
            trace!(path = %entry.path().display(), "Skipping non-readme file");
            continue;
        }

        // symlinks are judged by their target, directories behind them are not entered
        let metadata = if file_type.is_symlink() {
            fs::metadata(entry.path())
        } else {
            entry.metadata().map_err(io::Error::from)
        };
        let metadata = match metadata {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(path = %entry.path().display(), error = %err, "Failed to read metadata, skipping");
                report.skipped += 1;
                continue;
            }
        };
        if !metadata.is_file() {
            trace!(path = %entry.path().display(), "Skipping link to non-file");
            continue;
        }
        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(err) => {
                warn!(path = %entry.path().display(), error = %err, "Modification time unavailable, skipping");
                report.skipped += 1;
                continue;
            }
        };

        debug!(path = %entry.path().display(), "Found readme file");
        report
            .files
            .push(ReadmeFile::new(entry.into_path(), modified));
    }

    sort_newest_first(&mut report.files);

    info!(
        count = report.files.len(),
        skipped = report.skipped,
        path = %root.display(),
        "Readme scan complete"
    );

    Ok(report)
}

/// Check whether a file name looks like a README.
///
/// Case-insensitive. Matches names starting with `READ`, or ending with
/// `README`, `README.TXT` or `.ME`.
pub fn is_readme_name(name: &str) -> bool {
    let upper = name.to_uppercase();
    upper.starts_with("READ")
        || upper.ends_with("README")
        || upper.ends_with("README.TXT")
        || upper.ends_with(".ME")
}

/// Order files by modification time, newest first. Stable.
pub fn sort_newest_first(files: &mut [ReadmeFile]) {
    files.sort_by(|a, b| b.modified.cmp(&a.modified));
}
