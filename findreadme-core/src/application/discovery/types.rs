//! Discovery Types
//!
//! This module defines the types used for README discovery: the explicit
//! search context, the files found, and the report of one scan.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Where a scan starts.
///
/// Passed explicitly to everything that needs to know the search root, so
/// nothing depends on the process working directory after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    root: PathBuf,
}

impl SearchContext {
    /// Create a context rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a context rooted at the process working directory.
    pub fn current_dir() -> io::Result<Self> {
        std::env::current_dir().map(Self::new)
    }

    /// The search root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `path` relative to the root.
    ///
    /// Paths outside the root are returned unchanged.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// A README-like file found during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeFile {
    /// Full path to the file
    pub path: PathBuf,
    /// Last modification time
    pub modified: SystemTime,
}

impl ReadmeFile {
    /// Create a new entry.
    pub fn new(path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        Self {
            path: path.into(),
            modified,
        }
    }
}

/// Result of one scan.
///
/// `files` is ordered newest first. `skipped` counts entries that could not
/// be read; each of them was logged when it was skipped.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Matching files, newest first
    pub files: Vec<ReadmeFile>,
    /// Entries skipped because they could not be read
    pub skipped: usize,
}

impl ScanReport {
    /// Check whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Most recently modified match, if any.
    pub fn newest(&self) -> Option<&ReadmeFile> {
        self.files.first()
    }
}

/// Errors that can occur during README discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The search root does not exist or is not a directory
    #[error("Search root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// The search root itself could not be read
    #[error("Failed to read search root {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
