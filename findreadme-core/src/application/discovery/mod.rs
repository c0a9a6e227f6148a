//! README Discovery Module
//!
//! Finds README-like files below a search root and orders them by recency.
//!
//! - **Scanner** (`scanner.rs`): Walks the tree and matches file names
//! - **Types** (`types.rs`): Search context, results and errors

pub mod scanner;
pub mod types;

pub use scanner::{is_readme_name, scan, sort_newest_first};
pub use types::{DiscoveryError, ReadmeFile, ScanReport, SearchContext};
