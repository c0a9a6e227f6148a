//! What to do with a scan result

use super::discovery::{ReadmeFile, SearchContext};
use super::labels::build_menu;
use crate::cli::RunMode;
use crate::menu::MenuDescription;
use std::path::PathBuf;

/// Next step after scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Nothing matched
    NotFound,
    /// Open this file without asking
    Open(PathBuf),
    /// Let the user choose. Option `i` of the menu is `files[i]`.
    Choose(MenuDescription),
}

/// Decide the next step. `files` must be ordered newest first.
pub fn plan(files: &[ReadmeFile], mode: RunMode, context: &SearchContext) -> Plan {
    match (files, mode) {
        ([], _) => Plan::NotFound,
        ([only], _) => Plan::Open(only.path.clone()),
        ([newest, ..], RunMode::Recent) => Plan::Open(newest.path.clone()),
        (_, RunMode::List) => Plan::Choose(build_menu(files, context)),
    }
}
