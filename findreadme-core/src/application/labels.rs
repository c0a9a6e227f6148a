//! Menu construction from scan results

use super::discovery::{ReadmeFile, SearchContext};
use crate::constants::{LABEL_GAP, MENU_SUBTITLE, MENU_TITLE};
use crate::menu::{MenuDescription, MenuOption};
use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Timestamp layout matching C `ctime`, e.g. `Mon Oct 19 09:05:00 2026`
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Build the README selection menu, keeping the order of `files`.
///
/// Labels are the relative path padded to a shared column followed by the
/// modification time. Payloads carry the full path.
pub fn build_menu(files: &[ReadmeFile], context: &SearchContext) -> MenuDescription {
    let relative: Vec<String> = files
        .iter()
        .map(|file| context.relative(&file.path).display().to_string())
        .collect();
    let width = label_width(&relative);

    let options = files
        .iter()
        .zip(&relative)
        .map(|(file, rel)| {
            MenuOption::command(
                format_label(rel, width, file.modified),
                file.path.display().to_string(),
            )
        })
        .collect();

    MenuDescription::new(MENU_TITLE, MENU_SUBTITLE, options)
}

/// Column width for the path part of every label
pub fn label_width(paths: &[String]) -> usize {
    paths
        .iter()
        .map(|path| path.chars().count())
        .max()
        .unwrap_or(0)
        + LABEL_GAP
}

pub fn format_label(relative: &str, width: usize, modified: SystemTime) -> String {
    format!("{relative:<width$} {}", format_timestamp(modified))
}

pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
