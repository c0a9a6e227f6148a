//! Application constants
//!
//! Single source of truth for menu text and other fixed values.

/// Title of the README selection menu
pub const MENU_TITLE: &str = "Select readme file";

/// Subtitle of the README selection menu
pub const MENU_SUBTITLE: &str = "Readme files found:";

/// Label of the trailing exit entry and of the exit sentinel
pub const EXIT_LABEL: &str = "Exit";

/// Message printed when the scan finds nothing
pub const NOT_FOUND_MESSAGE: &str = "No readme file found!";

/// Extra columns between the relative path and the timestamp in option labels
pub const LABEL_GAP: usize = 5;
