//! Reusable TUI widgets
//!
//! - [`MenuView`] - bordered, numbered option list with one highlighted entry

mod menu;

pub use menu::{MIN_COLS, MenuView, ensure_fits, entry_line, required_rows};
