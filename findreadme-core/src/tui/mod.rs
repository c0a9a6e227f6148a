//! TUI module for the terminal selection menu using Ratatui
//!
//! Provides a full-screen menu with arrow key navigation that always hands
//! the terminal back in its original mode.

mod error;
pub mod screens;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use error::MenuError;
pub use screens::SelectionMenu;
pub use terminal::{
    CrosstermKeys, KeySource, MenuInput, NavAction, RawMode, TerminalMode, TerminalSession,
    read_input,
};
pub use theme::Palette;
