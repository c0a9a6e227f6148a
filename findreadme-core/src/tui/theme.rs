//! TUI Theme - styles used by the selection menu
//!
//! The highlight is plain black on white so it reads as inverted video on
//! any terminal palette.

use ratatui::style::{Color, Modifier, Style};

/// Highlighted entry foreground
pub const HIGHLIGHT_FG: Color = Color::Black;

/// Highlighted entry background
pub const HIGHLIGHT_BG: Color = Color::White;

/// Highlighted/selected item style
pub fn highlight() -> Style {
    Style::default().fg(HIGHLIGHT_FG).bg(HIGHLIGHT_BG)
}

/// Normal text style
pub fn normal() -> Style {
    Style::default()
}

/// Header/title style
pub fn title() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Subtitle style
pub fn subtitle() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border() -> Style {
    Style::default()
}

/// Styles owned by a terminal session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub highlight: Style,
    pub normal: Style,
    pub title: Style,
    pub subtitle: Style,
    pub border: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            highlight: highlight(),
            normal: normal(),
            title: title(),
            subtitle: subtitle(),
            border: border(),
        }
    }
}

impl Palette {
    /// Style for an entry, highlighted or not
    pub fn entry(&self, highlighted: bool) -> Style {
        if highlighted {
            self.highlight
        } else {
            self.normal
        }
    }
}
