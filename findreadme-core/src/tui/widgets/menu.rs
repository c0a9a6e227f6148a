//! Menu widget for the selection screen

use super::super::error::MenuError;
use super::super::theme::Palette;
use crate::menu::{MenuDescription, SelectionState};
use ratatui::{
    Frame,
    layout::{Rect, Size},
    style::Style,
    text::Span,
    widgets::{Block, Paragraph},
};

const TITLE_ROW: u16 = 2;
const SUBTITLE_ROW: u16 = 4;
const FIRST_ENTRY_ROW: u16 = 5;
const TEXT_COL: u16 = 2;
const ENTRY_COL: u16 = 4;

/// Narrowest terminal the menu will draw into
pub const MIN_COLS: usize = 20;

/// Rows needed for `option_count` options, the exit entry and the border
pub fn required_rows(option_count: usize) -> usize {
    FIRST_ENTRY_ROW as usize + option_count + 2
}

/// Fail when the menu cannot be drawn in full
pub fn ensure_fits(size: Size, option_count: usize) -> Result<(), MenuError> {
    let required_rows = required_rows(option_count);
    if (size.height as usize) < required_rows || (size.width as usize) < MIN_COLS {
        return Err(MenuError::TerminalTooSmall {
            required_rows,
            rows: size.height,
            required_cols: MIN_COLS,
            cols: size.width,
        });
    }
    Ok(())
}

/// Text of one numbered entry, `ordinal` counting from 1
pub fn entry_line(ordinal: usize, label: &str) -> String {
    format!("{ordinal:2} - {label}")
}

/// Read-only view of a menu and its selection
pub struct MenuView<'a> {
    pub menu: &'a MenuDescription,
    pub state: &'a SelectionState,
    pub palette: &'a Palette,
}

impl<'a> MenuView<'a> {
    pub fn new(menu: &'a MenuDescription, state: &'a SelectionState, palette: &'a Palette) -> Self {
        Self {
            menu,
            state,
            palette,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let border = Block::bordered().border_style(self.palette.border);
        frame.render_widget(border, area);

        self.put(frame, area, TITLE_ROW, TEXT_COL, &self.menu.title, self.palette.title);
        self.put(
            frame,
            area,
            SUBTITLE_ROW,
            TEXT_COL,
            &self.menu.subtitle,
            self.palette.subtitle,
        );

        for (index, option) in self.menu.options.iter().enumerate() {
            let Some(row) = entry_row(index) else {
                break;
            };
            let style = self.palette.entry(self.state.is_highlighted(index));
            self.put(frame, area, row, ENTRY_COL, &entry_line(index + 1, &option.label), style);
        }

        let exit_index = self.menu.exit_index();
        if let Some(row) = entry_row(exit_index) {
            let style = self.palette.entry(self.state.is_highlighted(exit_index));
            let line = entry_line(exit_index + 1, &self.menu.exit_label());
            self.put(frame, area, row, ENTRY_COL, &line, style);
        }

        if self.state.keys_read() > 0 && area.height >= 3 && area.width >= 5 {
            let indicator = format!("{:3}", self.state.current());
            self.put(
                frame,
                area,
                area.height - 3,
                area.width - 5,
                &indicator,
                self.palette.normal,
            );
        }
    }

    // Draw one line at a position relative to `area`, clipped inside the border
    fn put(
        &self,
        frame: &mut Frame,
        area: Rect,
        row: u16,
        col: u16,
        text: &str,
        style: Style,
    ) {
        if row == 0 || row >= area.height.saturating_sub(1) || col >= area.width.saturating_sub(1) {
            return;
        }
        let target = Rect {
            x: area.x + col,
            y: area.y + row,
            width: area.width - col - 1,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), target);
    }
}

fn entry_row(index: usize) -> Option<u16> {
    u16::try_from(index)
        .ok()
        .and_then(|index| index.checked_add(FIRST_ENTRY_ROW))
}
