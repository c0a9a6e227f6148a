//! MenuView rendering tests

use crate::support::menu_abc;
use findreadme_core::menu::{MenuDescription, SelectionState};
use findreadme_core::tui::widgets::{MenuView, ensure_fits, entry_line, required_rows};
use findreadme_core::tui::{MenuError, NavAction, Palette};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Size;
use ratatui::style::Color;

fn draw(menu: &MenuDescription, state: &SelectionState, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let palette = Palette::default();
    let view = MenuView::new(menu, state, &palette);
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

#[test]
fn test_entry_line_format() {
    assert_eq!(entry_line(1, "README"), " 1 - README");
    assert_eq!(entry_line(12, "Exit"), "12 - Exit");
}

#[test]
fn test_layout_rows() {
    let menu = menu_abc();
    let state = SelectionState::for_menu(&menu);
    let buffer = draw(&menu, &state, 40, 12);

    assert!(row_text(&buffer, 0).starts_with('┌'));
    assert!(row_text(&buffer, 11).starts_with('└'));
    assert!(row_text(&buffer, 2).contains("│ Select readme file"));
    assert!(row_text(&buffer, 4).contains("│ Readme files found:"));
    assert!(row_text(&buffer, 5).contains("│    1 - A"));
    assert!(row_text(&buffer, 6).contains("│    2 - B"));
    assert!(row_text(&buffer, 7).contains("│    3 - C"));
    assert!(row_text(&buffer, 8).contains("│    4 - Exit"));
}

#[test]
fn test_only_current_entry_is_highlighted() {
    let menu = menu_abc();
    let mut state = SelectionState::for_menu(&menu);
    state.apply(NavAction::Down);
    state.apply(NavAction::Down);
    let buffer = draw(&menu, &state, 40, 12);

    for (row, highlighted) in [(5, false), (6, false), (7, true), (8, false)] {
        let cell = &buffer[(5, row)];
        if highlighted {
            assert_eq!(cell.bg, Color::White, "row {row}");
            assert_eq!(cell.fg, Color::Black, "row {row}");
        } else {
            assert_eq!(cell.bg, Color::Reset, "row {row}");
        }
    }
}

#[test]
fn test_exit_entry_highlight() {
    let menu = menu_abc();
    let mut state = SelectionState::for_menu(&menu);
    state.apply(NavAction::Up);
    let buffer = draw(&menu, &state, 40, 12);

    assert_eq!(buffer[(5, 8)].bg, Color::White);
    assert_eq!(buffer[(5, 5)].bg, Color::Reset);
}

#[test]
fn test_parent_changes_exit_label() {
    let menu = MenuDescription::new("Title", "Sub", vec![]).with_parent("Main");
    let state = SelectionState::for_menu(&menu);
    let buffer = draw(&menu, &state, 60, 8);

    assert!(row_text(&buffer, 5).contains(" 1 - Return to previous menu (Main)"));
    assert_eq!(buffer[(5, 5)].bg, Color::White);
}

#[test]
fn test_index_indicator_after_first_key() {
    let menu = menu_abc();
    let mut state = SelectionState::for_menu(&menu);

    let before = draw(&menu, &state, 40, 12);
    assert!(!row_text(&before, 9).contains('0'));

    state.apply(NavAction::Down);
    let after = draw(&menu, &state, 40, 12);
    // height - 3 = row 9, width - 5 = column 35
    assert_eq!(
        row_text(&after, 9).chars().skip(35).take(3).collect::<String>(),
        "  1"
    );
}

#[test]
fn test_required_rows() {
    assert_eq!(required_rows(0), 7);
    assert_eq!(required_rows(3), 10);
}

#[test]
fn test_ensure_fits() {
    assert!(ensure_fits(Size::new(40, 10), 3).is_ok());
    assert!(matches!(
        ensure_fits(Size::new(40, 9), 3),
        Err(MenuError::TerminalTooSmall {
            required_rows: 10,
            rows: 9,
            ..
        })
    ));
    assert!(matches!(
        ensure_fits(Size::new(19, 40), 3),
        Err(MenuError::TerminalTooSmall { cols: 19, .. })
    ));
}
