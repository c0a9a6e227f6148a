//! Navigation state machine for the selection menu

use super::types::{MenuDescription, MenuResult};
use crate::tui::NavAction;

/// Where the menu is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    Navigating,
    Confirmed,
    Cancelled,
}

/// Selection state for one menu display.
///
/// The index space is `0..=exit_index`: every real option plus the trailing
/// exit entry. Up and Down wrap around that whole space.
#[derive(Debug, Clone)]
pub struct SelectionState {
    current: usize,
    exit_index: usize,
    phase: MenuPhase,
    keys_read: usize,
    // (index, indicator visible) of the last frame drawn
    rendered: Option<(usize, bool)>,
}

impl SelectionState {
    pub fn new(option_count: usize) -> Self {
        Self {
            current: 0,
            exit_index: option_count,
            phase: MenuPhase::Navigating,
            keys_read: 0,
            rendered: None,
        }
    }

    pub fn for_menu(menu: &MenuDescription) -> Self {
        Self::new(menu.exit_index())
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn exit_index(&self) -> usize {
        self.exit_index
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase != MenuPhase::Navigating
    }

    pub fn keys_read(&self) -> usize {
        self.keys_read
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.current == index
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % (self.exit_index + 1);
    }

    pub fn previous(&mut self) {
        self.current = (self.current + self.exit_index) % (self.exit_index + 1);
    }

    /// Force the exit entry and stop
    pub fn cancel(&mut self) {
        self.current = self.exit_index;
        self.phase = MenuPhase::Cancelled;
    }

    pub fn confirm(&mut self) {
        self.phase = MenuPhase::Confirmed;
    }

    /// Apply one key action. Actions after termination are ignored.
    pub fn apply(&mut self, action: NavAction) -> MenuPhase {
        if self.is_terminated() {
            return self.phase;
        }
        self.keys_read += 1;
        match action {
            NavAction::Down => self.next(),
            NavAction::Up => self.previous(),
            NavAction::Cancel => self.cancel(),
            NavAction::Confirm => self.confirm(),
            NavAction::None => {}
        }
        self.phase
    }

    /// True when the visible frame no longer matches the state
    pub fn needs_redraw(&self) -> bool {
        self.rendered != Some((self.current, self.keys_read > 0))
    }

    pub fn mark_rendered(&mut self) {
        self.rendered = Some((self.current, self.keys_read > 0));
    }

    /// Forget the last frame, e.g. after a resize. Does not count as a key.
    pub fn invalidate(&mut self) {
        self.rendered = None;
    }

    /// Map the current index onto a result. Cancellation always yields the
    /// exit sentinel.
    pub fn resolve(&self, menu: &MenuDescription) -> MenuResult {
        if self.phase == MenuPhase::Cancelled {
            return MenuResult::Exit;
        }
        match menu.options.get(self.current) {
            Some(option) => MenuResult::Selected {
                index: self.current,
                option: option.clone(),
            },
            None => MenuResult::Exit,
        }
    }
}
