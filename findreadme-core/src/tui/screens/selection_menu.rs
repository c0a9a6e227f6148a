//! Selection menu screen

use crate::menu::{MenuDescription, MenuResult, SelectionState};
use crate::tui::error::MenuError;
use crate::tui::terminal::{
    CrosstermKeys, KeySource, MenuInput, NavAction, TerminalMode, TerminalSession,
};
use crate::tui::widgets::{MenuView, ensure_fits};
use ratatui::backend::Backend;
use tracing::{debug, info, trace};

/// Runs one menu display and produces exactly one [`MenuResult`]
pub struct SelectionMenu<'a> {
    menu: &'a MenuDescription,
    state: SelectionState,
}

impl<'a> SelectionMenu<'a> {
    pub fn new(menu: &'a MenuDescription) -> Self {
        Self {
            menu,
            state: SelectionState::for_menu(menu),
        }
    }

    /// Show the menu on the real terminal and wait for a choice
    pub fn display(self) -> Result<MenuResult, MenuError> {
        let session = TerminalSession::acquire()?;
        self.run(session, &mut CrosstermKeys)
    }

    /// Drive the menu on `session` until a terminating key.
    ///
    /// The session is released before returning, whatever the outcome. A
    /// loop error wins over a release error.
    pub fn run<B, M, K>(
        mut self,
        mut session: TerminalSession<B, M>,
        keys: &mut K,
    ) -> Result<MenuResult, MenuError>
    where
        B: Backend,
        B::Error: std::error::Error + Send + Sync + 'static,
        M: TerminalMode,
        K: KeySource,
    {
        info!(
            title = %self.menu.title,
            options = self.menu.options.len(),
            "Showing selection menu"
        );
        let outcome = self.drive(&mut session, keys);
        let released = session.release();
        let result = outcome?;
        released?;
        debug!(exit = result.is_exit(), label = result.label(), "Menu finished");
        Ok(result)
    }

    fn drive<B, M, K>(
        &mut self,
        session: &mut TerminalSession<B, M>,
        keys: &mut K,
    ) -> Result<MenuResult, MenuError>
    where
        B: Backend,
        B::Error: std::error::Error + Send + Sync + 'static,
        M: TerminalMode,
        K: KeySource,
    {
        while !self.state.is_terminated() {
            if self.state.needs_redraw() {
                self.render(session)?;
            }
            match keys.next_input()? {
                MenuInput::Key(key) => {
                    let action = NavAction::from(key);
                    let phase = self.state.apply(action);
                    trace!(?action, ?phase, current = self.state.current(), "Key handled");
                }
                MenuInput::Resize => {
                    trace!("Terminal resized");
                    self.state.invalidate();
                }
            }
        }
        Ok(self.state.resolve(self.menu))
    }

    fn render<B, M>(&mut self, session: &mut TerminalSession<B, M>) -> Result<(), MenuError>
    where
        B: Backend,
        B::Error: std::error::Error + Send + Sync + 'static,
        M: TerminalMode,
    {
        let size = session.terminal_mut().size().map_err(MenuError::backend)?;
        ensure_fits(size, self.menu.options.len())?;

        let palette = *session.palette();
        let view = MenuView::new(self.menu, &self.state, &palette);
        session
            .terminal_mut()
            .draw(|frame| view.render(frame, frame.area()))
            .map_err(MenuError::backend)?;
        self.state.mark_rendered();
        Ok(())
    }
}
