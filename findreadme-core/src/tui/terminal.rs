//! Terminal session and key input for the selection menu

use super::error::MenuError;
use super::theme::Palette;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, warn};

/// Switches the terminal device in and out of menu mode
pub trait TerminalMode {
    fn enter(&mut self) -> io::Result<()>;
    fn leave(&mut self) -> io::Result<()>;
}

/// Raw mode on stdout: no echo, no line buffering, no signal keys, cursor
/// hidden, drawing on the alternate screen.
#[derive(Debug, Default)]
pub struct RawMode;

impl TerminalMode for RawMode {
    fn enter(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        // every step runs even if an earlier one failed
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), Show, LeaveAlternateScreen);
        raw.and(screen)
    }
}

/// Exclusive control of the terminal for one menu display.
///
/// Restoration happens exactly once: through [`TerminalSession::release`]
/// or, if that was never called, when the session is dropped.
pub struct TerminalSession<B, M = RawMode>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    M: TerminalMode,
{
    terminal: Terminal<B>,
    mode: M,
    palette: Palette,
    active: bool,
}

impl TerminalSession<CrosstermBackend<Stdout>, RawMode> {
    /// Take over the real terminal
    pub fn acquire() -> Result<Self, MenuError> {
        Self::with_mode(CrosstermBackend::new(io::stdout()), RawMode)
    }
}

impl<B, M> TerminalSession<B, M>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    M: TerminalMode,
{
    pub fn with_mode(backend: B, mut mode: M) -> Result<Self, MenuError> {
        if let Err(err) = mode.enter() {
            let _ = mode.leave();
            return Err(err.into());
        }
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = mode.leave();
                return Err(MenuError::backend(err));
            }
        };

        let mut session = Self {
            terminal,
            mode,
            palette: Palette::default(),
            active: true,
        };
        session.terminal.clear().map_err(MenuError::backend)?;
        debug!("Terminal session acquired");
        Ok(session)
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Hand the terminal back to the shell
    pub fn release(mut self) -> Result<(), MenuError> {
        self.restore()
    }

    fn restore(&mut self) -> Result<(), MenuError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let cleared = self.terminal.clear();
        let shown = self.terminal.show_cursor();
        self.mode.leave()?;
        cleared.map_err(MenuError::backend)?;
        shown.map_err(MenuError::backend)?;
        debug!("Terminal session released");
        Ok(())
    }
}

impl<B, M> Drop for TerminalSession<B, M>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    M: TerminalMode,
{
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Input the menu loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Key(KeyEvent),
    /// The terminal changed size and the frame must be redrawn
    Resize,
}

/// Source of input for the menu loop
pub trait KeySource {
    /// Block until the next key press or resize arrives
    fn next_input(&mut self) -> io::Result<MenuInput>;
}

/// Input read from the real terminal
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_input(&mut self) -> io::Result<MenuInput> {
        read_input()
    }
}

/// Read a key press or resize event (blocking)
pub fn read_input() -> io::Result<MenuInput> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(MenuInput::Key(key)),
            Event::Resize(..) => return Ok(MenuInput::Resize),
            _ => {}
        }
    }
}

/// Navigation action from key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Up,
    Down,
    Confirm,
    Cancel,
    None,
}

impl From<KeyEvent> for NavAction {
    fn from(key: KeyEvent) -> Self {
        // raw mode swallows SIGINT, so Ctrl+C and Ctrl+Q cancel like q
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => NavAction::Cancel,
                _ => NavAction::None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => NavAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavAction::Down,
            KeyCode::Enter => NavAction::Confirm,
            KeyCode::Char('q') => NavAction::Cancel,
            _ => NavAction::None,
        }
    }
}
