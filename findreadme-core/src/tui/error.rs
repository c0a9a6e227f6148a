use std::io;
use thiserror::Error;

/// Errors that end a menu display. All of them are fatal for the current
/// invocation and are returned only after the terminal has been restored.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("terminal backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error(
        "terminal is too small for the menu: need {required_cols}x{required_rows}, have {cols}x{rows}"
    )]
    TerminalTooSmall {
        required_rows: usize,
        rows: u16,
        required_cols: usize,
        cols: u16,
    },
}

impl MenuError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        MenuError::Backend(Box::new(err))
    }
}
