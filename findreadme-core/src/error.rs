use crate::application::discovery::DiscoveryError;
use crate::application::viewer::ViewerError;
use crate::config::ConfigError;
use crate::tui::MenuError;
use std::io;
use thiserror::Error;

/// Any failure of one `findreadme` run
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Viewer(#[from] ViewerError),
    #[error("failed to determine the current directory: {0}")]
    CurrentDir(#[source] io::Error),
}
