use super::defaults::{DEFAULT_MODE, DEFAULT_PAGER};
use super::error::ConfigError;
use crate::application::viewer::Pager;
use crate::cli::RunMode;
use std::path::{Path, PathBuf};

/// Application configuration loaded from findreadme.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub display: Pager,
    pub mode: RunMode,
    pub root: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display: DEFAULT_PAGER,
            mode: DEFAULT_MODE,
            root: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }
}
