use super::CONFIG_PATH;
use super::app::AppConfig;
use super::error::ConfigError;
use crate::application::viewer::Pager;
use crate::cli::RunMode;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub display: Option<Pager>,
    pub mode: Option<RunMode>,
    pub root: Option<String>,
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, `findreadme.toml` in the
/// working directory is used when present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { .. }) => {
                debug!("No configuration file, using defaults");
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    build(parsed)
}

fn build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();
    Ok(AppConfig {
        display: parsed.display.unwrap_or(defaults.display),
        mode: parsed.mode.unwrap_or(defaults.mode),
        root: parsed.root.as_deref().map(expand_path).transpose()?,
    })
}

/// Expand a leading `~` and `$VAR`/`${VAR}` references in a user supplied path
pub fn expand_path(raw: &str) -> Result<PathBuf, ConfigError> {
    let expanded = shellexpand::full(raw).map_err(|source| ConfigError::Expand {
        raw: raw.to_string(),
        source,
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}
