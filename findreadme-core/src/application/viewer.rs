//! Pager process launching
//!
//! The chosen file is handed to the pager as a single argument. No shell is
//! involved, so file names are never interpreted.

use clap::ValueEnum;
use serde::Deserialize;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::{debug, info};

/// Program used to display a file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pager {
    #[default]
    Less,
    More,
}

impl Pager {
    pub fn program(&self) -> &'static str {
        match self {
            Pager::Less => "less",
            Pager::More => "more",
        }
    }
}

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no file to display")]
    EmptyPath,
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("'{program}' exited with status {code:?}")]
    Exited { program: String, code: Option<i32> },
}

/// Launches an external program to display files
#[derive(Debug, Clone)]
pub struct Viewer {
    program: OsString,
}

impl Viewer {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn for_pager(pager: Pager) -> Self {
        Self::new(pager.program())
    }

    /// Command that would display `path`
    pub fn command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(path);
        command
    }

    /// Display `path` and wait for the program to exit
    pub fn open(&self, path: &Path) -> Result<(), ViewerError> {
        if path.as_os_str().is_empty() {
            return Err(ViewerError::EmptyPath);
        }
        let program = self.program.to_string_lossy().into_owned();
        info!(program = %program, path = %path.display(), "Opening file");

        let status = self
            .command(path)
            .status()
            .map_err(|source| ViewerError::Spawn {
                program: program.clone(),
                source,
            })?;
        debug!(program = %program, ?status, "Viewer exited");

        if !status.success() {
            return Err(ViewerError::Exited {
                program,
                code: status.code(),
            });
        }
        Ok(())
    }
}
