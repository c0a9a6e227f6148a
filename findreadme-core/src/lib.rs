pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod menu;
pub mod tui;

pub use application::{discovery, labels, plan, viewer};
pub use cli::{Cli, RunMode};
pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use menu::{MenuDescription, MenuOption, MenuResult, OptionKind};

use application::discovery::SearchContext;
use application::plan::Plan;
use application::viewer::Viewer;
use config::loader::expand_path;
use constants::NOT_FOUND_MESSAGE;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};
use tui::SelectionMenu;

pub fn run(cli: Cli) -> Result<(), AppError> {
    init_tracing();
    info!("Starting findreadme");
    debug!(
        display = ?cli.display,
        mode = ?cli.mode,
        root = ?cli.root,
        config = ?cli.config,
        "CLI arguments parsed"
    );

    let config_path = cli.config.as_deref().map(expand_path).transpose()?;
    let mut config = AppConfig::load(config_path.as_deref())?;
    if let Some(path) = &config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    }
    apply_cli_overrides(&cli, &mut config)?;

    let context = match &config.root {
        Some(root) => SearchContext::new(root.clone()),
        None => SearchContext::current_dir().map_err(AppError::CurrentDir)?,
    };
    let report = discovery::scan(&context)?;
    let viewer = Viewer::for_pager(config.display);

    info!(mode = ?config.mode, found = report.files.len(), "Running in selected mode");
    match plan::plan(&report.files, config.mode, &context) {
        Plan::NotFound => println!("{NOT_FOUND_MESSAGE}"),
        Plan::Open(path) => viewer.open(&path)?,
        Plan::Choose(menu) => match SelectionMenu::new(&menu).display()? {
            MenuResult::Selected { index, option } => {
                let path = report
                    .files
                    .get(index)
                    .map(|file| file.path.clone())
                    .unwrap_or_else(|| PathBuf::from(&option.payload));
                viewer.open(&path)?;
            }
            MenuResult::Exit => info!("Selection menu exited without a choice"),
        },
    }
    info!("findreadme finished");
    Ok(())
}

/// Command line flags win over the configuration file
pub fn apply_cli_overrides(cli: &Cli, config: &mut AppConfig) -> Result<(), ConfigError> {
    if let Some(display) = cli.display {
        config.display = display;
    }
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(root) = &cli.root {
        config.root = Some(expand_path(root)?);
    }
    Ok(())
}

// stdout belongs to the menu, so logs go to stderr and stay quiet by default
fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
