use crate::application::viewer::Pager;
use crate::cli::RunMode;

pub const DEFAULT_CONFIG_PATH: &str = "findreadme.toml";
pub const DEFAULT_PAGER: Pager = Pager::Less;
pub const DEFAULT_MODE: RunMode = RunMode::Recent;
