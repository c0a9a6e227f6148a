use crate::application::viewer::Pager;
use clap::{Parser, ValueEnum};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(
    name = "findreadme",
    version,
    about = "Finds README files in the current directory and all subdirectories"
)]
pub struct Cli {
    /// How to display the content of the README file
    #[arg(short, long, value_enum)]
    pub display: Option<Pager>,
    /// With more than one README, open the most recent one or list them all
    #[arg(short, long, value_enum)]
    pub mode: Option<RunMode>,
    /// Directory to scan instead of the current one
    #[arg(short, long)]
    pub root: Option<String>,
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Show a selection menu
    List,
    /// Open the most recently modified file
    Recent,
}
