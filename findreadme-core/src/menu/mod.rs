//! Menu data model
//!
//! - [`MenuDescription`] - caller supplied title, subtitle and options
//! - [`MenuOption`] - a single selectable entry
//! - [`MenuResult`] - outcome of one menu display
//! - [`SelectionState`] - navigation state driven by key actions

mod state;
mod types;

pub use state::{MenuPhase, SelectionState};
pub use types::{MenuDescription, MenuOption, MenuResult, OptionKind};
