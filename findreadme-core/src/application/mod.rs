//! # Application Module
//!
//! Everything around the selection menu that turns a directory tree into a
//! displayed README.
//!
//! ## Submodules
//!
//! - [`discovery`] - Recursive README scan under an explicit search root
//! - [`labels`] - Menu construction and option label formatting
//! - [`plan`] - Decides between opening a file directly and asking the user
//! - [`viewer`] - Pager process launching

pub mod discovery;
pub mod labels;
pub mod plan;
pub mod viewer;
