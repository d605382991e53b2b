//! CLI module
//!
//! Command-line interface for checking resource strings.
//!
//! # Commands
//!
//! - `parse` - Parse a single resource string
//! - `resolve` - Resolve the read and/or write resource from a settings file

mod commands;
mod runner;

pub use commands::{Cli, Commands, ModeSelection, OutputFormat};
pub use runner::Runner;
