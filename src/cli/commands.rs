//! CLI commands and argument parsing

use crate::types::{LogLevel, Mode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resource string parser and validator
#[derive(Parser, Debug)]
#[command(name = "search-resource")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevelArg,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level for the subscriber
    pub fn log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level.into()
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a single resource string
    Parse {
        /// Resource in the form [collection]/[kind]
        resource: String,

        /// Query configured outside the resource string
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Resolve resources from a settings file (YAML or JSON)
    Resolve {
        /// Settings file
        #[arg(short, long)]
        settings: PathBuf,

        /// Which resource to resolve
        #[arg(short, long, default_value = "both")]
        mode: ModeSelection,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Indented JSON
    Pretty,
}

/// Mode selection for `resolve`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeSelection {
    Read,
    Write,
    Both,
}

impl ModeSelection {
    /// Modes to resolve, in order
    pub fn modes(self) -> &'static [Mode] {
        match self {
            ModeSelection::Read => &[Mode::Read],
            ModeSelection::Write => &[Mode::Write],
            ModeSelection::Both => &Mode::ALL,
        }
    }
}

/// Log level accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevelArg> for LogLevel {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Trace => LogLevel::Trace,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Error => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        let cli = Cli::parse_from(["search-resource", "parse", "abc/def", "--query", "?q=1"]);
        match &cli.command {
            Commands::Parse { resource, query } => {
                assert_eq!(resource, "abc/def");
                assert_eq!(query.as_deref(), Some("?q=1"));
            }
            Commands::Resolve { .. } => panic!("expected parse"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_resolve_command() {
        let cli = Cli::parse_from([
            "search-resource",
            "-v",
            "--format",
            "pretty",
            "resolve",
            "--settings",
            "job.yaml",
            "--mode",
            "write",
        ]);
        match &cli.command {
            Commands::Resolve { settings, mode } => {
                assert_eq!(settings, &PathBuf::from("job.yaml"));
                assert_eq!(mode.modes(), &[Mode::Write]);
            }
            Commands::Parse { .. } => panic!("expected resolve"),
        }
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_mode_defaults_to_both() {
        let cli = Cli::parse_from(["search-resource", "resolve", "-s", "job.yaml"]);
        match cli.command {
            Commands::Resolve { mode, .. } => assert_eq!(mode, ModeSelection::Both),
            Commands::Parse { .. } => panic!("expected resolve"),
        }
    }
}
