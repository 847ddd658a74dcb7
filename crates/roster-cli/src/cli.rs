//! CLI argument definitions for roster.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster - browse, search and edit a list of user records",
    long_about = "Load a list of user records from an HTTP endpoint or a JSON file and\n\
                  browse it page by page: search across all fields, select rows,\n\
                  edit fields in place and delete records."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file to use instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Load records from this HTTP endpoint (overrides the settings file).
    #[arg(long = "endpoint", value_name = "URL", global = true, conflicts_with = "file")]
    pub endpoint: Option<String>,

    /// Load records from a local JSON file (overrides the settings file).
    #[arg(long = "file", value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the records and print one page.
    List(ListArgs),

    /// Interactive session reading commands from stdin.
    Shell,

    /// Inspect or create the settings file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Parser)]
pub struct ListArgs {
    /// Only show records where any field matches this pattern.
    #[arg(long = "search", short = 's', value_name = "PATTERN")]
    pub search: Option<String>,

    /// Page to show (1-based, clamped into range).
    #[arg(long = "page", short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the configured row limit).
    #[arg(long = "rows", short = 'r', value_name = "N")]
    pub rows: Option<usize>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the settings file path.
    Path,

    /// Print the effective settings as TOML.
    Show,

    /// Write the default settings to the settings file.
    Init {
        /// Overwrite an existing file.
        #[arg(long = "force")]
        force: bool,
    },
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
