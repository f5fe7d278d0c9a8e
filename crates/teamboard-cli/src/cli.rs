//! CLI argument definitions for Teamboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "teamboard",
    version,
    about = "Teamboard - manage the design team dashboard data",
    long_about = "Manage the locally stored Teamboard document.\n\n\
                  Seed, back up, restore and inspect the team data, and resolve\n\
                  navigation states to the screen and breadcrumb trail they show."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the stored document (default: from settings).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the first document, optionally from a seed file.
    Init(InitArgs),

    /// Write a backup of the stored document.
    Export(ExportArgs),

    /// Replace the stored document with a backup.
    Import(ImportArgs),

    /// Delete the stored document.
    Clear(ClearArgs),

    /// Show record counts and document metadata.
    Summary,

    /// Resolve a navigation state to its screen and breadcrumb trail.
    Route(RouteArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// JSON seed file; any of the six collections may be omitted.
    #[arg(long = "seed", value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Replace an existing document.
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output path (default: <product>-backup-<date>.json in the current directory).
    #[arg(long = "out", value_name = "PATH", conflicts_with = "stdout")]
    pub out: Option<PathBuf>,

    /// Print the document instead of writing a file.
    #[arg(long = "stdout")]
    pub stdout: bool,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Backup file produced by `export`.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Confirm deleting all data.
    #[arg(long = "yes")]
    pub yes: bool,
}

#[derive(Args)]
pub struct RouteArgs {
    /// Section name (dashboard, designers, skills, learning, ...).
    #[arg(long = "section", value_name = "NAME")]
    pub section: String,

    /// Subsection name (designer-editor, lesson-editor, ...).
    #[arg(long = "subsection", value_name = "NAME")]
    pub subsection: Option<String>,

    /// Record id shown by the subsection.
    #[arg(long = "id", value_name = "ID")]
    pub id: Option<String>,

    /// Editor mode (view, edit, create).
    #[arg(long = "mode", value_name = "MODE")]
    pub mode: Option<String>,

    /// Owning learning module of a lesson or test editor.
    #[arg(long = "module-id", value_name = "ID")]
    pub module_id: Option<String>,

    /// Resolve the state "back" leads to instead.
    #[arg(long = "back")]
    pub back: bool,
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
