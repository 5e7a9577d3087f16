//! CLI argument definitions for the gene list tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use genlist_model::Category;

#[derive(Parser)]
#[command(
    name = "genlister",
    version,
    about = "Validate and combine department gene lists",
    long_about = "Validate and combine department gene lists.\n\n\
                  Expects one directory per category (germline, fusion, cnv, snv) below\n\
                  ROOT, with one sub-directory per department holding its CSV file."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Check department files and report problem rows.
    Validate(ValidateArgs),

    /// Write a flat master list per category (first row per gene wins).
    Master(ListArgs),

    /// Write a combined list per category with reporting departments.
    Combine(ListArgs),

    /// List the supported categories and their columns.
    Categories,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Gene list root containing the category directories.
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Restrict to these categories (repeatable; default: all).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    /// Validate a single file instead of scanning ROOT (needs one --category).
    #[arg(long = "file", value_name = "PATH", requires = "categories")]
    pub file: Option<PathBuf>,

    /// Department name reported for --file (default: its parent directory).
    #[arg(long = "department", requires = "file")]
    pub department: Option<String>,

    /// Print the reports as JSON instead of markdown.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Gene list root containing the category directories.
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Restrict to these categories (repeatable; default: all).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    /// Output file name written into each category directory.
    #[arg(long = "output-name", value_name = "NAME")]
    pub output_name: Option<String>,
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
