//! CLI argument definitions for the speed dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use speed_model::Year;

#[derive(Parser)]
#[command(
    name = "speed-dashboard",
    version,
    about = "Internet speed dashboard - derive chart views from a per-country speed table",
    long_about = "Load a per-country internet speed table (2017-2024) and derive the\n\
                  dashboard views: top speeds, most improved, trends, regional\n\
                  inequality, speed vs. improvement, regional totals, distribution\n\
                  and the global average."
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

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute every dashboard view for one filter selection.
    Views(ViewsArgs),

    /// List the countries in the dataset.
    Countries(DataArgs),

    /// List the regions in the dataset.
    Regions(DataArgs),

    /// Interactive session: read filter changes from stdin and re-render.
    Session(SessionArgs),
}

#[derive(Args)]
pub struct DataArgs {
    /// Speed table CSV (default: settings, then ./internet_speeds.csv).
    #[arg(value_name = "CSV")]
    pub data: Option<PathBuf>,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Region to show, or "all".
    #[arg(long = "region", value_name = "REGION")]
    pub region: Option<String>,

    /// Year to show (default: most recent year with data).
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<Year>,

    /// Country to include in the trend view (repeatable, order kept).
    #[arg(long = "country", value_name = "COUNTRY")]
    pub countries: Vec<String>,

    /// Number of entries in the top speeds view.
    #[arg(long = "top-n", value_name = "N", value_parser = speed_model::parse_top_n)]
    pub top_n: Option<usize>,

    /// Start year of the most-improved comparison.
    #[arg(long = "improved-from", value_name = "YEAR")]
    pub improved_from: Option<Year>,

    /// End year of the most-improved comparison.
    #[arg(long = "improved-to", value_name = "YEAR")]
    pub improved_to: Option<Year>,
}

#[derive(Args)]
pub struct ViewsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format (default: settings, then table).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Write views to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct SessionArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format (default: settings, then table).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
