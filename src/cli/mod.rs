//! Command-line parsing for the daily metrics tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the metric pipeline.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::InputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bizm", version, about = "Daily business metrics, alerts, and recommendations")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute metrics for a daily record file, print a summary, and optionally export.
    Run(RunArgs),
    /// Print only alerts and recommendations (useful for scripting).
    Alerts(InputArgs),
}

/// Where to read daily records from.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// JSON (`{"daily_data": [...]}`) or CSV (`revenue,cost,customers[,date]`) file.
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Input format; `auto` picks CSV for `.csv` files and JSON otherwise.
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub format: InputFormat,
}

/// Options for a full run.
#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Export the full result record to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Export metrics, alerts, and recommendations to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,
}
