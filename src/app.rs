//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - initializes logging
//! - runs the metric pipeline on the input file
//! - prints reports and writes optional exports

use clap::Parser;

use crate::cli::{Command, InputArgs, RunArgs};
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod logging;
pub mod workflow;

/// Entry point for the `bizm` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` is optional; it only feeds `BIZM_LOG`.
    dotenvy::dotenv().ok();

    let cli = crate::cli::Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::Alerts(args) => handle_alerts(args),
    }
}

fn handle_run(args: RunArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let output = workflow::run_metrics(&config)?;

    println!("{}", crate::report::format_summary(&output.state, &output.source));
    Ok(())
}

fn handle_alerts(args: InputArgs) -> Result<(), AppError> {
    let config = RunConfig {
        input_path: args.input,
        input_format: args.format,
        export_json: None,
        export_csv: None,
    };
    let output = workflow::run_metrics(&config)?;

    print!("{}", crate::report::format_messages(&output.state));
    Ok(())
}

pub fn run_config_from_args(args: &RunArgs) -> RunConfig {
    RunConfig {
        input_path: args.input.input.clone(),
        input_format: args.input.format,
        export_json: args.export.clone(),
        export_csv: args.export_csv.clone(),
    }
}
