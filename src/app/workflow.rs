//! Shared run workflow used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load payload -> metric pipeline -> optional exports
//!
//! Subcommands can then focus on presentation.

use tracing::info;

use crate::domain::{RunConfig, StateRecord};
use crate::error::AppError;

/// All outputs of a single `bizm` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub source: String,
    pub state: StateRecord,
}

/// Load the configured input, run the pipeline, and write any exports.
pub fn run_metrics(config: &RunConfig) -> Result<RunOutput, AppError> {
    // 1) Load and validate records.
    let payload = crate::io::ingest::load_payload(&config.input_path, config.input_format)?;

    // 2) Normalize -> metrics -> recommendations.
    let state = crate::pipeline::run(payload)?;
    info!(
        alerts = state.alerts.len(),
        recommendations = state.recommendations.len(),
        "pipeline finished"
    );

    // 3) Optional exports.
    if let Some(path) = &config.export_json {
        crate::io::export::write_result_json(path, &state)?;
    }
    if let Some(path) = &config.export_csv {
        crate::io::export::write_metrics_csv(path, &state)?;
    }

    Ok(RunOutput {
        source: config.input_path.display().to_string(),
        state,
    })
}
