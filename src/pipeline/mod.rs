//! The daily metrics pipeline.
//!
//! Three stages run in a fixed order over a single owned `StateRecord`:
//!
//! `normalize` -> `compute_metrics` -> `recommend`
//!
//! `PipelineState` tags which stage last touched the record, so each transition
//! is a single `advance()` call and the terminal state is explicit. The path
//! never branches and never retries: the first stage error ends the run.

use tracing::debug;

use crate::domain::{Payload, StateRecord};
use crate::error::MetricsError;

pub mod metrics;
pub mod normalize;
pub mod recommend;

pub use metrics::{MIN_DAYS, cac_change_pct, compute_metrics};
pub use normalize::normalize;
pub use recommend::recommend;

/// Where a `StateRecord` currently sits in the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineState {
    Normalized(StateRecord),
    MetricsComputed(StateRecord),
    Recommended(StateRecord),
}

impl PipelineState {
    /// Enter the pipeline by normalizing a caller payload.
    pub fn start(payload: Payload) -> Self {
        PipelineState::Normalized(normalize(payload))
    }

    /// Run the next stage. `Recommended` is terminal and returns itself.
    pub fn advance(self) -> Result<Self, MetricsError> {
        let next = match self {
            PipelineState::Normalized(state) => PipelineState::MetricsComputed(compute_metrics(state)?),
            PipelineState::MetricsComputed(state) => PipelineState::Recommended(recommend(state)?),
            done @ PipelineState::Recommended(_) => return Ok(done),
        };
        debug!(stage = next.stage_name(), "pipeline stage complete");
        Ok(next)
    }

    pub fn stage_name(&self) -> &'static str {
        match self {
            PipelineState::Normalized(_) => "normalized",
            PipelineState::MetricsComputed(_) => "metrics_computed",
            PipelineState::Recommended(_) => "recommended",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Recommended(_))
    }

    pub fn state(&self) -> &StateRecord {
        match self {
            PipelineState::Normalized(state)
            | PipelineState::MetricsComputed(state)
            | PipelineState::Recommended(state) => state,
        }
    }

    pub fn into_state(self) -> StateRecord {
        match self {
            PipelineState::Normalized(state)
            | PipelineState::MetricsComputed(state)
            | PipelineState::Recommended(state) => state,
        }
    }
}

/// Run all stages over `payload` and hand the finished record to the caller.
pub fn run(payload: Payload) -> Result<StateRecord, MetricsError> {
    let done = PipelineState::start(payload).advance()?.advance()?;
    debug_assert!(done.is_terminal());
    Ok(done.into_state())
}
