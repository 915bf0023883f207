//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - threaded through the metric pipeline in-memory
//! - exported to JSON/CSV
//! - reloaded later for comparisons or tests

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Alert when CAC rises by more than this percentage day-over-day.
pub const CAC_ALERT_THRESHOLD_PCT: f64 = 20.0;

/// Recommend a campaign review when today's CAC exceeds yesterday's by this factor.
///
/// Numerically the same trigger as `CAC_ALERT_THRESHOLD_PCT`, but evaluated as a
/// separate comparison by the recommendation stage.
pub const CAC_REVIEW_MULTIPLIER: f64 = 1.2;

pub const REC_REDUCE_COSTS: &str = "Reduce costs if profit is negative";
pub const REC_REVIEW_CAMPAIGNS: &str = "Review marketing campaigns due to rising CAC";
pub const REC_INCREASE_ADS: &str = "Consider increasing advertising budget as sales trend is growing";

/// One day of business activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Informational only; never used in computations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub revenue: f64,
    pub cost: f64,
    /// Signed so bad counts reach the metric stage as-is; only zero is rejected there.
    pub customers: i64,
    /// Any other input keys, carried through to the exported result unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DailyRecord {
    pub fn new(revenue: f64, cost: f64, customers: i64) -> Self {
        Self {
            date: None,
            revenue,
            cost,
            customers,
            extra: Map::new(),
        }
    }
}

/// Raw caller input: chronological daily records, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payload {
    pub daily_data: Vec<DailyRecord>,
}

impl Payload {
    pub fn new(daily_data: Vec<DailyRecord>) -> Self {
        Self { daily_data }
    }
}

/// The accumulating result threaded through the pipeline.
///
/// Derived fields start zeroed/empty and are filled by the stage that owns them:
/// metrics + `alerts` by the metric stage, `recommendations` by the
/// recommendation stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateRecord {
    pub daily_data: Vec<DailyRecord>,
    pub profit: f64,
    pub cac_today: f64,
    pub cac_yesterday: f64,
    pub avg_revenue: f64,
    pub avg_cost: f64,
    pub alerts: Vec<String>,
    pub recommendations: Vec<String>,
}

impl StateRecord {
    /// Most recent day, if any.
    pub fn today(&self) -> Option<&DailyRecord> {
        self.daily_data.last()
    }
}

/// Input file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// `.csv` extension selects CSV, anything else JSON.
    Auto,
    Json,
    Csv,
}

impl InputFormat {
    /// Resolve `Auto` against a file path.
    pub fn resolve(self, path: &std::path::Path) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let is_csv = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
                if is_csv { InputFormat::Csv } else { InputFormat::Json }
            }
            other => other,
        }
    }
}

/// Resolved configuration for a single `bizm` run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub input_format: InputFormat,
    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
}
