//! Rule-based recommendations derived from computed metrics.
//!
//! Rules are independent and always evaluated in this order:
//! 1. negative profit -> reduce costs
//! 2. `cac_today > cac_yesterday * 1.2` -> review campaigns
//! 3. today's revenue above the trailing average -> increase ad budget

use tracing::debug;

use crate::domain::{CAC_REVIEW_MULTIPLIER, REC_INCREASE_ADS, REC_REDUCE_COSTS, REC_REVIEW_CAMPAIGNS, StateRecord};
use crate::error::MetricsError;

/// Replace `recommendations` with the rules that fire for `state`.
///
/// Expects metrics to be computed already; every other field passes through.
pub fn recommend(mut state: StateRecord) -> Result<StateRecord, MetricsError> {
    let today_revenue = match state.today() {
        Some(today) => today.revenue,
        None => return Err(MetricsError::InsufficientData { found: 0 }),
    };

    let mut recommendations = Vec::new();

    if state.profit < 0.0 {
        recommendations.push(REC_REDUCE_COSTS.to_string());
    }

    if state.cac_today > state.cac_yesterday * CAC_REVIEW_MULTIPLIER {
        recommendations.push(REC_REVIEW_CAMPAIGNS.to_string());
    }

    if today_revenue > state.avg_revenue {
        recommendations.push(REC_INCREASE_ADS.to_string());
    }

    debug!(count = recommendations.len(), "derived recommendations");

    state.recommendations = recommendations;
    Ok(state)
}
