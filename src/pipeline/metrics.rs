//! Metric computation: profit, CAC trend, trailing averages, and CAC alerts.
//!
//! All metrics look at the last two days:
//! - `today = daily_data[-1]`, `yesterday = daily_data[-2]`
//! - averages cover every day *except* today, rounded once from the exact mean
//!
//! Zero divisors are reported as `MetricsError::DivisionByZero` instead of
//! letting `inf`/`NaN` leak into the result.

use tracing::{debug, warn};

use crate::domain::{CAC_ALERT_THRESHOLD_PCT, DailyRecord, StateRecord};
use crate::error::MetricsError;
use crate::math::exact_mean;

/// Minimum number of days needed for a day-over-day comparison.
pub const MIN_DAYS: usize = 2;

/// Compute all derived metrics and replace `alerts`.
pub fn compute_metrics(mut state: StateRecord) -> Result<StateRecord, MetricsError> {
    let data = &state.daily_data;
    let n = data.len();
    if n < MIN_DAYS {
        return Err(MetricsError::InsufficientData { found: n });
    }

    let today = &data[n - 1];
    let yesterday = &data[n - 2];

    let profit = today.revenue - today.cost;

    let cac_today = cac(today, "today's customers is zero")?;
    let cac_yesterday = cac(yesterday, "yesterday's customers is zero")?;
    let change_pct = cac_change_pct(cac_today, cac_yesterday)?;

    let history = &data[..n - 1];
    let avg_revenue = exact_mean(history.iter().map(|d| d.revenue));
    let avg_cost = exact_mean(history.iter().map(|d| d.cost));

    let mut alerts = Vec::new();
    if change_pct > CAC_ALERT_THRESHOLD_PCT {
        let alert = format!("CAC increased by {change_pct:.2}%");
        warn!(cac_today, cac_yesterday, "{alert}");
        alerts.push(alert);
    }

    debug!(
        days = n,
        profit,
        cac_today,
        cac_yesterday,
        cac_change_pct = change_pct,
        avg_revenue,
        avg_cost,
        "computed daily metrics"
    );

    state.profit = profit;
    state.cac_today = cac_today;
    state.cac_yesterday = cac_yesterday;
    state.avg_revenue = avg_revenue;
    state.avg_cost = avg_cost;
    state.alerts = alerts;
    Ok(state)
}

/// Customer acquisition cost for one day.
fn cac(day: &DailyRecord, what: &'static str) -> Result<f64, MetricsError> {
    if day.customers == 0 {
        return Err(MetricsError::DivisionByZero { what });
    }
    Ok(day.cost / day.customers as f64)
}

/// Day-over-day CAC change in percent.
pub fn cac_change_pct(cac_today: f64, cac_yesterday: f64) -> Result<f64, MetricsError> {
    if cac_yesterday == 0.0 {
        return Err(MetricsError::DivisionByZero {
            what: "yesterday's CAC is zero",
        });
    }
    Ok((cac_today - cac_yesterday) / cac_yesterday * 100.0)
}
