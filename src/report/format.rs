//! Formatted terminal output for a finished run.
//!
//! Formatting lives here so output changes stay localized and the pipeline
//! stages never print anything themselves.

use crate::domain::StateRecord;
use crate::pipeline::cac_change_pct;

/// Format the full run summary (dataset, metrics, alerts, recommendations).
pub fn format_summary(state: &StateRecord, source: &str) -> String {
    let mut out = String::new();

    out.push_str("=== bizm - Daily Business Metrics ===\n");
    out.push_str(&format!("Input: {source}\n"));
    out.push_str(&format!("Days: {}", state.daily_data.len()));
    if let Some(date) = state.today().and_then(|d| d.date) {
        out.push_str(&format!(" (latest {date})"));
    }
    out.push('\n');

    out.push_str("\nMetrics:\n");
    out.push_str(&format!("- profit        : {:.2}\n", state.profit));
    out.push_str(&format!("- cac_today     : {:.2}\n", state.cac_today));
    out.push_str(&format!("- cac_yesterday : {:.2}\n", state.cac_yesterday));
    if let Ok(pct) = cac_change_pct(state.cac_today, state.cac_yesterday) {
        out.push_str(&format!("- cac_change    : {pct:+.2}%\n"));
    }
    out.push_str(&format!("- avg_revenue   : {:.2}\n", state.avg_revenue));
    out.push_str(&format!("- avg_cost      : {:.2}\n", state.avg_cost));

    out.push_str("\nAlerts:\n");
    out.push_str(&format_list(&state.alerts));

    out.push_str("\nRecommendations:\n");
    out.push_str(&format_list(&state.recommendations));

    out
}

/// One `ALERT:`/`REC:` line per message, for scripting.
pub fn format_messages(state: &StateRecord) -> String {
    let mut out = String::new();
    for alert in &state.alerts {
        out.push_str(&format!("ALERT: {alert}\n"));
    }
    for rec in &state.recommendations {
        out.push_str(&format!("REC: {rec}\n"));
    }
    out
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        return "  (none)\n".to_string();
    }
    items.iter().map(|s| format!("- {s}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DailyRecord;

    fn finished() -> StateRecord {
        StateRecord {
            daily_data: vec![DailyRecord::new(1000.0, 800.0, 100), DailyRecord::new(1200.0, 1200.0, 80)],
            profit: 0.0,
            cac_today: 15.0,
            cac_yesterday: 8.0,
            avg_revenue: 1000.0,
            avg_cost: 800.0,
            alerts: vec!["CAC increased by 87.50%".to_string()],
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn summary_lists_metrics_and_sections() {
        let text = format_summary(&finished(), "sample.json");
        assert!(text.contains("Input: sample.json"));
        assert!(text.contains("Days: 2\n"));
        assert!(text.contains("- cac_today     : 15.00"));
        assert!(text.contains("- cac_change    : +87.50%"));
        assert!(text.contains("- CAC increased by 87.50%"));
        assert!(text.ends_with("Recommendations:\n  (none)\n"));
    }

    #[test]
    fn messages_are_prefixed_in_order() {
        let mut state = finished();
        state.recommendations = vec!["a".to_string(), "b".to_string()];
        assert_eq!(format_messages(&state), "ALERT: CAC increased by 87.50%\nREC: a\nREC: b\n");
    }
}
