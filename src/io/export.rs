//! Export a finished `StateRecord`.
//!
//! - JSON: the full record, pretty-printed (reloadable with `read_result_json`)
//! - CSV: flat `metric,value` rows that are easy to consume in spreadsheets

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::domain::StateRecord;
use crate::error::{AppError, EXIT_INPUT};

/// Write the full result as pretty JSON.
pub fn write_result_json(path: &Path, state: &StateRecord) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to create export JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, state)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to write export JSON: {e}")))?;

    info!(path = %path.display(), "wrote result JSON");
    Ok(())
}

/// Read a result JSON previously written by `write_result_json`.
pub fn read_result_json(path: &Path) -> Result<StateRecord, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to open result JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::new(EXIT_INPUT, format!("Invalid result JSON: {e}")))
}

/// Write metrics, alerts, and recommendations as `metric,value` CSV rows.
pub fn write_metrics_csv(path: &Path, state: &StateRecord) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut writer = csv::Writer::from_writer(file);

    for row in metric_rows(state) {
        writer
            .write_record([row.0.as_str(), row.1.as_str()])
            .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to flush export CSV: {e}")))?;

    info!(path = %path.display(), "wrote metrics CSV");
    Ok(())
}

fn metric_rows(state: &StateRecord) -> Vec<(String, String)> {
    let mut rows = vec![
        ("metric".to_string(), "value".to_string()),
        ("profit".to_string(), format!("{:.4}", state.profit)),
        ("cac_today".to_string(), format!("{:.4}", state.cac_today)),
        ("cac_yesterday".to_string(), format!("{:.4}", state.cac_yesterday)),
        ("avg_revenue".to_string(), format!("{:.4}", state.avg_revenue)),
        ("avg_cost".to_string(), format!("{:.4}", state.avg_cost)),
    ];
    rows.extend(state.alerts.iter().map(|a| ("alert".to_string(), a.clone())));
    rows.extend(
        state
            .recommendations
            .iter()
            .map(|r| ("recommendation".to_string(), r.clone())),
    );
    rows
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
            recommendations: vec!["Review marketing campaigns due to rising CAC".to_string()],
        }
    }

    #[test]
    fn json_export_reloads_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        let state = finished();

        write_result_json(&path, &state).unwrap();
        assert_eq!(read_result_json(&path).unwrap(), state);
    }

    #[test]
    fn csv_export_lists_metrics_then_messages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");

        write_metrics_csv(&path, &finished()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "metric,value");
        assert_eq!(lines[2], "cac_today,15.0000");
        assert_eq!(lines[6], "alert,CAC increased by 87.50%");
        assert_eq!(lines[7], "recommendation,Review marketing campaigns due to rising CAC");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn export_to_missing_dir_fails_with_input_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("output.json");
        let err = write_result_json(&path, &finished()).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INPUT);
    }
}
