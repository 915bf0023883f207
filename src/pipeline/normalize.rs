//! Seed a `StateRecord` from the caller payload.

use crate::domain::{Payload, StateRecord};

/// Move the payload's records into a fresh state with zeroed metrics.
///
/// No validation happens here; the metric stage enforces its own preconditions.
pub fn normalize(payload: Payload) -> StateRecord {
    StateRecord {
        daily_data: payload.daily_data,
        profit: 0.0,
        cac_today: 0.0,
        cac_yesterday: 0.0,
        avg_revenue: 0.0,
        avg_cost: 0.0,
        alerts: Vec::new(),
        recommendations: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DailyRecord;

    #[test]
    fn normalize_keeps_records_and_zeroes_metrics() {
        let records = vec![DailyRecord::new(1.0, 2.0, 3), DailyRecord::new(4.0, 5.0, 6)];
        let state = normalize(Payload::new(records.clone()));

        assert_eq!(state.daily_data, records);
        assert_eq!(state.profit, 0.0);
        assert_eq!(state.cac_today, 0.0);
        assert_eq!(state.cac_yesterday, 0.0);
        assert_eq!(state.avg_revenue, 0.0);
        assert_eq!(state.avg_cost, 0.0);
        assert!(state.alerts.is_empty());
        assert!(state.recommendations.is_empty());
    }

    #[test]
    fn normalize_accepts_short_input() {
        let state = normalize(Payload::default());
        assert!(state.daily_data.is_empty());
    }
}
