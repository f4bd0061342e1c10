use crate::record::NeoRecord;

/// Aggregate view over a record set for the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSummary {
    pub count: usize,
    pub mean_risk: f64,
    pub max_risk: f64,
}

/// Mean and max risk over `records`. `None` for an empty slice: an empty
/// fetch window is "no data", not an error and not NaN.
pub fn summarize(records: &[NeoRecord]) -> Option<RiskSummary> {
    if records.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    let mut max = f64::MIN;
    for record in records {
        sum += record.risk_score;
        max = max.max(record.risk_score);
    }

    Some(RiskSummary {
        count: records.len(),
        mean_risk: sum / records.len() as f64,
        max_risk: max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, score: f64) -> NeoRecord {
        NeoRecord {
            name: name.to_string(),
            date: "2025-11-11".to_string(),
            avg_diameter_km: 0.1,
            dia_min_km: 0.05,
            dia_max_km: 0.15,
            miss_distance_km: 1_000_000.0,
            miss_distance_lunar: 2.6,
            relative_velocity_km_s: 8.0,
            is_potentially_hazardous: false,
            risk_score: score,
        }
    }

    #[test]
    fn mean_and_max_over_records() {
        let records = vec![record("a", 10.0), record("b", 30.0), record("c", 50.0)];
        let summary = summarize(&records).expect("non-empty");
        assert_eq!(summary.count, 3);
        assert!((summary.mean_risk - 30.0).abs() < 1e-9);
        assert!((summary.max_risk - 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_set_is_no_data() {
        assert_eq!(summarize(&[]), None);
    }
}
