use std::fmt::Write as _;

use crate::record::NeoRecord;

/// Canned digest for an empty record set, also used as the chatbot's
/// short-circuit reply context.
pub const EMPTY_DIGEST: &str = "No asteroids match the current filters.";

/// Bounded plain-text summary of `records` for prompt context, one line per
/// record, at most `max_rows` lines. Callers pass records already filtered
/// and sorted the way they want the model to see them.
pub fn digest(records: &[NeoRecord], max_rows: usize) -> String {
    if records.is_empty() || max_rows == 0 {
        return EMPTY_DIGEST.to_string();
    }

    let mut out = String::new();
    for (i, record) in records.iter().take(max_rows).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(
            out,
            "- {} | date: {} | risk_score: {:.1} | miss_lunar: {:.2} LD | diameter: {:.3} km | hazardous: {}",
            record.name,
            record.date,
            record.risk_score,
            record.miss_distance_lunar,
            record.avg_diameter_km,
            record.is_potentially_hazardous,
        );
    }
    out
}
