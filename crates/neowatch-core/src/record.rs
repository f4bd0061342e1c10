use serde::{Deserialize, Serialize};

/// One flattened (date, object) row derived from the NeoWs feed.
///
/// Distance and velocity always come from the first close-approach event of
/// the source object; the feed gives no ordering guarantee for those events,
/// so "first" is a deliberate simplification, not "closest".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    pub name: String,
    /// The feed date key this object appeared under.
    pub date: String,
    pub avg_diameter_km: f64,
    pub dia_min_km: f64,
    pub dia_max_km: f64,
    pub miss_distance_km: f64,
    /// Miss distance in multiples of the mean Earth-Moon distance.
    pub miss_distance_lunar: f64,
    pub relative_velocity_km_s: f64,
    pub is_potentially_hazardous: bool,
    /// Composite 0-100 score, see [`crate::risk`].
    pub risk_score: f64,
}
