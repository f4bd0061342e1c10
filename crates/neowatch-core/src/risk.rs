use serde::{Deserialize, Serialize};

use crate::record::NeoRecord;

/// The four risk-relevant fields of a record.
///
/// Weights: size 40, distance 30, velocity 20, hazard flag 10.
#[derive(Debug, Clone, Copy)]
pub struct RiskInputs {
    pub avg_diameter_km: f64,
    pub miss_distance_lunar: f64,
    pub relative_velocity_km_s: f64,
    pub is_potentially_hazardous: bool,
}

impl From<&NeoRecord> for RiskInputs {
    fn from(record: &NeoRecord) -> Self {
        Self {
            avg_diameter_km: record.avg_diameter_km,
            miss_distance_lunar: record.miss_distance_lunar,
            relative_velocity_km_s: record.relative_velocity_km_s,
            is_potentially_hazardous: record.is_potentially_hazardous,
        }
    }
}

/// Per-term decomposition of the composite score.
#[derive(Debug, Clone, Copy)]
pub struct RiskBreakdown {
    pub size: f64,
    pub distance: f64,
    pub velocity: f64,
    pub hazard: f64,
}

impl RiskBreakdown {
    /// Sum of the four terms, clamped to [0, 100]. Only the total is
    /// clamped; the individual terms are left as computed.
    pub fn total(&self) -> f64 {
        (self.size + self.distance + self.velocity + self.hazard).clamp(0.0, 100.0)
    }
}

pub fn risk_breakdown(input: &RiskInputs) -> RiskBreakdown {
    // Saturates at 1 km diameter: anything larger maxes the size term.
    // Known quirk of the weighting, kept as-is.
    let size = (input.avg_diameter_km * 40.0).min(40.0);

    let distance = ((10.0 - input.miss_distance_lunar) * 3.0).max(0.0);

    let velo = input.relative_velocity_km_s;
    let velocity = if velo > 20.0 {
        20.0
    } else if velo > 5.0 {
        // Linear ramp: 0 points at 5 km/s up to 20 points at 20 km/s.
        (velo - 5.0) * (20.0 / 15.0)
    } else {
        0.0
    };

    let hazard = if input.is_potentially_hazardous {
        10.0
    } else {
        0.0
    };

    RiskBreakdown {
        size,
        distance,
        velocity,
        hazard,
    }
}

/// Composite 0-100 risk score. Pure and deterministic.
pub fn risk_score(input: &RiskInputs) -> f64 {
    risk_breakdown(input).total()
}

/// Five-way classification of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Wording variant for [`RiskLevel::label`]. One canonical mapping with a
/// tone parameter instead of two drifting five-way branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Bare level name, used in prompts and tables.
    Plain,
    /// Dashboard sentence form.
    Advisory,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score < 20.0 {
            Self::VeryLow
        } else if score < 40.0 {
            Self::Low
        } else if score < 60.0 {
            Self::Moderate
        } else if score < 80.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub fn label(self, tone: Tone) -> &'static str {
        match (self, tone) {
            (Self::VeryLow, Tone::Plain) => "Very Low",
            (Self::Low, Tone::Plain) => "Low",
            (Self::Moderate, Tone::Plain) => "Moderate",
            (Self::High, Tone::Plain) => "High",
            (Self::VeryHigh, Tone::Plain) => "Very High",
            (Self::VeryLow, Tone::Advisory) => "Very low risk. All good.",
            (Self::Low, Tone::Advisory) => "Low risk. NASA is relaxed.",
            (Self::Moderate, Tone::Advisory) => "Moderate risk, but nothing serious.",
            (Self::High, Tone::Advisory) => "High risk. Worth paying attention.",
            (Self::VeryHigh, Tone::Advisory) => "Very high risk - but no need to panic.",
        }
    }
}
