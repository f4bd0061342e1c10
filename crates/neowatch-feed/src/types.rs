use chrono::{Days, NaiveDate};
use indexmap::IndexMap;
use serde::Deserialize;

/// Date window for one feed fetch. NeoWs caps the window at 7 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FeedRequest {
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Window of `days` calendar days starting at `start_date` inclusive,
    /// so `days(start, 1)` fetches a single day.
    pub fn days(start_date: NaiveDate, days: u32) -> Self {
        let span = days.max(1) - 1;
        let end_date = start_date
            .checked_add_days(Days::new(u64::from(span)))
            .unwrap_or(start_date);
        Self {
            start_date,
            end_date,
        }
    }
}

/// Raw NeoWs feed payload, deserialized as received. Field shapes mirror the
/// wire format; optional fields stay optional here and are defaulted or
/// rejected during normalization, not during deserialization.
///
/// `IndexMap` keeps the feed's own date iteration order.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub element_count: Option<u64>,
    #[serde(default)]
    pub near_earth_objects: IndexMap<String, Vec<NeoObject>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoObject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: Option<bool>,
    #[serde(default)]
    pub estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    #[serde(default)]
    pub kilometers: Option<DiameterRange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    #[serde(default)]
    pub miss_distance: Option<MissDistance>,
    #[serde(default)]
    pub relative_velocity: Option<RelativeVelocity>,
}

// NeoWs encodes these as JSON strings, not numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
    pub lunar: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
}
