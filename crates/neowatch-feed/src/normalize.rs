use neowatch_core::{risk_score, NeoRecord, RiskInputs};

use crate::error::NormalizeError;
use crate::types::{FeedResponse, NeoObject};

const DEFAULT_NAME: &str = "Unknown";

/// Flattens a raw feed response into one scored record per (date, object)
/// pair, preserving the feed's date order and, within a date, its object
/// order.
///
/// Strict-abort policy: the first malformed record fails the whole batch.
/// Nothing is coerced; a record with no close-approach entry or with
/// non-numeric text in a numeric field is an error, never a guess. An empty
/// feed is fine and yields an empty vec.
pub fn normalize(feed: &FeedResponse) -> Result<Vec<NeoRecord>, NormalizeError> {
    let mut records = Vec::new();
    for (date, objects) in &feed.near_earth_objects {
        for object in objects {
            records.push(normalize_object(date, object)?);
        }
    }
    Ok(records)
}

fn normalize_object(date: &str, object: &NeoObject) -> Result<NeoRecord, NormalizeError> {
    let name = object.name.clone().unwrap_or_else(|| DEFAULT_NAME.to_string());
    let is_potentially_hazardous = object.is_potentially_hazardous_asteroid.unwrap_or(false);

    let diameter = object
        .estimated_diameter
        .as_ref()
        .and_then(|d| d.kilometers.as_ref())
        .ok_or_else(|| NormalizeError::MissingField {
            name: name.clone(),
            date: date.to_string(),
            field: "estimated_diameter.kilometers",
        })?;

    // Only the first approach event is used. The feed does not promise it
    // is the closest or earliest one.
    let approach =
        object
            .close_approach_data
            .first()
            .ok_or_else(|| NormalizeError::MissingApproach {
                name: name.clone(),
                date: date.to_string(),
            })?;

    let miss_distance =
        approach
            .miss_distance
            .as_ref()
            .ok_or_else(|| NormalizeError::MissingField {
                name: name.clone(),
                date: date.to_string(),
                field: "close_approach_data[0].miss_distance",
            })?;
    let relative_velocity =
        approach
            .relative_velocity
            .as_ref()
            .ok_or_else(|| NormalizeError::MissingField {
                name: name.clone(),
                date: date.to_string(),
                field: "close_approach_data[0].relative_velocity",
            })?;

    let miss_distance_km = parse_field(&name, date, "miss_distance.kilometers", &miss_distance.kilometers)?;
    let miss_distance_lunar = parse_field(&name, date, "miss_distance.lunar", &miss_distance.lunar)?;
    let relative_velocity_km_s = parse_field(
        &name,
        date,
        "relative_velocity.kilometers_per_second",
        &relative_velocity.kilometers_per_second,
    )?;

    let dia_min_km = diameter.estimated_diameter_min;
    let dia_max_km = diameter.estimated_diameter_max;
    let avg_diameter_km = (dia_min_km + dia_max_km) / 2.0;

    let score = risk_score(&RiskInputs {
        avg_diameter_km,
        miss_distance_lunar,
        relative_velocity_km_s,
        is_potentially_hazardous,
    });

    Ok(NeoRecord {
        name,
        date: date.to_string(),
        avg_diameter_km,
        dia_min_km,
        dia_max_km,
        miss_distance_km,
        miss_distance_lunar,
        relative_velocity_km_s,
        is_potentially_hazardous,
        risk_score: score,
    })
}

fn parse_field(
    name: &str,
    date: &str,
    field: &'static str,
    value: &str,
) -> Result<f64, NormalizeError> {
    value
        .trim()
        .parse()
        .map_err(|_| NormalizeError::NonNumeric {
            name: name.to_string(),
            date: date.to_string(),
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feed(value: serde_json::Value) -> FeedResponse {
        serde_json::from_value(value).expect("valid feed json")
    }

    fn object(name: &str, lunar: &str) -> serde_json::Value {
        json!({
            "name": name,
            "is_potentially_hazardous_asteroid": true,
            "estimated_diameter": {
                "kilometers": {
                    "estimated_diameter_min": 0.1,
                    "estimated_diameter_max": 0.3
                }
            },
            "close_approach_data": [{
                "miss_distance": { "kilometers": "768800.5", "lunar": lunar },
                "relative_velocity": { "kilometers_per_second": "12.5" }
            }]
        })
    }

    #[test]
    fn flattens_and_scores_one_row_per_pair() {
        let feed = feed(json!({
            "near_earth_objects": {
                "2025-11-11": [object("(2019 XS)", "2.0")],
                "2025-11-12": [object("(2007 TD)", "8.5")]
            }
        }));

        let records = normalize(&feed).expect("normalizes");
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.name, "(2019 XS)");
        assert_eq!(first.date, "2025-11-11");
        assert!((first.avg_diameter_km - 0.2).abs() < 1e-9);
        assert!((first.miss_distance_km - 768_800.5).abs() < 1e-9);
        assert!((first.miss_distance_lunar - 2.0).abs() < 1e-9);
        assert!((first.relative_velocity_km_s - 12.5).abs() < 1e-9);
        assert!(first.is_potentially_hazardous);
        // size 8 + distance 24 + velocity 10 + hazard 10
        assert!((first.risk_score - 52.0).abs() < 1e-9);

        assert_eq!(records[1].date, "2025-11-12");
    }

    #[test]
    fn missing_name_and_flag_take_defaults() {
        let feed = feed(json!({
            "near_earth_objects": {
                "2025-11-11": [{
                    "estimated_diameter": {
                        "kilometers": {
                            "estimated_diameter_min": 0.02,
                            "estimated_diameter_max": 0.05
                        }
                    },
                    "close_approach_data": [{
                        "miss_distance": { "kilometers": "5000000", "lunar": "13.0" },
                        "relative_velocity": { "kilometers_per_second": "4.0" }
                    }]
                }]
            }
        }));

        let records = normalize(&feed).expect("normalizes");
        assert_eq!(records[0].name, "Unknown");
        assert!(!records[0].is_potentially_hazardous);
    }

    #[test]
    fn empty_approach_list_aborts_the_batch() {
        let feed = feed(json!({
            "near_earth_objects": {
                "2025-11-11": [object("(ok)", "2.0")],
                "2025-11-12": [{
                    "name": "(broken)",
                    "estimated_diameter": {
                        "kilometers": {
                            "estimated_diameter_min": 0.1,
                            "estimated_diameter_max": 0.3
                        }
                    },
                    "close_approach_data": []
                }]
            }
        }));

        let err = normalize(&feed).expect_err("strict abort");
        assert_eq!(
            err,
            NormalizeError::MissingApproach {
                name: "(broken)".to_string(),
                date: "2025-11-12".to_string(),
            }
        );
    }

    #[test]
    fn non_numeric_text_is_an_error_not_zero() {
        let feed = feed(json!({
            "near_earth_objects": {
                "2025-11-11": [object("(bad)", "not-a-number")]
            }
        }));

        let err = normalize(&feed).expect_err("strict abort");
        assert!(matches!(
            err,
            NormalizeError::NonNumeric {
                field: "miss_distance.lunar",
                ..
            }
        ));
    }

    #[test]
    fn empty_feed_yields_empty_sequence() {
        let feed = feed(json!({ "near_earth_objects": {} }));
        assert_eq!(normalize(&feed).expect("ok").len(), 0);
    }

    #[test]
    fn normalization_is_idempotent() {
        let feed = feed(json!({
            "near_earth_objects": {
                "2025-11-12": [object("(b)", "4.0"), object("(a)", "1.5")],
                "2025-11-11": [object("(c)", "9.0")]
            }
        }));

        let once = normalize(&feed).expect("ok");
        let twice = normalize(&feed).expect("ok");
        assert_eq!(once, twice);
        let names: Vec<&str> = once.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["(b)", "(a)", "(c)"]);
    }
}
