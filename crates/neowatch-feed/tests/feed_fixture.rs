use std::fs;
use std::path::PathBuf;

use neowatch_core::{RiskLevel, Tone};
use neowatch_feed::{normalize, FeedResponse};

fn load_fixture() -> FeedResponse {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fixture = root.join("tests").join("data").join("feed_sample.json");
    let content = fs::read_to_string(&fixture)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", fixture.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", fixture.display()))
}

#[test]
fn fixture_flattens_in_feed_order() {
    let feed = load_fixture();
    assert_eq!(feed.element_count, Some(3));

    let records = normalize(&feed).expect("fixture normalizes");
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();

    // Dates iterate as the payload lists them, not sorted.
    assert_eq!(names, vec!["(2016 AF2)", "(2020 HF4)", "153306 (2001 JL1)"]);
    assert_eq!(records[0].date, "2025-11-12");
    assert_eq!(records[2].date, "2025-11-11");
}

#[test]
fn only_the_first_approach_event_counts() {
    let records = normalize(&load_fixture()).expect("fixture normalizes");
    let hf4 = &records[1];

    // The fixture's second approach event for (2020 HF4) is much closer and
    // faster; it must be ignored.
    assert!((hf4.miss_distance_lunar - 6.0).abs() < 1e-9);
    assert!((hf4.relative_velocity_km_s - 13.25).abs() < 1e-9);
    assert!((hf4.miss_distance_km - 2_306_400.0).abs() < 1e-6);
}

#[test]
fn fixture_scores_match_the_formula() {
    let records = normalize(&load_fixture()).expect("fixture normalizes");

    // (2020 HF4): size 10.4 + distance 12 + velocity 11 + hazard 10.
    let hf4 = &records[1];
    assert!((hf4.avg_diameter_km - 0.26).abs() < 1e-9);
    assert!(hf4.is_potentially_hazardous);
    assert!((hf4.risk_score - 43.4).abs() < 1e-9);
    assert_eq!(RiskLevel::from_score(hf4.risk_score), RiskLevel::Moderate);

    // 153306 (2001 JL1): size saturates at 40, distance 0, velocity capped
    // at 20, no hazard bonus.
    let jl1 = &records[2];
    assert!((jl1.risk_score - 60.0).abs() < 1e-9);
    assert_eq!(RiskLevel::from_score(jl1.risk_score), RiskLevel::High);
    assert_eq!(
        RiskLevel::from_score(jl1.risk_score).label(Tone::Plain),
        "High"
    );

    for record in &records {
        assert!(record.risk_score >= 0.0 && record.risk_score <= 100.0);
    }
}
