use std::fs;

use journey_content::{authored_journey, parse_journey_str};
use journey_core::{compute_layout, JourneyConfig};
use pretty_assertions::assert_eq;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn fixture_matches_authored_journey() {
    let json = fs::read_to_string(fixture_path("authored_journey.json"))
        .expect("Không đọc được journey mẫu");

    let parsed = parse_journey_str(&json).expect("Không parse được journey mẫu");

    assert_eq!(parsed, authored_journey());
}

#[test]
fn authored_journey_round_trips_through_json() {
    let journey = authored_journey();
    let json = serde_json::to_string(&journey).expect("Không serialize journey");
    let parsed = parse_journey_str(&json).expect("Không parse lại journey");
    assert_eq!(parsed, journey);
}

#[test]
fn authored_layout_totals() {
    let journey = authored_journey();
    let layout = compute_layout(&journey, &JourneyConfig::default());

    assert_eq!(journey.periods.len(), 6);
    assert_eq!(journey.event_count(), 15);
    assert_eq!(layout.total_height, 5100);
    assert_eq!(
        layout.periods.iter().map(|p| p.top).collect::<Vec<_>>(),
        vec![0, 430, 1980, 2970, 3400, 4390]
    );
    assert_eq!(journey.distinct_years(), vec![2024, 2023, 2022, 2020]);
}
