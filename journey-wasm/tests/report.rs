use journey_content::authored_journey;
use journey_core::{JourneyConfig, Location};
use journey_wasm::layout_report;

#[test]
fn report_pairs_layout_with_periods() {
    let report = layout_report(&authored_journey(), &JourneyConfig::default());

    assert_eq!(report.total_height, 5100);
    assert_eq!(report.periods.len(), 6);
    assert_eq!(report.periods[1].year, 2024);
    assert_eq!(report.periods[1].location, Some(Location::SanFrancisco));
    assert_eq!(report.periods[1].top, 430);
    assert_eq!(report.periods[1].height, 1550);
    assert!(report.path.starts_with("M80,-10 C30,200 30,400 80,600 "));
    assert_eq!(report.path.matches('C').count(), 8);
}

#[test]
fn report_serializes_snake_case_fields() {
    let report = layout_report(&authored_journey(), &JourneyConfig::default());
    let value = serde_json::to_value(&report).expect("Không serialize report");

    assert_eq!(value["total_height"], 5100);
    assert_eq!(value["periods"][4]["location"], "New York City");
    assert_eq!(value["periods"][5]["top"], 4390);
}
