use journey_core::{
    active_section, parallax_offset_percent, parallax_progress, ScrollSnapshot, ScrollTracker,
};

#[test]
fn active_section_picks_last_anchor_above_probe() {
    let anchors = [0.0, 1000.0, 2000.0];
    assert_eq!(active_section(&anchors, 1500.0), Some(1));
    assert_eq!(active_section(&anchors, 50.0), Some(0));
    assert_eq!(active_section(&anchors, 2000.0), Some(2));
}

#[test]
fn active_section_none_before_first_anchor() {
    assert_eq!(active_section(&[300.0, 900.0], 10.0), None);
    assert_eq!(active_section(&[], 10.0), None);
}

#[test]
fn probe_is_viewport_center() {
    let snapshot = ScrollSnapshot::new(1100.0, 800.0, 6000.0);
    assert_eq!(snapshot.probe(), 1500.0);
}

#[test]
fn at_bottom_boundaries() {
    assert!(ScrollSnapshot::new(5200.0, 800.0, 6000.0).is_at_bottom());
    assert!(!ScrollSnapshot::new(5199.0, 800.0, 6000.0).is_at_bottom());
}

#[test]
fn tracker_defaults_to_first_period() {
    let mut tracker = ScrollTracker::new();
    tracker.set_anchors(vec![400.0, 1000.0]);

    let state = tracker.observe(&ScrollSnapshot::new(0.0, 200.0, 5000.0));
    assert_eq!(state.active_period, 0);
    assert!(!state.at_bottom);
}

#[test]
fn tracker_keeps_previous_section_without_anchors() {
    let mut tracker = ScrollTracker::new();
    tracker.set_anchors(vec![0.0, 1000.0, 2000.0]);
    tracker.observe(&ScrollSnapshot::new(1100.0, 800.0, 6000.0));
    assert_eq!(tracker.state().active_period, 1);

    tracker.set_anchors(Vec::new());
    let state = tracker.observe(&ScrollSnapshot::new(5200.0, 800.0, 6000.0));
    assert_eq!(state.active_period, 1);
    assert!(state.at_bottom);
}

#[test]
fn latest_snapshot_wins() {
    let mut tracker = ScrollTracker::new();
    tracker.set_anchors(vec![0.0, 1000.0, 2000.0]);
    tracker.observe(&ScrollSnapshot::new(1800.0, 800.0, 6000.0));
    let state = tracker.observe(&ScrollSnapshot::new(0.0, 800.0, 6000.0));
    assert_eq!(state.active_period, 0);
}

#[test]
fn nav_flag_survives_scroll_updates() {
    let mut tracker = ScrollTracker::new();
    tracker.set_nav_expanded(true);
    let state = tracker.observe(&ScrollSnapshot::new(0.0, 800.0, 6000.0));
    assert!(state.nav_expanded);
    assert!(!tracker.set_nav_expanded(false).nav_expanded);
}

#[test]
fn parallax_maps_viewport_travel_to_half_height() {
    // section 1000..1500, viewport 800
    let entering = ScrollSnapshot::new(200.0, 800.0, 6000.0);
    let halfway = ScrollSnapshot::new(850.0, 800.0, 6000.0);
    let leaving = ScrollSnapshot::new(1500.0, 800.0, 6000.0);
    let past = ScrollSnapshot::new(4000.0, 800.0, 6000.0);

    assert_eq!(parallax_progress(1000.0, 500.0, &entering), 0.0);
    assert_eq!(parallax_progress(1000.0, 500.0, &halfway), 0.5);
    assert_eq!(parallax_progress(1000.0, 500.0, &leaving), 1.0);
    assert_eq!(parallax_progress(1000.0, 500.0, &past), 1.0);
    assert_eq!(parallax_offset_percent(0.5), 25.0);
    assert_eq!(parallax_offset_percent(1.0), 50.0);
}

#[test]
fn parallax_with_degenerate_span_is_zero() {
    let snapshot = ScrollSnapshot::new(0.0, 0.0, 0.0);
    assert_eq!(parallax_progress(0.0, 0.0, &snapshot), 0.0);
}
