use journey_core::{CardAlignment, EntranceStyle, JourneyConfig, Visibility, VisibilityLatch};

#[test]
fn latch_fires_once_across_reentry() {
    let mut latch = VisibilityLatch::new(0.5);
    let ratios = [0.0, 0.2, 0.6, 0.1, 0.0, 0.7, 1.0];
    let fired = ratios.iter().filter(|ratio| latch.observe(**ratio)).count();

    assert_eq!(fired, 1);
    assert_eq!(latch.state(), Visibility::Visible);
}

#[test]
fn latch_fires_at_exact_threshold() {
    let mut latch = VisibilityLatch::new(0.5);
    assert!(!latch.observe(0.49));
    assert!(latch.observe(0.5));
}

#[test]
fn latch_ignores_nan() {
    let mut latch = VisibilityLatch::new(0.5);
    assert!(!latch.observe(f64::NAN));
    assert!(!latch.is_visible());
}

#[test]
fn alignment_alternates_by_global_index() {
    assert_eq!(CardAlignment::for_global_index(0), CardAlignment::Right);
    assert_eq!(CardAlignment::for_global_index(1), CardAlignment::Left);
    assert_eq!(CardAlignment::for_global_index(14), CardAlignment::Right);
}

#[test]
fn hidden_cards_slide_in_from_their_side() {
    let config = JourneyConfig::default();
    let right = EntranceStyle::for_card(Visibility::Pending, CardAlignment::Right, &config);
    let left = EntranceStyle::for_card(Visibility::Pending, CardAlignment::Left, &config);
    let shown = EntranceStyle::for_card(Visibility::Visible, CardAlignment::Left, &config);

    assert_eq!((right.opacity, right.translate_x), (0.0, 50.0));
    assert_eq!((left.opacity, left.translate_x), (0.0, -50.0));
    assert_eq!((shown.opacity, shown.translate_x), (1.0, 0.0));
    assert_eq!(shown.duration_ms, 500);
}

#[test]
fn marker_delay_staggers_by_period() {
    let config = JourneyConfig::default();
    let style = EntranceStyle::for_marker(Visibility::Visible, 3, &config);
    assert_eq!(style.delay_ms, 600);
    assert_eq!(style.translate_y, -40.0);
    assert!(style.to_css().contains("translate(0px, -40px)"));
}

#[test]
fn card_css_carries_transition() {
    let config = JourneyConfig::default();
    let css = EntranceStyle::for_card(Visibility::Pending, CardAlignment::Left, &config).to_css();
    assert_eq!(
        css,
        "opacity: 0; transform: translate(-50px, 0px); transition: opacity 500ms ease-out 0ms, transform 500ms ease-out 0ms;"
    );
}
