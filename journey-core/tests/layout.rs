use journey_core::{
    compute_layout, period_height, Journey, JourneyConfig, JourneyEvent, EventContent, Period,
};
use proptest::prelude::*;

fn journey_with_counts(counts: &[usize]) -> Journey {
    let periods = counts
        .iter()
        .enumerate()
        .map(|(index, count)| Period {
            year: 2024 - index as i32,
            location: None,
            events: (0..*count)
                .map(|event| {
                    JourneyEvent::new(format!("M{event}"), format!("E{index}-{event}"), EventContent::Empty)
                })
                .collect(),
        })
        .collect();
    Journey::new(periods)
}

#[test]
fn empty_period_height_is_spacing() {
    let config = JourneyConfig::default();
    assert_eq!(period_height(0, &config), config.section_spacing);
}

#[test]
fn period_height_grows_with_event_count() {
    let config = JourneyConfig::default();
    assert_eq!(period_height(1, &config), 430);
    assert_eq!(period_height(5, &config), 5 * 280 + 150);
    assert!(period_height(3, &config) > period_height(2, &config));
}

#[test]
fn offsets_accumulate_previous_heights() {
    let config = JourneyConfig::default();
    let layout = compute_layout(&journey_with_counts(&[1, 5, 3]), &config);

    assert_eq!(layout.offset(0), Some(0));
    assert_eq!(layout.offset(1), Some(430));
    assert_eq!(layout.offset(2), Some(430 + 1550));
    assert_eq!(layout.offset(3), None);
    assert_eq!(layout.total_height, 430 + 1550 + 990);
    assert_eq!(layout.periods[2].bottom(), layout.total_height);
}

#[test]
fn empty_journey_has_zero_height() {
    let layout = compute_layout(&Journey::default(), &JourneyConfig::default());
    assert!(layout.periods.is_empty());
    assert_eq!(layout.total_height, 0);
}

#[test]
fn anchors_are_shifted_by_origin() {
    let layout = compute_layout(&journey_with_counts(&[1, 1]), &JourneyConfig::default());
    assert_eq!(layout.anchors(100.0), vec![100.0, 530.0]);
}

proptest! {
    #[test]
    fn total_is_sum_of_heights(counts in prop::collection::vec(0usize..12, 0..20)) {
        let config = JourneyConfig::default();
        let layout = compute_layout(&journey_with_counts(&counts), &config);

        let expected: u32 = counts.iter().map(|count| period_height(*count, &config)).sum();
        prop_assert_eq!(layout.total_height, expected);

        for (index, _) in counts.iter().enumerate() {
            let prefix: u32 = counts[..index]
                .iter()
                .map(|count| period_height(*count, &config))
                .sum();
            prop_assert_eq!(layout.offset(index), Some(prefix));
        }
    }

    #[test]
    fn height_is_strictly_increasing(count in 0usize..1000) {
        let config = JourneyConfig::default();
        prop_assert!(period_height(count + 1, &config) > period_height(count, &config));
    }
}
