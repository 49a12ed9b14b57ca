use journey_core::{
    CardAlignment, ConfigOverrides, EventContent, Journey, JourneyConfig, JourneyError,
    JourneyEvent, Location, Period,
};

fn sample() -> Journey {
    Journey::new(vec![
        Period {
            year: 2024,
            location: Some(Location::Lisbon),
            events: vec![
                JourneyEvent::new("May", "A", EventContent::Empty),
                JourneyEvent::new("March", "B", EventContent::text("hello")),
            ],
        },
        Period {
            year: 2024,
            location: None,
            events: vec![JourneyEvent {
                location: Some(Location::SanFrancisco),
                ..JourneyEvent::new("July", "C", EventContent::Empty)
            }],
        },
        Period {
            year: 2020,
            location: Some(Location::Belgium),
            events: vec![JourneyEvent::new("June", "D", EventContent::Empty)],
        },
    ])
}

#[test]
fn distinct_years_keep_first_seen_order() {
    assert_eq!(sample().distinct_years(), vec![2024, 2020]);
    assert_eq!(sample().first_period_of_year(2024), Some(0));
    assert_eq!(sample().first_period_of_year(2020), Some(2));
    assert_eq!(sample().first_period_of_year(1999), None);
}

#[test]
fn flattened_positions_cross_period_boundaries() {
    let journey = sample();
    let positions: Vec<_> = journey
        .events()
        .map(|pos| (pos.period_index, pos.event_index, pos.global_index))
        .collect();
    assert_eq!(positions, vec![(0, 0, 0), (0, 1, 1), (1, 0, 2), (2, 0, 3)]);

    let alignments: Vec<_> = journey.events().map(|pos| pos.alignment()).collect();
    assert_eq!(
        alignments,
        vec![
            CardAlignment::Right,
            CardAlignment::Left,
            CardAlignment::Right,
            CardAlignment::Left
        ]
    );
    assert_eq!(journey.global_index_of("July", "C"), Some(2));
    assert_eq!(journey.global_index_of("July", "missing"), None);
}

#[test]
fn period_location_falls_back_to_event() {
    let journey = sample();
    assert_eq!(journey.period_location(0), Some(Location::Lisbon));
    assert_eq!(journey.period_location(1), Some(Location::SanFrancisco));
    assert_eq!(journey.period_location(9), None);
}

#[test]
fn blank_text_counts_as_empty() {
    assert!(EventContent::Empty.is_empty());
    assert!(EventContent::text("  ").is_empty());
    assert!(!EventContent::text("note").is_empty());
    assert!(EventContent::Gallery { images: Vec::new() }.is_empty());
}

#[test]
fn event_key_joins_date_and_title() {
    assert_eq!(JourneyEvent::new("May", "A", EventContent::Empty).key(), "May-A");
}

#[test]
fn location_serializes_by_label() {
    let value = serde_json::to_value(Location::NewYorkCity).expect("serialize location");
    assert_eq!(value, serde_json::json!("New York City"));
    for location in Location::ALL {
        let json = serde_json::to_string(&location).expect("serialize");
        assert_eq!(json, format!("\"{}\"", location.label()));
    }
}

#[test]
fn content_is_tagged_by_kind() {
    let content: EventContent = serde_json::from_value(serde_json::json!({
        "kind": "podcast",
        "url": "https://open.spotify.com/embed/episode/x"
    }))
    .expect("parse content");
    assert_eq!(
        content,
        EventContent::Podcast {
            url: "https://open.spotify.com/embed/episode/x".to_string()
        }
    );
}

#[test]
fn default_config_is_valid() {
    assert!(JourneyConfig::default().validate().is_ok());
}

#[test]
fn degenerate_config_is_rejected() {
    let zero_band = JourneyConfig {
        band_size: 0,
        ..JourneyConfig::default()
    };
    assert!(matches!(
        zero_band.validate(),
        Err(JourneyError::InvalidConfig(_))
    ));

    let bad_threshold: JourneyConfig = ConfigOverrides {
        card_threshold: Some(1.5),
        ..ConfigOverrides::default()
    }
    .into();
    assert!(bad_threshold.validate().is_err());
}

#[test]
fn overrides_only_touch_given_fields() {
    let config: JourneyConfig = ConfigOverrides {
        card_height: Some(300),
        cdn_cloud: Some("demo".to_string()),
        ..ConfigOverrides::default()
    }
    .into();
    assert_eq!(config.card_height, 300);
    assert_eq!(config.section_spacing, 150);
    assert_eq!(config.cdn_cloud.as_deref(), Some("demo"));
}
