//! Authored journey content and JSON loading for alternative journeys.

use journey_core::{
    EventContent, GalleryImage, Journey, JourneyError, JourneyEvent, Location, Period,
};
use serde_json::Value;

mod profile;

pub use profile::{authored_profile, Profile};

/// Parse a journey from a JSON string.
pub fn parse_journey_str(journey_json: &str) -> Result<Journey, JourneyError> {
    let value: Value =
        serde_json::from_str(journey_json).map_err(|err| JourneyError::Parse(err.to_string()))?;
    parse_journey_value(&value)
}

/// Parse a journey from a `serde_json::Value`.
///
/// Empty periods are accepted; they only cost `section_spacing` in the layout.
pub fn parse_journey_value(value: &Value) -> Result<Journey, JourneyError> {
    let periods = value
        .get("periods")
        .filter(|periods| periods.is_array())
        .ok_or(JourneyError::MissingData)?;

    let periods: Vec<Period> = serde_json::from_value(periods.clone())
        .map_err(|err| JourneyError::Parse(err.to_string()))?;

    for (index, period) in periods.iter().enumerate() {
        if period.events.is_empty() {
            log::warn!("journey period {index} ({}) has no events", period.year);
        }
    }

    let journey = Journey::new(periods);
    let duplicates = duplicate_keys(&journey);
    if !duplicates.is_empty() {
        log::warn!("journey has duplicate event keys: {}", duplicates.join(", "));
    }

    Ok(journey)
}

/// Event keys (`date-title`) that appear more than once.
pub fn duplicate_keys(journey: &Journey) -> Vec<String> {
    let mut seen = Vec::new();
    let mut duplicates = Vec::new();
    for position in journey.events() {
        let key = position.event.key();
        if seen.contains(&key) {
            if !duplicates.contains(&key) {
                duplicates.push(key);
            }
        } else {
            seen.push(key);
        }
    }
    duplicates
}

/// The journey shown on the site, newest period first.
pub fn authored_journey() -> Journey {
    Journey::new(vec![
        Period {
            year: 2024,
            location: Some(Location::Lisbon),
            events: vec![event(
                "October",
                "Podcast on my founder story with Emiliano",
                EventContent::text("Embedded video podcast placeholder"),
            )],
        },
        Period {
            year: 2024,
            location: Some(Location::SanFrancisco),
            events: vec![
                event(
                    "September",
                    "My second podcast appearance!",
                    podcast("3YuluJlnZ2JtEPRPtrcmwY"),
                ),
                event(
                    "September",
                    "My first podcast appearance!",
                    podcast("3EbtkeU24u4PJumKIIqQPd"),
                ),
                event(
                    "August",
                    "Burning Man",
                    EventContent::Instagram {
                        url: "https://www.instagram.com/p/C_kKdzHuGdn/?utm_source=ig_embed&utm_campaign=loading".to_string(),
                    },
                ),
                event("August", "Split with Conveo", EventContent::Empty),
                event(
                    "July",
                    "Start of Y Combinator S24 in San Francisco",
                    EventContent::text("Picture of me and the team placeholder"),
                ),
            ],
        },
        Period {
            year: 2024,
            location: Some(Location::Lisbon),
            events: vec![
                event("May", "Accepted into Y Combinator!", EventContent::Empty),
                event("March", "Onboarded Dieter as new CTO", EventContent::Empty),
                event(
                    "January",
                    "Co-founded Conveo.ai with Hendrik and Ben",
                    EventContent::Empty,
                ),
            ],
        },
        Period {
            year: 2023,
            location: Some(Location::Lisbon),
            events: vec![event("April", "Moved to Lisbon", EventContent::Empty)],
        },
        Period {
            year: 2022,
            location: Some(Location::NewYorkCity),
            events: vec![
                event(
                    "December",
                    "Growing Professionally and Personally in NYC",
                    EventContent::text("Blog highlight placeholder"),
                ),
                event(
                    "August",
                    "Back to Belgium (but with a promise to return one day)",
                    EventContent::Empty,
                ),
                event(
                    "May",
                    "Moved to New York City for Business Development at Panenco",
                    EventContent::text("Pictures placeholder"),
                ),
            ],
        },
        Period {
            year: 2020,
            location: Some(Location::Belgium),
            events: vec![
                event("September", "Started at Panenco", EventContent::Empty),
                event(
                    "June",
                    "Graduated MEng in Computer Science",
                    EventContent::text("Highlight of published paper placeholder"),
                ),
            ],
        },
    ])
}

/// Diving photos shown in the gallery section.
pub fn diving_gallery() -> Vec<GalleryImage> {
    const BLOB: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com";
    vec![
        GalleryImage {
            src: format!("{BLOB}/WhatsApp%20Image%202021-08-02%20at%2018.22.07-HPLQdO30MSNoXI4E5HJNhdt1ENLB3W.jpeg"),
            alt: "Two scuba divers exploring clear blue waters with coral reef visible on the right".to_string(),
        },
        GalleryImage {
            src: format!("{BLOB}/WhatsApp%20Image%202021-08-02%20at%2018.23.13-ljUMcQjJdHTKjtQGjZmSSsZKHpqtyq.jpeg"),
            alt: "Scuba diver near a coral reef wall in crystal clear blue water".to_string(),
        },
        GalleryImage {
            src: format!("{BLOB}/WhatsApp%20Image%202021-08-02%20at%2018.23.11-PVnHkM9JQ2xOhttxOUcw6cb7wipKge.jpeg"),
            alt: "Two scuba divers at different depths exploring rocky seafloor".to_string(),
        },
    ]
}

fn event(date: &str, title: &str, content: EventContent) -> JourneyEvent {
    JourneyEvent::new(date, title, content)
}

fn podcast(episode: &str) -> EventContent {
    EventContent::Podcast {
        url: format!(
            "https://open.spotify.com/embed/episode/{episode}/video?utm_source=generator"
        ),
    }
}
