use journey_core::GalleryImage;
use serde::{Deserialize, Serialize};

use crate::diving_gallery;

/// Page shell content around the timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub employer: String,
    pub employer_url: String,
    pub featured_article_url: String,
    pub featured_article_title: String,
    pub contact_email: String,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    pub fn document_title(&self) -> String {
        format!("{} || {}", self.name, self.tagline)
    }
}

pub fn authored_profile() -> Profile {
    Profile {
        name: "Nicolas Desmedt".to_string(),
        tagline: "Software Engineer & People Enthusiast".to_string(),
        about: vec![
            "Software engineer with a passion to meet people, share a laugh, and create more."
                .to_string(),
            "Currently in Lisbon growing an office for Panenco - and happy to meet up!".to_string(),
        ],
        employer: "Panenco".to_string(),
        employer_url: "https://www.panenco.com".to_string(),
        featured_article_url:
            "https://www.linkedin.com/embed/feed/update/urn:li:ugcPost:7014139094632906752"
                .to_string(),
        featured_article_title: "LinkedIn - Growing in NYC".to_string(),
        contact_email: "nicolasdesmedt97@gmail.com".to_string(),
        gallery: diving_gallery(),
    }
}
