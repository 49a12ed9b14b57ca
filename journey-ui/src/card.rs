use std::rc::Rc;

use journey_core::{
    CardAlignment, EntranceStyle, EventContent, ImageCdn, JourneyConfig, JourneyEvent, Location,
    Visibility,
};
use yew::prelude::*;

use crate::embeds::{ArticleCard, ImageGallery, InstagramEmbed, MediaPreviewDialog, PodcastEmbed, VideoEmbed};
use crate::hooks::use_in_view;

fn visibility(in_view: bool) -> Visibility {
    if in_view {
        Visibility::Visible
    } else {
        Visibility::Pending
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineCardProps {
    pub event: JourneyEvent,
    pub alignment: CardAlignment,
    pub location: Option<Location>,
    pub config: Rc<JourneyConfig>,
}

/// Thẻ của một sự kiện, trượt vào lần đầu hiển thị quá nửa.
#[function_component(TimelineCard)]
pub fn timeline_card(props: &TimelineCardProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), props.config.card_threshold);
    let entrance = EntranceStyle::for_card(visibility(in_view), props.alignment, &props.config);
    let cdn = ImageCdn::new(props.config.cdn_cloud.clone());
    let event = &props.event;
    let accent = props.location.or(event.location).map(Location::slug);

    html! {
        <div class="journey-card-row" data-align={props.alignment.as_str()}>
            <div ref={node} class="journey-card-motion" style={entrance.to_css()}>
                <article class="journey-card" data-location={accent}>
                    <div class="journey-card-date">
                        <span class="journey-card-dot" aria-hidden="true"></span>
                        <h4>{ event.date.clone() }</h4>
                    </div>
                    <h3 class="journey-card-title">{ event.title.clone() }</h3>
                    {
                        if event.content.is_empty() {
                            Html::default()
                        } else {
                            html! {
                                <div class="journey-card-content">{ render_content(&event.content, &cdn) }</div>
                            }
                        }
                    }
                    <span class="journey-card-arrow" aria-hidden="true"></span>
                </article>
            </div>
        </div>
    }
}

fn render_content(content: &EventContent, cdn: &ImageCdn) -> Html {
    match content {
        EventContent::Empty => Html::default(),
        EventContent::Text { text } => html! { <p>{ text.clone() }</p> },
        EventContent::Podcast { url } => html! { <PodcastEmbed url={url.clone()} /> },
        EventContent::Video { url, title } => {
            html! { <VideoEmbed url={url.clone()} title={title.clone()} /> }
        }
        EventContent::Instagram { url } => html! { <InstagramEmbed url={url.clone()} /> },
        EventContent::Article { title, url, image } => html! {
            <ArticleCard
                title={title.clone()}
                url={url.clone()}
                image={cdn.url(image, 800, 400)}
            />
        },
        EventContent::Preview { title, url, image } => html! {
            <MediaPreviewDialog
                title={title.clone()}
                url={url.clone()}
                image={cdn.url(image, 1000, 1000)}
            />
        },
        EventContent::Gallery { images } => html! { <ImageGallery images={images.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct YearMarkerProps {
    pub year: i32,
    pub period_index: usize,
    pub location: Option<Location>,
    pub config: Rc<JourneyConfig>,
}

#[function_component(YearMarker)]
pub fn year_marker(props: &YearMarkerProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), props.config.marker_threshold);
    let entrance =
        EntranceStyle::for_marker(visibility(in_view), props.period_index, &props.config);
    let background = props
        .location
        .map(Location::gradient_css)
        .unwrap_or_else(|| "#334155".to_string());

    html! {
        <div class="journey-marker-row">
            <div ref={node} class="journey-marker-motion" style={entrance.to_css()}>
                <div class="journey-marker" style={format!("background: {background};")}>
                    <span>{ props.year }</span>
                </div>
            </div>
        </div>
    }
}
