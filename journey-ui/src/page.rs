use std::rc::Rc;

use journey_content::{authored_journey, authored_profile, Profile};
use journey_core::{ConfigOverrides, Journey, JourneyConfig};
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};
use yew::prelude::*;

use crate::embeds::ImageGallery;
use crate::logging::init_logging;
use crate::styles;
use crate::timeline::Timeline;

#[derive(Properties, PartialEq)]
pub struct JourneyPageProps {
    pub journey: Rc<Journey>,
    pub profile: Rc<Profile>,
    pub config: Rc<JourneyConfig>,
}

#[function_component(JourneyPage)]
pub fn journey_page(props: &JourneyPageProps) -> Html {
    let profile = &props.profile;

    {
        let title = profile.document_title();
        use_effect_with(title, |title| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                if let Err(err) = styles::ensure_styles(&document) {
                    log::error!("Không chèn được CSS: {err:?}");
                }
                document.set_title(title);
            }
            || ()
        });
    }

    let on_contact = {
        let mailto = profile.mailto();
        Callback::from(move |_: MouseEvent| {
            let opened = web_sys::window().map(|window| window.open_with_url(&mailto));
            if !matches!(opened, Some(Ok(_))) {
                log::warn!("Không mở được {mailto}");
            }
        })
    };

    html! {
        <div class="journey-page">
            <header class="journey-header">
                <h1>{ profile.name.clone() }</h1>
                <p>{ profile.tagline.clone() }</p>
            </header>
            <main class="journey-main">
                <section class="journey-section">
                    <h2>{"About Me"}</h2>
                    { for profile.about.iter().map(|paragraph| render_about(paragraph, profile)) }
                </section>

                <section class="journey-section">
                    <h2>{"Featured Article"}</h2>
                    <div class="journey-featured">
                        <iframe
                            src={profile.featured_article_url.clone()}
                            title={profile.featured_article_title.clone()}
                        />
                    </div>
                </section>
            </main>

            <Timeline journey={props.journey.clone()} config={props.config.clone()} />

            <main class="journey-main">
                {
                    if profile.gallery.is_empty() {
                        Html::default()
                    } else {
                        html! {
                            <section class="journey-section">
                                <h2>{"Gallery"}</h2>
                                <ImageGallery images={profile.gallery.clone()} />
                            </section>
                        }
                    }
                }
                <section class="journey-section">
                    <h2>{"Work in Progress"}</h2>
                    <p>
                        {"This website is currently a work in progress. I'll be adding more content, projects, and images soon. Stay tuned!"}
                    </p>
                </section>
            </main>

            <footer class="journey-footer">
                <button type="button" class="journey-contact" onclick={on_contact}>{"Get in touch"}</button>
            </footer>
        </div>
    }
}

/// Tên nơi làm việc trong đoạn giới thiệu được biến thành link.
fn render_about(paragraph: &str, profile: &Profile) -> Html {
    match paragraph.split_once(profile.employer.as_str()) {
        Some((before, after)) if !profile.employer.is_empty() => html! {
            <p>
                { before.to_string() }
                <a href={profile.employer_url.clone()} target="_blank" rel="noopener noreferrer">
                    { profile.employer.clone() }
                </a>
                { after.to_string() }
            </p>
        },
        _ => html! { <p>{ paragraph.to_string() }</p> },
    }
}

/// Gắn trang với nội dung soạn sẵn vào phần tử khớp `selector`.
#[wasm_bindgen]
pub fn mount_journey(selector: &str) -> Result<(), JsValue> {
    mount(selector, authored_journey(), JourneyConfig::default())
}

/// Gắn trang với journey (và cấu hình ghi đè tuỳ chọn) truyền từ JS.
#[wasm_bindgen]
pub fn mount_journey_with(
    selector: &str,
    journey: JsValue,
    config: Option<JsValue>,
) -> Result<(), JsValue> {
    let journey: Journey = from_value(journey)?;
    let config = match config {
        Some(js_cfg) => JourneyConfig::from(from_value::<ConfigOverrides>(js_cfg)?),
        None => JourneyConfig::default(),
    };
    config
        .validate()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    mount(selector, journey, config)
}

fn mount(selector: &str, journey: Journey, config: JourneyConfig) -> Result<(), JsValue> {
    init_logging();
    console_error_panic_hook::set_once();

    let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
    let document: Document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

    let target: Element = document
        .query_selector(selector)
        .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
        .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

    log::info!(
        "mount journey: periods={} events={}",
        journey.periods.len(),
        journey.event_count()
    );

    let props = JourneyPageProps {
        journey: Rc::new(journey),
        profile: Rc::new(authored_profile()),
        config: Rc::new(config),
    };
    yew::Renderer::<JourneyPage>::with_root_and_props(target, props).render();
    Ok(())
}
