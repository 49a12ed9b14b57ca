//! Wrapper mỏng quanh các embed bên thứ ba.

use std::rc::Rc;

use journey_core::{GalleryImage, GalleryState};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, KeyboardEvent, Node};
use yew::prelude::*;

use crate::listeners::EventListenerGuard;

const INSTAGRAM_SCRIPT_SRC: &str = "https://www.instagram.com/embed.js";
const INSTAGRAM_SCRIPT_SELECTOR: &str = "script[data-journey-embed=\"instagram\"]";

#[derive(Properties, PartialEq)]
pub struct PodcastEmbedProps {
    pub url: AttrValue,
}

#[function_component(PodcastEmbed)]
pub fn podcast_embed(props: &PodcastEmbedProps) -> Html {
    html! {
        <div class="embed-podcast">
            <iframe
                src={props.url.clone()}
                allowfullscreen=true
                allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"
                loading="lazy"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoEmbedProps {
    pub url: AttrValue,
    pub title: AttrValue,
}

#[function_component(VideoEmbed)]
pub fn video_embed(props: &VideoEmbedProps) -> Html {
    html! {
        <div class="embed-video">
            <iframe
                src={props.url.clone()}
                title={props.title.clone()}
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                allowfullscreen=true
                loading="lazy"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InstagramEmbedProps {
    pub url: AttrValue,
}

/// Placeholder `blockquote`; script của Instagram thay nó bằng bài đăng thật.
#[function_component(InstagramEmbed)]
pub fn instagram_embed(props: &InstagramEmbedProps) -> Html {
    use_effect_with(props.url.clone(), |_| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            if let Err(err) = ensure_instagram_script(&document) {
                log::warn!("Không chèn được script Instagram: {err:?}");
            }
        }
        process_instagram_embeds();
        || ()
    });

    html! {
        <div class="embed-instagram">
            <blockquote
                class="instagram-media"
                data-instgrm-permalink={props.url.clone()}
                data-instgrm-version="14"
            >
                <a href={props.url.clone()} target="_blank" rel="noopener noreferrer">
                    {"View this post on Instagram"}
                </a>
            </blockquote>
        </div>
    }
}

fn ensure_instagram_script(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(INSTAGRAM_SCRIPT_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let script = document.create_element("script")?;
    script.set_attribute("src", INSTAGRAM_SCRIPT_SRC)?;
    script.set_attribute("async", "")?;
    script.set_attribute("data-journey-embed", "instagram")?;
    head.append_child(&script.dyn_into::<Node>()?)?;
    Ok(())
}

/// Gọi `window.instgrm.Embeds.process()` nếu script đã nạp xong.
fn process_instagram_embeds() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let window: JsValue = window.into();
    let Ok(instgrm) = Reflect::get(&window, &JsValue::from_str("instgrm")) else {
        return;
    };
    if instgrm.is_undefined() {
        return;
    }
    let Ok(embeds) = Reflect::get(&instgrm, &JsValue::from_str("Embeds")) else {
        return;
    };
    let Ok(process) = Reflect::get(&embeds, &JsValue::from_str("process")) else {
        return;
    };
    if let Some(process) = process.dyn_ref::<Function>() {
        if process.call0(&embeds).is_err() {
            log::debug!("instgrm.Embeds.process() thất bại");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub title: AttrValue,
    pub url: AttrValue,
    pub image: AttrValue,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    html! {
        <a class="embed-article" href={props.url.clone()} target="_blank" rel="noopener noreferrer">
            <img src={props.image.clone()} alt={props.title.clone()} width="800" height="400" loading="lazy" />
            <div class="embed-article-label">
                <p>{"LINKEDIN.COM ARTICLE"}</p>
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct MediaPreviewDialogProps {
    pub title: AttrValue,
    pub url: AttrValue,
    pub image: AttrValue,
}

/// Ảnh bìa; bấm vào mở dialog chứa iframe. Escape hoặc nền mờ để đóng.
#[function_component(MediaPreviewDialog)]
pub fn media_preview_dialog(props: &MediaPreviewDialogProps) -> Html {
    let open = use_state_eq(|| false);

    {
        let open_handle = open.clone();
        use_effect_with(*open, move |is_open| {
            let guard = if *is_open {
                escape_listener(Callback::from(move |_| open_handle.set(false)))
            } else {
                None
            };
            move || drop(guard)
        });
    }

    let on_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    html! {
        <div class="embed-preview">
            <button type="button" class="embed-preview-trigger" onclick={on_open}>
                <img src={props.image.clone()} alt={props.title.clone()} loading="lazy" />
                <div class="embed-preview-title">
                    <h3>{ props.title.clone() }</h3>
                </div>
            </button>
            {
                if *open {
                    html! {
                        <div class="journey-dialog" role="dialog" aria-modal="true" aria-label={props.title.clone()}>
                            <div class="journey-dialog-backdrop" onclick={on_close.clone()}></div>
                            <div class="journey-dialog-content">
                                <header>
                                    <h2>{ props.title.clone() }</h2>
                                    <button type="button" class="journey-dialog-close" onclick={on_close} aria-label="Close">{"×"}</button>
                                </header>
                                <iframe src={props.url.clone()} title={props.title.clone()} allow="encrypted-media" />
                            </div>
                        </div>
                    }
                } else {
                    Html::default()
                }
            }
        </div>
    }
}

fn escape_listener(on_escape: Callback<()>) -> Option<EventListenerGuard> {
    let document = web_sys::window()?.document()?;
    EventListenerGuard::new(&document, "keydown", false, move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            if event.key() == "Escape" {
                on_escape.emit(());
            }
        }
    })
    .map_err(|err| log::warn!("Không đăng ký được phím Escape: {err:?}"))
    .ok()
}

enum GalleryAction {
    Open(usize),
    Close,
    Next,
    Previous,
    Key(String),
}

#[derive(Clone, PartialEq)]
struct GalleryModel(GalleryState);

impl Reducible for GalleryModel {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0;
        match action {
            GalleryAction::Open(index) => state.open_at(index),
            GalleryAction::Close => state.close(),
            GalleryAction::Next => state.next(),
            GalleryAction::Previous => state.prev(),
            GalleryAction::Key(key) => {
                if key == "Escape" {
                    state.close();
                } else if !state.handle_key(&key) {
                    return self;
                }
            }
        }
        if state == self.0 {
            self
        } else {
            Rc::new(GalleryModel(state))
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageGalleryProps {
    pub images: Vec<GalleryImage>,
}

/// Lưới ảnh thu nhỏ kèm lightbox. Phím trái/phải chỉ được lắng nghe khi lightbox mở.
#[function_component(ImageGallery)]
pub fn image_gallery(props: &ImageGalleryProps) -> Html {
    let gallery = use_reducer_eq(|| GalleryModel(GalleryState::new(props.images.len())));

    {
        let dispatcher = gallery.dispatcher();
        use_effect_with(gallery.0.is_open(), move |is_open| {
            let guard = if *is_open {
                web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| {
                        EventListenerGuard::new(&document, "keydown", false, move |event| {
                            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                                dispatcher.dispatch(GalleryAction::Key(event.key()));
                            }
                        })
                        .map_err(|err| log::warn!("Không đăng ký được phím gallery: {err:?}"))
                        .ok()
                    })
            } else {
                None
            };
            move || drop(guard)
        });
    }

    let state = gallery.0;
    if !state.is_renderable() {
        return Html::default();
    }

    let thumbnails = props.images.iter().enumerate().map(|(index, image)| {
        let dispatcher = gallery.dispatcher();
        let onclick = Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryAction::Open(index)));
        html! {
            <button key={image.src.clone()} type="button" class="gallery-thumb" {onclick}>
                <img src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
            </button>
        }
    });

    let lightbox = if state.is_open() {
        let current = props.images.get(state.index());
        let on_close = {
            let dispatcher = gallery.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryAction::Close))
        };
        let controls = if state.shows_controls() {
            let on_prev = {
                let dispatcher = gallery.dispatcher();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryAction::Previous))
            };
            let on_next = {
                let dispatcher = gallery.dispatcher();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryAction::Next))
            };
            html! {
                <div class="gallery-controls">
                    <button type="button" class="gallery-nav" onclick={on_prev} aria-label="Previous image">{"‹"}</button>
                    <button type="button" class="gallery-nav" onclick={on_next} aria-label="Next image">{"›"}</button>
                </div>
            }
        } else {
            Html::default()
        };

        html! {
            <div class="journey-dialog" role="dialog" aria-modal="true" aria-label="Image Gallery">
                <div class="journey-dialog-backdrop" onclick={on_close.clone()}></div>
                <div class="journey-dialog-content gallery-lightbox">
                    <button type="button" class="journey-dialog-close" onclick={on_close} aria-label="Close">{"×"}</button>
                    {
                        current.map(|image| html! {
                            <img class="gallery-current" src={image.src.clone()} alt={image.alt.clone()} />
                        }).unwrap_or_default()
                    }
                    { controls }
                </div>
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <div class="gallery">
            <div class="gallery-grid">{ for thumbnails }</div>
            { lightbox }
        </div>
    }
}
