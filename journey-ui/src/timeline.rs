use std::rc::Rc;

use journey_core::{
    compute_layout, decorative_path, parallax_offset_percent, parallax_progress, Journey,
    JourneyConfig, JourneyLayout, ScrollSnapshot, ScrollState, ScrollTracker,
};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::card::{TimelineCard, YearMarker};
use crate::listeners::EventListenerGuard;

const PATH_MASK_ID: &str = "journey-path-mask";
const BAND_WIDTH: u32 = 160;

fn period_anchor_id(index: usize) -> String {
    format!("period-{index}")
}

/// Đọc vị trí cuộn một lần cho cả callback.
fn read_snapshot() -> Option<ScrollSnapshot> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height();
    Some(ScrollSnapshot::new(
        scroll_y,
        viewport_height,
        f64::from(document_height),
    ))
}

/// Đỉnh container trong toạ độ document.
fn container_origin(container: &NodeRef, scroll_y: f64) -> Option<f64> {
    let element = container.cast::<Element>()?;
    Some(element.get_bounding_client_rect().top() + scroll_y)
}

fn scroll_to_period(index: usize) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    match document.get_element_by_id(&period_anchor_id(index)) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("không tìm thấy anchor cho giai đoạn {index}"),
    }
}

fn parallax_offsets(layout: &JourneyLayout, origin: f64, snapshot: &ScrollSnapshot) -> Vec<f64> {
    layout
        .periods
        .iter()
        .map(|period| {
            let progress = parallax_progress(
                origin + f64::from(period.top),
                f64::from(period.height),
                snapshot,
            );
            (parallax_offset_percent(progress) * 100.0).round() / 100.0
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub journey: Rc<Journey>,
    pub config: Rc<JourneyConfig>,
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    let layout = use_memo(
        (props.journey.clone(), props.config.clone()),
        |(journey, config)| compute_layout(journey, config),
    );
    let path = use_memo(
        (layout.total_height, props.config.clone()),
        |(total_height, config)| decorative_path(*total_height, config.band_size, &config.path),
    );

    let container = use_node_ref();
    let tracker = use_mut_ref(ScrollTracker::new);
    let scroll = use_state_eq(ScrollState::default);
    let parallax = use_state_eq(Vec::<f64>::new);

    {
        let container = container.clone();
        let tracker = tracker.clone();
        let scroll = scroll.clone();
        let parallax = parallax.clone();
        use_effect_with(layout.clone(), move |layout| {
            let layout = layout.clone();
            let update = Rc::new(move || {
                let Some(snapshot) = read_snapshot() else {
                    return;
                };
                let Some(origin) = container_origin(&container, snapshot.scroll_y) else {
                    return;
                };
                let state = {
                    let mut tracker = tracker.borrow_mut();
                    tracker.set_anchors(layout.anchors(origin));
                    tracker.observe(&snapshot)
                };
                parallax.set(parallax_offsets(&layout, origin, &snapshot));
                scroll.set(state);
            });

            update();

            let guards: Vec<EventListenerGuard> = web_sys::window()
                .map(|window| {
                    ["scroll", "resize"]
                        .into_iter()
                        .filter_map(|event_type| {
                            let update = update.clone();
                            EventListenerGuard::new(&window, event_type, true, move |_| update())
                                .map_err(|err| {
                                    log::warn!("Không đăng ký được listener {event_type}: {err:?}")
                                })
                                .ok()
                        })
                        .collect()
                })
                .unwrap_or_default();

            move || drop(guards)
        });
    }

    let set_nav = {
        let tracker = tracker.clone();
        let scroll = scroll.clone();
        Callback::from(move |expanded: bool| {
            let state = tracker.borrow_mut().set_nav_expanded(expanded);
            scroll.set(state);
        })
    };

    let on_jump = {
        let journey = props.journey.clone();
        Callback::from(move |year: i32| {
            if let Some(index) = journey.first_period_of_year(year) {
                scroll_to_period(index);
            }
        })
    };

    let journey = &props.journey;
    let config = &props.config;
    let state = *scroll;
    let active_location = journey.period_location(state.active_period);
    let tint = active_location
        .map(|location| location.background_tint())
        .unwrap_or("#ffffff");
    let total_height = layout.total_height;

    let strips = layout.periods.iter().map(|slot| {
        let background = journey
            .period_location(slot.index)
            .map(|location| location.gradient_css())
            .unwrap_or_else(|| "#cbd5e1".to_string());
        html! {
            <div
                key={slot.index}
                class="journey-band-strip"
                style={format!("top: {}px; height: {}px; background: {background};", slot.top, slot.height)}
            />
        }
    });

    let sections = layout.periods.iter().map(|slot| {
        let offset = parallax.get(slot.index).copied().unwrap_or(0.0);
        html! {
            <ParallaxSection key={journey.periods[slot.index].key(slot.index)} offset_percent={offset}>
                <PeriodSection
                    journey={journey.clone()}
                    index={slot.index}
                    top={slot.top}
                    config={config.clone()}
                />
            </ParallaxSection>
        }
    });

    html! {
        <div
            class="journey-timeline"
            data-location={active_location.map(|location| location.slug())}
            style={format!("background-color: {tint};")}
        >
            <div class="journey-inner">
                <h2 class="journey-heading">{"My Journey"}</h2>
                <div ref={container} class="journey-track" style={format!("height: {total_height}px;")}>
                    <svg class="journey-mask-defs" width="0" height="0" aria-hidden="true">
                        <defs>
                            <mask
                                id={PATH_MASK_ID}
                                maskUnits="userSpaceOnUse"
                                x="0"
                                y="-10"
                                width={BAND_WIDTH.to_string()}
                                height={(total_height + 20).to_string()}
                            >
                                <path
                                    class="journey-path"
                                    d={(*path).clone()}
                                    stroke="white"
                                    stroke-width="50"
                                    fill="none"
                                    pathLength="1"
                                    style={format!("animation-duration: {}ms;", config.path_draw_ms)}
                                />
                            </mask>
                        </defs>
                    </svg>
                    <div
                        class="journey-band"
                        style={format!("width: {BAND_WIDTH}px; mask: url(#{PATH_MASK_ID}); -webkit-mask: url(#{PATH_MASK_ID});")}
                    >
                        { for strips }
                    </div>
                    { for sections }
                </div>
                {
                    if state.at_bottom {
                        Html::default()
                    } else {
                        html! { <div class="journey-scroll-hint" aria-hidden="true">{"⌄"}</div> }
                    }
                }
                <NavPanel
                    years={journey.distinct_years()}
                    expanded={state.nav_expanded}
                    on_expand={set_nav}
                    on_jump={on_jump}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxSectionProps {
    pub offset_percent: f64,
    pub children: Html,
}

#[function_component(ParallaxSection)]
pub fn parallax_section(props: &ParallaxSectionProps) -> Html {
    html! {
        <div class="journey-parallax">
            <div style={format!("transform: translateY({}%);", props.offset_percent)}>
                { props.children.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PeriodSectionProps {
    pub journey: Rc<Journey>,
    pub index: usize,
    pub top: u32,
    pub config: Rc<JourneyConfig>,
}

#[function_component(PeriodSection)]
pub fn period_section(props: &PeriodSectionProps) -> Html {
    let Some(period) = props.journey.periods.get(props.index) else {
        return Html::default();
    };
    let location = props.journey.period_location(props.index);

    let cards = props
        .journey
        .events()
        .filter(|position| position.period_index == props.index)
        .map(|position| {
            html! {
                <TimelineCard
                    key={position.event.key()}
                    event={position.event.clone()}
                    alignment={position.alignment()}
                    location={location}
                    config={props.config.clone()}
                />
            }
        });

    html! {
        <section
            id={period_anchor_id(props.index)}
            class="journey-period"
            data-year={period.year.to_string()}
            data-location={location.map(|location| location.slug())}
            style={format!("top: {}px;", props.top)}
        >
            <YearMarker
                year={period.year}
                period_index={props.index}
                location={location}
                config={props.config.clone()}
            />
            { for cards }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavPanelProps {
    pub years: Vec<i32>,
    pub expanded: bool,
    pub on_expand: Callback<bool>,
    pub on_jump: Callback<i32>,
}

/// Dải cố định ở mép phải; rê chuột vào thì hiện bảng chọn năm.
#[function_component(NavPanel)]
pub fn nav_panel(props: &NavPanelProps) -> Html {
    let on_enter = props.on_expand.reform(|_: MouseEvent| true);
    let on_leave = props.on_expand.reform(|_: MouseEvent| false);

    html! {
        <nav
            class={classes!("journey-nav-strip", props.expanded.then_some("is-expanded"))}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            aria-label="Jump to year"
        >
            <div class="journey-nav-panel">
                <h3>{"Jump to Year"}</h3>
                {
                    for props.years.iter().map(|year| {
                        let year = *year;
                        let onclick = props.on_jump.reform(move |_: MouseEvent| year);
                        html! {
                            <button key={year} type="button" class="journey-nav-year" {onclick}>
                                { year }
                            </button>
                        }
                    })
                }
            </div>
        </nav>
    }
}
