#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use journey_ui::styles::ensure_styles;
use journey_ui::EventListenerGuard;
use wasm_bindgen_test::*;
use web_sys::{Document, Event};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("chạy trong trình duyệt")
}

#[wasm_bindgen_test]
fn ensure_styles_inserts_a_single_style_tag() {
    let document = document();
    ensure_styles(&document).expect("lần đầu");
    ensure_styles(&document).expect("lần hai");

    let tags = document
        .query_selector_all("style[data-journey-ui]")
        .expect("selector hợp lệ");
    assert_eq!(tags.length(), 1);
}

#[wasm_bindgen_test]
fn dropped_listener_stops_receiving_events() {
    let document = document();
    let target = document.create_element("div").expect("tạo div");
    let hits = Rc::new(Cell::new(0));

    let guard = {
        let hits = hits.clone();
        EventListenerGuard::new(&target, "ping", false, move |_| hits.set(hits.get() + 1))
            .expect("đăng ký listener")
    };

    let event = Event::new("ping").expect("tạo event");
    target.dispatch_event(&event).expect("dispatch");
    assert_eq!(hits.get(), 1);

    drop(guard);
    target.dispatch_event(&event).expect("dispatch lại");
    assert_eq!(hits.get(), 1);
}
